//! Router and request handlers.
//!
//! The HTTP layer stays thin: it parses bodies, delegates to the engine's
//! [`PredictHandler`], and maps errors to statuses via [`ApiError`]. The
//! model reference travels inside [`AppState`], injected at startup and
//! shared read-only by every request.

use std::any::Any;
use std::path::PathBuf;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use http_body_util::Full;
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use irrigation_engine::{ErrorResponse, HealthStatus, PredictError, PredictHandler, PredictResponse};

use crate::error::ApiError;

/// Shared application state.
///
/// Cheap to clone: the model lives behind an `Arc` inside the handler.
#[derive(Clone)]
pub struct AppState {
    /// Prediction pipeline with the injected model reference.
    pub handler: PredictHandler,

    /// Static page served at `/`.
    pub index_path: PathBuf,
}

impl AppState {
    /// Build state from the loaded (or absent) model and the index path.
    pub fn new(handler: PredictHandler, index_path: PathBuf) -> Self {
        Self {
            handler,
            index_path,
        }
    }
}

/// Build the service router.
///
/// CORS is open to any origin: the browser page may be served from
/// elsewhere during development, and the API carries no credentials.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/predict", post(predict))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// GET `/` - the manual prediction page.
async fn index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(&state.index_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            warn!(path = %state.index_path.display(), error = %e, "Index page asset missing");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("Index page not found")),
            )
                .into_response()
        }
    }
}

/// POST `/predict` - run the full validation + inference pipeline.
///
/// The body is parsed here rather than through the `Json` extractor so that
/// malformed JSON produces the service's own 400 error shape.
async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::from(PredictError::InvalidPayload))?;

    let response = state.handler.handle(&payload)?;
    Ok(Json(response))
}

/// GET `/health` - liveness plus model load status.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::healthy(state.handler.model_loaded()))
}

/// Uniform 404 for unmatched routes.
async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Endpoint not found")),
    )
}

/// Last-resort 500 for panics anywhere below the catch-panic layer.
fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Full::from(r#"{"error":"Internal server error"}"#))
        .expect("static panic response")
}
