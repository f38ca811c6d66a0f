//! HTTP Surface Tests
//!
//! Drive the router in-process with `tower::ServiceExt::oneshot` and verify
//! the full contract: routes, status codes, error bodies, and the success
//! response shape.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use irrigation_engine::contracts::SensorReading;
use irrigation_engine::model::artifact::{LinearModel, ModelArtifact, OutputKind};
use irrigation_engine::model::{InferenceError, PredictionOutput, PredictionValue, Predictor};
use irrigation_engine::{PredictHandler, SENSOR_COUNT};
use irrigation_server::app::{router, AppState};

// ============================================================================
// TEST FIXTURES
// ============================================================================

struct FixedPredictor(PredictionOutput);

impl Predictor for FixedPredictor {
    fn predict(&self, _: &SensorReading) -> Result<PredictionOutput, InferenceError> {
        Ok(self.0.clone())
    }
}

struct PanickingPredictor;

impl Predictor for PanickingPredictor {
    fn predict(&self, _: &SensorReading) -> Result<PredictionOutput, InferenceError> {
        panic!("corrupted weights")
    }
}

fn app(model: Option<Arc<dyn Predictor>>) -> Router {
    app_with_index(model, PathBuf::from("/nonexistent/index.html"))
}

fn app_with_index(model: Option<Arc<dyn Predictor>>, index_path: PathBuf) -> Router {
    router(AppState::new(PredictHandler::new(model), index_path))
}

/// Artifact with one strongly positive, one strongly negative, and one
/// neutral head, so decisions are deterministic for any valid input.
fn demo_model() -> Arc<dyn Predictor> {
    let artifact = ModelArtifact {
        name: "test-model".to_string(),
        version: "1.0.0".to_string(),
        weights: vec![vec![0.0; SENSOR_COUNT]; 3],
        bias: vec![10.0, -10.0, 10.0],
        output: OutputKind::Probability,
    };
    Arc::new(LinearModel::new(artifact).expect("valid test artifact"))
}

fn predict_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("infallible service");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collect")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, body)
}

fn valid_values() -> Vec<Value> {
    (0..SENSOR_COUNT).map(|_| json!(0.5)).collect()
}

// ============================================================================
// HEALTH
// ============================================================================

#[tokio::test]
async fn test_health_reports_missing_model() {
    let (status, body) = send(
        app(None),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy", "model_loaded": false}));
}

#[tokio::test]
async fn test_health_reports_loaded_model() {
    let (status, body) = send(
        app(Some(demo_model())),
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_loaded"], json!(true));
}

// ============================================================================
// ROUTING
// ============================================================================

#[tokio::test]
async fn test_unmatched_route_is_json_404() {
    let (status, body) = send(
        app(None),
        Request::builder().uri("/nope").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Endpoint not found"}));
}

#[tokio::test]
async fn test_index_missing_asset_is_404() {
    let (status, body) = send(
        app(None),
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Index page not found"}));
}

#[tokio::test]
async fn test_index_serves_page_from_disk() {
    let path = std::env::temp_dir().join(format!("index-{}.html", uuid::Uuid::new_v4()));
    std::fs::write(&path, "<html><body>Smart Irrigation</body></html>").unwrap();

    let response = app_with_index(None, path.clone())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Smart Irrigation"));

    std::fs::remove_file(&path).ok();
}

// ============================================================================
// PREDICT - VALIDATION
// ============================================================================

#[tokio::test]
async fn test_predict_malformed_body_is_400() {
    let (status, body) = send(
        app(Some(demo_model())),
        predict_request("this is not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Invalid request. Please provide sensor_values array."})
    );
}

#[tokio::test]
async fn test_predict_missing_key_is_400() {
    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"values": [1, 2, 3]}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Invalid request. Please provide sensor_values array.")
    );
}

#[tokio::test]
async fn test_predict_wrong_arity_is_400() {
    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"sensor_values": [0.1, 0.2, 0.3]}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Invalid sensor_values. Expected array of 20 numeric values.")
    );
}

#[tokio::test]
async fn test_predict_non_numeric_is_400() {
    let mut values = valid_values();
    values[4] = json!("soggy");

    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"sensor_values": values}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("All sensor values must be numeric."));
}

#[tokio::test]
async fn test_predict_out_of_range_is_400() {
    let mut values = valid_values();
    values[0] = json!(-0.5);

    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"sensor_values": values}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("All sensor values must be between 0.0 and 1.0")
    );
}

// ============================================================================
// PREDICT - MODEL AND INFERENCE
// ============================================================================

#[tokio::test]
async fn test_predict_without_model_is_500() {
    let (status, body) = send(
        app(None),
        predict_request(json!({"sensor_values": valid_values()}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        json!("Machine learning model is not available")
    );
}

#[tokio::test]
async fn test_predict_success_shape() {
    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"sensor_values": valid_values()}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    assert_eq!(
        body["predictions"],
        json!({"parcel_0": "ON", "parcel_1": "OFF", "parcel_2": "ON"})
    );
    assert_eq!(body["sensor_values"], json!(valid_values()));
}

#[tokio::test]
async fn test_predict_echoes_mixed_number_spellings() {
    let mut values = valid_values();
    values[0] = json!(0);
    values[1] = json!(1);

    let (status, body) = send(
        app(Some(demo_model())),
        predict_request(json!({"sensor_values": values}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // Integers come back as integers, not re-encoded floats.
    assert_eq!(body["sensor_values"][0], json!(0));
    assert_eq!(body["sensor_values"][1], json!(1));
}

#[tokio::test]
async fn test_predict_scalar_output_replicates() {
    let model: Arc<dyn Predictor> = Arc::new(FixedPredictor(PredictionOutput::Scalar(
        PredictionValue::Float(0.7),
    )));

    let (status, body) = send(
        app(Some(model)),
        predict_request(json!({"sensor_values": valid_values()}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["predictions"],
        json!({"parcel_0": "ON", "parcel_1": "ON", "parcel_2": "ON"})
    );
}

#[tokio::test]
async fn test_panicking_model_is_generic_500() {
    let model: Arc<dyn Predictor> = Arc::new(PanickingPredictor);

    let (status, body) = send(
        app(Some(model)),
        predict_request(json!({"sensor_values": valid_values()}).to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal server error"}));
}
