//! Error-to-response mapping.
//!
//! Validation failures are the caller's fault (400); an unbound model or a
//! failing inference is the service's fault (500). Every failure body has
//! the same `{"error": "<message>"}` shape, with the message naming the
//! violated constraint and nothing else.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use irrigation_engine::{ErrorResponse, PredictError};

/// Axum-facing wrapper over engine errors.
#[derive(Debug)]
pub struct ApiError(PredictError);

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.0.to_string());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use irrigation_engine::SensorReadingError;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::from(PredictError::from(SensorReadingError::WrongArity {
            actual: 5,
        }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_unavailable_maps_to_500() {
        let err = ApiError::from(PredictError::ModelUnavailable);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_inference_failure_maps_to_500() {
        let err = ApiError::from(PredictError::Inference("nan in weights".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
