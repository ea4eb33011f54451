use crate::domain::errors::{PredictionError, ValidationError};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

pub const MODEL_NOT_LOADED: &str = "Model not loaded";
pub const MODEL_NOT_LOADED_DETAIL: &str = "Model not loaded. Please check server configuration.";

/// Request-boundary error. Rendered as `{"detail": ...}` with a matching status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed body or out-of-range field
    Validation(String),
    /// Record is well-formed but a derived feature cannot be computed
    BadRequest(String),
    /// No model artifact is loaded
    Unavailable(String),
    /// The model rejected the input
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::BadRequest(_) => "derivation",
            ApiError::Unavailable(_) => "unavailable",
            ApiError::Internal(_) => "model",
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            ApiError::Validation(d)
            | ApiError::BadRequest(d)
            | ApiError::Unavailable(d)
            | ApiError::Internal(d) => d,
        }
    }

    pub fn invalid_record(index: Option<usize>, error: ValidationError) -> Self {
        match index {
            Some(i) => ApiError::Validation(format!("record {}: {}", i, error)),
            None => ApiError::Validation(error.to_string()),
        }
    }

    /// Maps a prediction failure, prefixing model errors with `context`
    /// (e.g. "Prediction error").
    pub fn from_prediction(error: PredictionError, context: &str) -> Self {
        match error {
            PredictionError::ModelUnavailable => ApiError::Unavailable(MODEL_NOT_LOADED.to_string()),
            e if e.is_client_error() => ApiError::BadRequest(e.to_string()),
            e => ApiError::Internal(format!("{}: {}", context, e)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DerivationError, ModelError};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation(String::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::BadRequest(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unavailable(String::new()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::Internal(String::new()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_prediction_error_mapping() {
        let derivation = ApiError::from_prediction(
            PredictionError::Derivation(DerivationError::ZeroCostPrice { cost_price: 0.0 }),
            "Prediction error",
        );
        assert_eq!(derivation.status(), StatusCode::BAD_REQUEST);
        assert!(derivation.detail().contains("profit margin"));

        let model = ApiError::from_prediction(
            PredictionError::Model(ModelError::NonFiniteFeature {
                feature: "cost_price",
            }),
            "Prediction error",
        );
        assert_eq!(model.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(model.detail().starts_with("Prediction error: "));

        let unavailable =
            ApiError::from_prediction(PredictionError::ModelUnavailable, "Prediction error");
        assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unavailable.detail(), MODEL_NOT_LOADED);

        let batch = ApiError::from_prediction(
            PredictionError::InBatch {
                index: 4,
                source: Box::new(PredictionError::Model(ModelError::UnknownCategory {
                    feature: "supplier".to_string(),
                    value: "Nobody".to_string(),
                })),
            },
            "Batch prediction error",
        );
        assert_eq!(batch.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(batch.detail().starts_with("Batch prediction error: record 4: "));
    }
}
