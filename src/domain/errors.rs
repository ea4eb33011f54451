use std::path::PathBuf;
use thiserror::Error;

/// Input field rejected before it reaches the normalizer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: must be greater than 0 (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field}: must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field}: must be greater than or equal to {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: i64,
        value: i64,
    },
}

/// Derived feature could not be computed from the record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivationError {
    #[error("Cannot derive profit margin: cost_price {cost_price} is zero or too close to zero")]
    ZeroCostPrice { cost_price: f64 },

    #[error(
        "Cannot derive profit margin: result is not finite (cost_price {cost_price}, selling_price {selling_price})"
    )]
    NonFiniteMargin { cost_price: f64, selling_price: f64 },
}

/// Row rejected by the loaded model at inference time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("Found unknown category {value:?} in column {feature:?} during transform")]
    UnknownCategory { feature: String, value: String },

    #[error("Input column {feature:?} contains a non-finite value")]
    NonFiniteFeature { feature: &'static str },

    #[error("Model returned invalid class probabilities {probabilities:?}")]
    InvalidProbabilities { probabilities: [f64; 2] },

    #[error("Model inference failed: {reason}")]
    Inference { reason: String },
}

/// Failure to bring the model artifact into memory at startup
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("Model file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to deserialize model artifact: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Incompatible model schema: {reason}")]
    Schema { reason: String },
}

/// Request-scoped prediction failure
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Model not loaded")]
    ModelUnavailable,

    #[error(transparent)]
    Derivation(#[from] DerivationError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("record {index}: {source}")]
    InBatch {
        index: usize,
        #[source]
        source: Box<PredictionError>,
    },
}

impl PredictionError {
    /// Tags a failure with the position of the record that caused it
    pub fn in_batch(index: usize, source: PredictionError) -> Self {
        PredictionError::InBatch {
            index,
            source: Box::new(source),
        }
    }

    /// True when the failure was caused by the submitted data rather than the model
    pub fn is_client_error(&self) -> bool {
        match self {
            PredictionError::Derivation(_) => true,
            PredictionError::InBatch { source, .. } => source.is_client_error(),
            PredictionError::ModelUnavailable | PredictionError::Model(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_formatting() {
        let error = ValidationError::BelowMinimum {
            field: "reorder_frequency",
            min: 1,
            value: 0,
        };

        let msg = error.to_string();
        assert!(msg.contains("reorder_frequency"));
        assert!(msg.contains(">= 1") || msg.contains("equal to 1"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn test_batch_error_keeps_client_classification() {
        let derivation = PredictionError::InBatch {
            index: 2,
            source: Box::new(PredictionError::Derivation(DerivationError::ZeroCostPrice {
                cost_price: 0.0,
            })),
        };
        assert!(derivation.is_client_error());
        assert!(derivation.to_string().starts_with("record 2: "));

        let model = PredictionError::InBatch {
            index: 0,
            source: Box::new(PredictionError::Model(ModelError::UnknownCategory {
                feature: "brand".to_string(),
                value: "Nope".to_string(),
            })),
        };
        assert!(!model.is_client_error());
        assert!(model.to_string().contains("Nope"));
    }
}
