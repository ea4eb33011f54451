use crate::application::ml::model_loader::load_classifier;
use crate::application::ml::prediction_service::PredictionService;
use crate::config::ModelEnvConfig;
use crate::domain::errors::PredictionError;
use crate::domain::model_info::{ModelInfo, PerformanceMetrics};
use crate::domain::ports::ReorderClassifier;
use crate::infrastructure::observability::Metrics;
use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SERVICE_NAME: &str = "Stock Prediction ML Service";
pub const SERVICE_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Ready,
    Degraded,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Ready => "healthy",
            ModelStatus::Degraded => "degraded",
        }
    }
}

/// Immutable per-process state shared by every request handler.
///
/// Built once at startup; `predictor` is `None` when the artifact failed to load.
pub struct ServiceContext {
    predictor: Option<PredictionService>,
    model_path: PathBuf,
    performance: PerformanceMetrics,
    pub metrics: Metrics,
}

impl ServiceContext {
    pub fn new(
        classifier: Option<Arc<dyn ReorderClassifier>>,
        model_path: PathBuf,
        performance: PerformanceMetrics,
        metrics: Metrics,
    ) -> Self {
        metrics.model_loaded.set(i64::from(classifier.is_some()));
        Self {
            predictor: classifier.map(PredictionService::new),
            model_path,
            performance,
            metrics,
        }
    }

    /// Loads the artifact named by the config and assembles the context.
    pub fn bootstrap(config: &ModelEnvConfig) -> Result<Self> {
        let classifier = load_classifier(&config.model_path);
        Ok(Self::new(
            classifier,
            config.model_path.clone(),
            config.performance,
            Metrics::new()?,
        ))
    }

    /// The prediction service, or `ModelUnavailable` in degraded mode
    pub fn predictor(&self) -> Result<&PredictionService, PredictionError> {
        self.predictor
            .as_ref()
            .ok_or(PredictionError::ModelUnavailable)
    }

    pub fn model_loaded(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn status(&self) -> ModelStatus {
        if self.model_loaded() {
            ModelStatus::Ready
        } else {
            ModelStatus::Degraded
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn model_info(&self) -> Result<ModelInfo, PredictionError> {
        self.predictor()
            .map(|p| ModelInfo::new(p.model_type(), self.performance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degraded_context() {
        let config = ModelEnvConfig {
            model_path: PathBuf::from("missing_model.pkl"),
            ..ModelEnvConfig::default()
        };
        let context = ServiceContext::bootstrap(&config).unwrap();

        assert!(!context.model_loaded());
        assert_eq!(context.status(), ModelStatus::Degraded);
        assert_eq!(context.status().as_str(), "degraded");
        assert!(matches!(
            context.predictor(),
            Err(PredictionError::ModelUnavailable)
        ));
        assert!(context.model_info().is_err());
        assert!(context.metrics.render().contains("reorder_model_loaded 0"));
    }
}
