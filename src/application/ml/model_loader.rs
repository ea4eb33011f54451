use crate::domain::ports::ReorderClassifier;
use crate::infrastructure::ml::LogisticPipeline;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Loads the classifier artifact once at startup.
///
/// Never fails: any problem is logged and reported as `None`, which puts the
/// service in degraded mode until an operator restarts it.
pub fn load_classifier(model_path: &Path) -> Option<Arc<dyn ReorderClassifier>> {
    match LogisticPipeline::from_file(model_path) {
        Ok(pipeline) => {
            info!(
                "Model loaded successfully from {:?} (type: {})",
                model_path, pipeline.model_type
            );
            Some(Arc::new(pipeline))
        }
        Err(e) => {
            warn!(
                "Could not load model from {:?}: {}. Prediction endpoints are disabled.",
                model_path, e
            );
            None
        }
    }
}
