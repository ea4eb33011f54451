use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::FeatureRow;

/// Interface to a loaded reorder classifier.
///
/// Implementations are immutable once constructed and shared read-only
/// across concurrent requests.
pub trait ReorderClassifier: Send + Sync {
    /// Predicted label: `true` means the product should be reordered
    fn classify(&self, row: &FeatureRow) -> Result<bool, ModelError>;

    /// Class probabilities ordered `[no_reorder, reorder]`
    fn class_probabilities(&self, row: &FeatureRow) -> Result<[f64; 2], ModelError>;

    /// Runtime type tag reported by model introspection
    fn model_type(&self) -> &str;
}
