use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::feature_registry::FeatureRow;
use crate::domain::ml::normalizer::normalize;
use crate::domain::ports::ReorderClassifier;
use crate::domain::prediction::{
    BatchPredictionItem, BatchPredictionResponse, ClassProbabilities, Evaluation, PredictionResult,
};
use crate::domain::product::ProductRecord;
use std::sync::Arc;
use tracing::debug;

const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Runs records through normalization, the classifier and response shaping.
#[derive(Clone)]
pub struct PredictionService {
    classifier: Arc<dyn ReorderClassifier>,
}

impl PredictionService {
    pub fn new(classifier: Arc<dyn ReorderClassifier>) -> Self {
        Self { classifier }
    }

    pub fn model_type(&self) -> &str {
        self.classifier.model_type()
    }

    /// Label and class probabilities for one normalized row.
    pub fn evaluate(&self, row: &FeatureRow) -> Result<Evaluation, ModelError> {
        let reorder_required = self.classifier.classify(row)?;
        let pair = self.classifier.class_probabilities(row)?;

        let in_range = pair.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p));
        if !in_range || (pair[0] + pair[1] - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(ModelError::InvalidProbabilities {
                probabilities: pair,
            });
        }

        Ok(Evaluation {
            reorder_required,
            probabilities: ClassProbabilities::from_pair(pair),
        })
    }

    /// Evaluates rows in order, stopping at the first one the model rejects.
    /// The error carries that row's position.
    pub fn evaluate_rows(&self, rows: &[FeatureRow]) -> Result<Vec<Evaluation>, PredictionError> {
        rows.iter()
            .enumerate()
            .map(|(index, row)| {
                self.evaluate(row)
                    .map_err(|e| PredictionError::in_batch(index, e.into()))
            })
            .collect()
    }

    fn evaluate_record(&self, record: &ProductRecord) -> Result<Evaluation, PredictionError> {
        let row = normalize(record)?;
        Ok(self.evaluate(&row)?)
    }

    pub fn predict(&self, record: &ProductRecord) -> Result<PredictionResult, PredictionError> {
        let evaluation = self.evaluate_record(record)?;
        debug!(
            "Prediction for {:?}: reorder={} p={:.4}",
            record.product_id, evaluation.reorder_required, evaluation.probabilities.reorder
        );
        Ok(PredictionResult::from(evaluation))
    }

    /// Scores records in submission order. The first failing record aborts
    /// the whole batch.
    pub fn predict_batch(
        &self,
        records: &[ProductRecord],
    ) -> Result<BatchPredictionResponse, PredictionError> {
        let mut rows = Vec::with_capacity(records.len());
        let mut derivation_failure = None;
        for (index, record) in records.iter().enumerate() {
            match normalize(record) {
                Ok(row) => rows.push(row),
                Err(e) => {
                    derivation_failure = Some(PredictionError::in_batch(index, e.into()));
                    break;
                }
            }
        }

        // Rows ahead of a derivation failure are still scored so that an
        // earlier model rejection is the one reported.
        let evaluations = self.evaluate_rows(&rows)?;
        if let Some(err) = derivation_failure {
            return Err(err);
        }

        let predictions: Vec<BatchPredictionItem> = records
            .iter()
            .zip(evaluations)
            .map(|(record, evaluation)| {
                BatchPredictionItem::new(record.product_id.clone(), evaluation)
            })
            .collect();

        let response = BatchPredictionResponse::new(predictions, records.len());
        debug!(
            "Batch scored: {} products, {} need reorder",
            response.total_products, response.reorder_needed
        );
        Ok(response)
    }
}
