use serde::{Deserialize, Serialize};

/// Version tag reported with every single-record prediction
pub const MODEL_VERSION: &str = "1.0.0";

/// Class probabilities in model order: index 0 = no reorder, index 1 = reorder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassProbabilities {
    pub no_reorder: f64,
    pub reorder: f64,
}

impl ClassProbabilities {
    pub fn from_pair(pair: [f64; 2]) -> Self {
        Self {
            no_reorder: pair[0],
            reorder: pair[1],
        }
    }

    pub fn confidence(&self) -> f64 {
        self.no_reorder.max(self.reorder)
    }
}

/// Raw engine output for one row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub reorder_required: bool,
    pub probabilities: ClassProbabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub reorder_required: bool,
    pub confidence: f64,
    pub probability_reorder: f64,
    pub probability_no_reorder: f64,
    pub model_version: String,
}

impl From<Evaluation> for PredictionResult {
    fn from(evaluation: Evaluation) -> Self {
        let probabilities = evaluation.probabilities;
        Self {
            reorder_required: evaluation.reorder_required,
            confidence: probabilities.confidence(),
            probability_reorder: probabilities.reorder,
            probability_no_reorder: probabilities.no_reorder,
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

/// Per-record batch entry. Carries no `probability_no_reorder` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPredictionItem {
    pub product_id: Option<String>,
    pub reorder_required: bool,
    pub confidence: f64,
    pub probability_reorder: f64,
}

impl BatchPredictionItem {
    pub fn new(product_id: Option<String>, evaluation: Evaluation) -> Self {
        Self {
            product_id,
            reorder_required: evaluation.reorder_required,
            confidence: evaluation.probabilities.confidence(),
            probability_reorder: evaluation.probabilities.reorder,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchPredictionResponse {
    pub predictions: Vec<BatchPredictionItem>,
    pub total_products: usize,
    pub reorder_needed: usize,
}

impl BatchPredictionResponse {
    pub fn new(predictions: Vec<BatchPredictionItem>, total_products: usize) -> Self {
        let reorder_needed = predictions.iter().filter(|p| p.reorder_required).count();
        Self {
            predictions,
            total_products,
            reorder_needed,
        }
    }
}
