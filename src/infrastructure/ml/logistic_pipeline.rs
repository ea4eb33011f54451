//! Fitted preprocessing + logistic regression pipeline.
//!
//! The artifact is a JSON document holding the fitted state of a standard
//! scaler over the numerical columns, a one-hot encoder over the categorical
//! columns, and a binary logistic regression over the concatenated output.
//! Scoring runs on smartcore: the encoded row is a `DenseMatrix` multiplied by
//! the coefficient column, and the decision value goes through smartcore's
//! sigmoid.

use crate::domain::errors::{ArtifactLoadError, ModelError};
use crate::domain::ml::feature_registry::{
    CATEGORICAL_FEATURES, FeatureRow, FeatureValue, NUMERICAL_FEATURES,
};
use crate::domain::ports::ReorderClassifier;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::numbers::realnum::RealNumber;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    fn scale_value(&self, index: usize, column: &'static str, value: f64) -> Result<f64, ModelError> {
        if !value.is_finite() {
            return Err(ModelError::NonFiniteFeature { feature: column });
        }
        // Constant columns are fitted with a zero scale; they are only centered
        let scale = match self.scale[index] {
            s if s == 0.0 => 1.0,
            s => s,
        };
        Ok((value - self.mean[index]) / scale)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategoryPolicy {
    /// Reject rows carrying a level not seen during fitting
    #[default]
    Error,
    /// Encode unseen levels as all zeros
    Ignore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneHotEncoder {
    pub categories: Vec<Vec<String>>,
    #[serde(default)]
    pub handle_unknown: UnknownCategoryPolicy,
}

impl OneHotEncoder {
    fn encode_into(
        &self,
        index: usize,
        column: &str,
        level: &str,
        encoded: &mut Vec<f64>,
    ) -> Result<(), ModelError> {
        let levels = &self.categories[index];
        let position = levels.iter().position(|known| known == level);
        if position.is_none() && self.handle_unknown == UnknownCategoryPolicy::Error {
            return Err(ModelError::UnknownCategory {
                feature: column.to_string(),
                value: level.to_string(),
            });
        }
        encoded.extend((0..levels.len()).map(|j| if Some(j) == position { 1.0 } else { 0.0 }));
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

/// On-disk layout of the artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PipelineArtifact {
    model_type: String,
    numerical_features: Vec<String>,
    categorical_features: Vec<String>,
    scaler: StandardScaler,
    encoder: OneHotEncoder,
    classifier: LogisticRegression,
}

impl PipelineArtifact {
    /// Width of the encoded input vector
    fn encoded_width(&self) -> usize {
        self.numerical_features.len()
            + self
                .encoder
                .categories
                .iter()
                .map(Vec::len)
                .sum::<usize>()
    }

    fn check_schema(&self) -> Result<(), ArtifactLoadError> {
        let schema_error = |reason: String| Err(ArtifactLoadError::Schema { reason });

        if self.numerical_features != NUMERICAL_FEATURES {
            return schema_error(format!(
                "numerical features {:?} do not match expected {:?}",
                self.numerical_features, NUMERICAL_FEATURES
            ));
        }
        if self.categorical_features != CATEGORICAL_FEATURES {
            return schema_error(format!(
                "categorical features {:?} do not match expected {:?}",
                self.categorical_features, CATEGORICAL_FEATURES
            ));
        }

        let n_numerical = NUMERICAL_FEATURES.len();
        if self.scaler.mean.len() != n_numerical || self.scaler.scale.len() != n_numerical {
            return schema_error(format!(
                "scaler expects {} columns, got mean={} scale={}",
                n_numerical,
                self.scaler.mean.len(),
                self.scaler.scale.len()
            ));
        }
        if self.encoder.categories.len() != CATEGORICAL_FEATURES.len() {
            return schema_error(format!(
                "encoder expects {} columns, got {}",
                CATEGORICAL_FEATURES.len(),
                self.encoder.categories.len()
            ));
        }
        if self.classifier.coefficients.len() != self.encoded_width() {
            return schema_error(format!(
                "classifier has {} coefficients but the encoded input has {} columns",
                self.classifier.coefficients.len(),
                self.encoded_width()
            ));
        }

        let all_finite = self
            .scaler
            .mean
            .iter()
            .chain(&self.scaler.scale)
            .chain(&self.classifier.coefficients)
            .chain(std::iter::once(&self.classifier.intercept))
            .all(|v| v.is_finite());
        if !all_finite {
            return schema_error("artifact contains non-finite parameters".to_string());
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LogisticPipeline {
    pub model_type: String,
    scaler: StandardScaler,
    encoder: OneHotEncoder,
    /// Coefficients as an `encoded_width x 1` column
    weights: DenseMatrix<f64>,
    intercept: f64,
    encoded_width: usize,
}

impl LogisticPipeline {
    pub fn from_file(path: &Path) -> Result<Self, ArtifactLoadError> {
        if !path.exists() {
            return Err(ArtifactLoadError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let buffer = std::fs::read(path).map_err(|source| ArtifactLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let pipeline = Self::parse(&buffer)?;
        debug!(
            "Model artifact {:?}: {} encoded inputs, unknown categories = {:?}",
            path, pipeline.encoded_width, pipeline.encoder.handle_unknown
        );
        Ok(pipeline)
    }

    fn parse(bytes: &[u8]) -> Result<Self, ArtifactLoadError> {
        let artifact: PipelineArtifact = serde_json::from_slice(bytes)?;
        artifact.check_schema()?;

        let column: Vec<Vec<f64>> = artifact
            .classifier
            .coefficients
            .iter()
            .map(|w| vec![*w])
            .collect();
        let weights =
            DenseMatrix::from_2d_vec(&column).map_err(|e| ArtifactLoadError::Schema {
                reason: format!("coefficient matrix creation failed: {}", e),
            })?;

        Ok(Self {
            encoded_width: artifact.encoded_width(),
            model_type: artifact.model_type,
            scaler: artifact.scaler,
            encoder: artifact.encoder,
            weights,
            intercept: artifact.classifier.intercept,
        })
    }

    /// Scales the numerical columns and one-hot encodes the categorical ones,
    /// walking the row in `FEATURE_COLUMNS` order.
    pub fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, ModelError> {
        let mut encoded = Vec::with_capacity(self.encoded_width);
        let (mut numerical, mut categorical) = (0, 0);

        for (column, value) in row.columns() {
            match value {
                FeatureValue::Real(v) => {
                    encoded.push(self.scaler.scale_value(numerical, column, v)?);
                    numerical += 1;
                }
                FeatureValue::Integer(v) => {
                    encoded.push(self.scaler.scale_value(numerical, column, v as f64)?);
                    numerical += 1;
                }
                FeatureValue::Category(level) => {
                    self.encoder
                        .encode_into(categorical, column, level, &mut encoded)?;
                    categorical += 1;
                }
            }
        }

        Ok(encoded)
    }

    /// Signed distance to the decision boundary; positive means reorder.
    pub fn decision_function(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let encoded = self.transform(row)?;
        let input = DenseMatrix::from_2d_vec(&vec![encoded]).map_err(|e| ModelError::Inference {
            reason: format!("Matrix creation failed: {}", e),
        })?;

        let scores = input.matmul(&self.weights);
        Ok(*scores.get((0, 0)) + self.intercept)
    }
}

impl ReorderClassifier for LogisticPipeline {
    fn classify(&self, row: &FeatureRow) -> Result<bool, ModelError> {
        Ok(self.decision_function(row)? > 0.0)
    }

    fn class_probabilities(&self, row: &FeatureRow) -> Result<[f64; 2], ModelError> {
        let reorder = self.decision_function(row)?.sigmoid();
        Ok([1.0 - reorder, reorder])
    }

    fn model_type(&self) -> &str {
        &self.model_type
    }
}
