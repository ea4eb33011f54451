//! Model artifact configuration parsing from environment variables.
//!
//! Covers where the artifact lives and the training-time performance figures
//! reported by model introspection.

use crate::domain::model_info::PerformanceMetrics;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "stock_reorder_model.pkl";

/// Model environment configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
    pub performance: PerformanceMetrics,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            performance: PerformanceMetrics::default(),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = PerformanceMetrics::default();
        let score = |key: &str, default: f64| -> Result<f64> {
            match lookup(key) {
                Some(raw) => parse_score(key, &raw),
                None => Ok(default),
            }
        };

        let performance = PerformanceMetrics {
            accuracy: score("MODEL_ACCURACY", defaults.accuracy)?,
            precision: score("MODEL_PRECISION", defaults.precision)?,
            recall: score("MODEL_RECALL", defaults.recall)?,
            f1_score: score("MODEL_F1_SCORE", defaults.f1_score)?,
        };

        Ok(Self {
            model_path: lookup("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            performance,
        })
    }
}

fn parse_score(key: &str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid {}: {}", key, raw))?;
    if !(0.0..=1.0).contains(&value) {
        anyhow::bail!("Invalid {}: {} (must be between 0 and 1)", key, raw);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_model_config_defaults() {
        let config = ModelEnvConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.model_path, PathBuf::from("stock_reorder_model.pkl"));
        assert_eq!(config.performance, PerformanceMetrics::default());
        assert_eq!(config.performance.accuracy, 0.99);
    }

    #[test]
    fn test_model_path_and_scores_overridden() {
        let config = ModelEnvConfig::from_lookup(lookup_from(&[
            ("MODEL_PATH", "/models/reorder.json"),
            ("MODEL_RECALL", "0.91"),
        ]))
        .unwrap();
        assert_eq!(config.model_path, PathBuf::from("/models/reorder.json"));
        assert_eq!(config.performance.recall, 0.91);
        assert_eq!(config.performance.precision, 0.98);
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let err = ModelEnvConfig::from_lookup(lookup_from(&[("MODEL_ACCURACY", "1.5")])).unwrap_err();
        assert!(err.to_string().contains("MODEL_ACCURACY"));

        let err = ModelEnvConfig::from_lookup(lookup_from(&[("MODEL_F1_SCORE", "high")])).unwrap_err();
        assert!(err.to_string().contains("MODEL_F1_SCORE"));
    }
}
