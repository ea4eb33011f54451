//! Prometheus metrics definitions for the prediction service
//!
//! All metrics use the `reorder_` prefix and never influence responses.

use prometheus::{CounterVec, HistogramOpts, HistogramVec, IntGauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus metrics for the prediction service
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Records scored, by endpoint
    pub predictions_total: CounterVec,
    /// Reorder decisions, by outcome
    pub decisions_total: CounterVec,
    /// Rejected requests, by endpoint and error kind
    pub request_errors_total: CounterVec,
    /// Time spent normalizing and scoring, by endpoint
    pub prediction_latency_seconds: HistogramVec,
    /// 1 when a model artifact is loaded
    pub model_loaded: IntGauge,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let predictions_total = CounterVec::new(
            Opts::new("reorder_predictions_total", "Records scored by endpoint"),
            &["endpoint"],
        )?;
        registry.register(Box::new(predictions_total.clone()))?;

        let decisions_total = CounterVec::new(
            Opts::new(
                "reorder_decisions_total",
                "Reorder decisions by outcome (reorder, no_reorder)",
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(decisions_total.clone()))?;

        let request_errors_total = CounterVec::new(
            Opts::new(
                "reorder_request_errors_total",
                "Rejected prediction requests by endpoint and error kind",
            ),
            &["endpoint", "kind"],
        )?;
        registry.register(Box::new(request_errors_total.clone()))?;

        let prediction_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "reorder_prediction_latency_seconds",
                "Prediction latency in seconds",
            )
            .buckets(vec![
                0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0,
            ]),
            &["endpoint"],
        )?;
        registry.register(Box::new(prediction_latency_seconds.clone()))?;

        let model_loaded = IntGauge::with_opts(Opts::new(
            "reorder_model_loaded",
            "Model artifact status (0=degraded, 1=loaded)",
        ))?;
        registry.register(Box::new(model_loaded.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            predictions_total,
            decisions_total,
            request_errors_total,
            prediction_latency_seconds,
            model_loaded,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    /// Count scored records and their outcomes
    pub fn record_predictions(&self, endpoint: &str, reorders: usize, total: usize) {
        self.predictions_total
            .with_label_values(&[endpoint])
            .inc_by(total as f64);
        self.decisions_total
            .with_label_values(&["reorder"])
            .inc_by(reorders as f64);
        self.decisions_total
            .with_label_values(&["no_reorder"])
            .inc_by(total.saturating_sub(reorders) as f64);
    }

    pub fn inc_errors(&self, endpoint: &str, kind: &str) {
        self.request_errors_total
            .with_label_values(&[endpoint, kind])
            .inc();
    }

    pub fn observe_latency(&self, endpoint: &str, seconds: f64) {
        self.prediction_latency_seconds
            .with_label_values(&[endpoint])
            .observe(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.model_loaded.set(1);
        let output = metrics.render();
        assert!(output.contains("reorder_model_loaded 1"));
    }

    #[test]
    fn test_prediction_counters() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.record_predictions("batch_predict", 2, 3);
        let output = metrics.render();
        assert!(output.contains(r#"reorder_predictions_total{endpoint="batch_predict"} 3"#));
        assert!(output.contains(r#"reorder_decisions_total{outcome="reorder"} 2"#));
        assert!(output.contains(r#"reorder_decisions_total{outcome="no_reorder"} 1"#));
    }

    #[test]
    fn test_error_counter() {
        let metrics = Metrics::new().expect("Failed to create metrics");
        metrics.inc_errors("predict", "unavailable");
        let output = metrics.render();
        assert!(output.contains("reorder_request_errors_total"));
        assert!(output.contains("unavailable"));
    }
}
