//! Observability for the prediction service
//!
//! Counters and latency histograms are kept in a private Prometheus registry
//! and rendered on demand by the `/metrics` endpoint. Log output goes through
//! a `tracing` subscriber filtered by `RUST_LOG`.

pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::Metrics;
