//! Metrics for the rating estimator
//!
//! Estimation and ingest counters are kept in a Prometheus registry and can
//! be written out in the text exposition format, e.g. for a node exporter
//! textfile collector picking up batch runs.

pub mod collector;

pub use collector::{EstimationMetrics, IngestMetrics, MetricsCollector, MetricsTimer};
