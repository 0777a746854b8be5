//! Metrics collection using Prometheus
//!
//! Counts estimations and their failures per estimator, times them, and
//! tracks how many history records were accepted or skipped during ingest.

use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for the rating estimator
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Estimation metrics
    estimation_metrics: EstimationMetrics,

    /// Ingest metrics
    ingest_metrics: IngestMetrics,
}

/// Estimator-level metrics
#[derive(Clone)]
pub struct EstimationMetrics {
    /// Successful estimations by estimator
    pub estimations_total: IntCounterVec,

    /// Failed estimations by estimator and error kind
    pub estimation_errors_total: IntCounterVec,

    /// Time spent per estimation
    pub estimation_duration_seconds: HistogramVec,
}

/// History ingest metrics
#[derive(Clone)]
pub struct IngestMetrics {
    /// Records that became estimator input
    pub records_ingested_total: IntCounter,

    /// Records dropped, by reason
    pub records_skipped_total: IntCounterVec,
}

impl MetricsCollector {
    /// Create a new metrics collector with default registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let estimation_metrics = EstimationMetrics::new(&registry)?;
        let ingest_metrics = IngestMetrics::new(&registry)?;

        Ok(Self {
            registry,
            estimation_metrics,
            ingest_metrics,
        })
    }

    /// Get estimation metrics
    pub fn estimation(&self) -> &EstimationMetrics {
        &self.estimation_metrics
    }

    /// Get ingest metrics
    pub fn ingest(&self) -> &IngestMetrics {
        &self.ingest_metrics
    }

    /// Record a successful estimation
    pub fn record_estimation(&self, estimator: &str, duration: Duration) {
        self.estimation_metrics
            .estimations_total
            .with_label_values(&[estimator])
            .inc();

        self.estimation_metrics
            .estimation_duration_seconds
            .with_label_values(&[estimator])
            .observe(duration.as_secs_f64());
    }

    /// Record a failed estimation
    pub fn record_estimation_error(&self, estimator: &str, kind: &str) {
        self.estimation_metrics
            .estimation_errors_total
            .with_label_values(&[estimator, kind])
            .inc();
    }

    /// Record the outcome of building a history
    pub fn record_ingest(&self, accepted: usize, ineligible: usize) {
        self.ingest_metrics
            .records_ingested_total
            .inc_by(accepted as u64);

        self.ingest_metrics
            .records_skipped_total
            .with_label_values(&["ineligible"])
            .inc_by(ineligible as u64);
    }

    /// Render every registered metric in the Prometheus text format
    pub fn gather_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Create a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get the elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return the duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl EstimationMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let estimations_total = IntCounterVec::new(
            Opts::new(
                "atcoder_rating_estimations_total",
                "Total successful rating estimations",
            ),
            &["estimator"],
        )?;
        registry.register(Box::new(estimations_total.clone()))?;

        let estimation_errors_total = IntCounterVec::new(
            Opts::new(
                "atcoder_rating_estimation_errors_total",
                "Total failed rating estimations",
            ),
            &["estimator", "kind"],
        )?;
        registry.register(Box::new(estimation_errors_total.clone()))?;

        let estimation_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "atcoder_rating_estimation_duration_seconds",
                "Time spent estimating a rating",
            )
            .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1, 1.0]),
            &["estimator"],
        )?;
        registry.register(Box::new(estimation_duration_seconds.clone()))?;

        Ok(Self {
            estimations_total,
            estimation_errors_total,
            estimation_duration_seconds,
        })
    }
}

impl IngestMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let records_ingested_total = IntCounter::new(
            "atcoder_rating_records_ingested_total",
            "Total history records accepted for estimation",
        )?;
        registry.register(Box::new(records_ingested_total.clone()))?;

        let records_skipped_total = IntCounterVec::new(
            Opts::new(
                "atcoder_rating_records_skipped_total",
                "Total history records skipped",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(records_skipped_total.clone()))?;

        Ok(Self {
            records_ingested_total,
            records_skipped_total,
        })
    }
}
