//! Rating service coordination
//!
//! Turns downloaded contest data into a rating report: builds the history,
//! runs the estimators that apply to the contest type, and records metrics
//! for every estimation.

use crate::config::AppConfig;
use crate::contest::{build_history, AtCoderContestResult, ContestInfo, DurationWeightResolver};
use crate::display::RatingColor;
use crate::error::{RatingError, Result};
use crate::metrics::MetricsCollector;
use crate::rating::{
    AlgorithmRatingEstimator, HeuristicRatingEstimator, HeuristicRatingEstimatorV2,
    RatingEstimator,
};
use crate::types::{ContestHistory, ContestType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// One estimator's result in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub estimator: String,
    pub rating: f64,
    pub color: RatingColor,
}

/// Ratings computed for one user history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingReport {
    pub contest_type: ContestType,
    /// Eligible contests that entered the estimation
    pub contests_considered: usize,
    /// Results dropped as unrated or without a positive performance
    pub contests_skipped: usize,
    /// Reference date of the time-decayed rating, heuristic histories only
    pub base_date: Option<NaiveDate>,
    /// The rating AtCoder currently publishes for this contest type
    pub rating: f64,
    pub color: RatingColor,
    /// Every estimator that was run, including the primary one
    pub estimates: Vec<RatingEntry>,
}

/// Application state for rating estimation
pub struct RatingService {
    config: AppConfig,
    metrics: Arc<MetricsCollector>,
}

impl RatingService {
    /// Create a service with its own metrics registry
    pub fn new(config: AppConfig) -> Result<Self> {
        let metrics = Arc::new(MetricsCollector::new()?);
        Self::with_metrics(config, metrics)
    }

    /// Create a service reporting into an existing collector
    pub fn with_metrics(config: AppConfig, metrics: Arc<MetricsCollector>) -> Result<Self> {
        crate::config::validate_config(&config)?;
        Ok(Self { config, metrics })
    }

    pub fn metrics(&self) -> Arc<MetricsCollector> {
        self.metrics.clone()
    }

    /// Build a weighted history from raw results and the contest list
    pub fn build_history(
        &self,
        results: &[AtCoderContestResult],
        contests: Vec<ContestInfo>,
    ) -> Result<ContestHistory> {
        let resolver = DurationWeightResolver::new(contests, self.config.rating.clone());
        let history = build_history(results, &resolver)?;

        let skipped = results.len() - history.len();
        self.metrics.record_ingest(history.len(), skipped);
        debug!(
            "Built history with {} contests ({} skipped, {} known contests)",
            history.len(),
            skipped,
            resolver.len()
        );

        Ok(history)
    }

    /// Run one estimator, timing it and recording the outcome
    pub fn run_estimator(
        &self,
        estimator: &dyn RatingEstimator,
        history: &ContestHistory,
    ) -> std::result::Result<f64, RatingError> {
        let timer = self.metrics.start_timer();

        match estimator.estimate(history) {
            Ok(rating) => {
                self.metrics.record_estimation(estimator.name(), timer.stop());
                Ok(rating)
            }
            Err(e) => {
                self.metrics
                    .record_estimation_error(estimator.name(), e.kind());
                error!("Estimator '{}' failed: {}", estimator.name(), e);
                Err(e)
            }
        }
    }

    /// Estimate ratings for a user's raw contest results
    ///
    /// Algorithm histories get the algorithm rating. Heuristic histories get
    /// both heuristic ratings; the weighted, time-decayed one is primary and
    /// is evaluated as of `base_date`.
    pub fn evaluate(
        &self,
        contest_type: ContestType,
        results: &[AtCoderContestResult],
        contests: Vec<ContestInfo>,
        base_date: NaiveDate,
    ) -> Result<RatingReport> {
        let history = self.build_history(results, contests)?;
        let skipped = results.len() - history.len();

        let (estimates, report_date) = match contest_type {
            ContestType::Algorithm => {
                let estimator = AlgorithmRatingEstimator::new();
                let rating = self.run_estimator(&estimator, &history)?;
                (vec![entry(estimator.name(), rating)], None)
            }
            ContestType::Heuristic => {
                let weighted = HeuristicRatingEstimatorV2::new(base_date);
                let rating_v2 = self.run_estimator(&weighted, &history)?;
                let unweighted = HeuristicRatingEstimator::new();
                let rating_v1 = self.run_estimator(&unweighted, &history)?;
                (
                    vec![
                        entry(weighted.name(), rating_v2),
                        entry(unweighted.name(), rating_v1),
                    ],
                    Some(weighted.base_date()),
                )
            }
        };

        let primary = &estimates[0];
        info!(
            "{} rating: {:.0} ({}) from {} contests",
            contest_type,
            primary.rating,
            primary.color,
            history.len()
        );

        Ok(RatingReport {
            contest_type,
            contests_considered: history.len(),
            contests_skipped: skipped,
            base_date: report_date,
            rating: primary.rating,
            color: primary.color,
            estimates,
        })
    }
}

fn entry(estimator: &str, rating: f64) -> RatingEntry {
    RatingEntry {
        estimator: estimator.to_string(),
        rating,
        color: RatingColor::for_rating(rating),
    }
}
