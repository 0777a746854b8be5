//! Rating estimator trait
//!
//! Every estimator produces a raw rating from a contest history and then
//! passes it through the low-rating correction exactly once.

use crate::error::RatingError;
use crate::rating::correction::apply_correction;
use crate::types::ContestHistory;
use tracing::debug;

/// Trait for estimating a rating from a performance history
pub trait RatingEstimator: Send + Sync {
    /// Stable name used in logs, metrics and reports
    fn name(&self) -> &'static str;

    /// Rating before the low-rating correction
    ///
    /// # Arguments
    /// * `history` - Contest results, oldest first
    fn raw_rating(&self, history: &ContestHistory) -> Result<f64, RatingError>;

    /// Published (corrected) rating for the history
    fn estimate(&self, history: &ContestHistory) -> Result<f64, RatingError> {
        let raw = self.raw_rating(history)?;
        let corrected = apply_correction(raw);

        debug!(
            estimator = self.name(),
            contests = history.len(),
            raw,
            corrected,
            "Estimated rating"
        );

        Ok(corrected)
    }

    /// Rating as it stood after each contest of the history
    fn rating_progression(&self, history: &ContestHistory) -> Result<Vec<f64>, RatingError> {
        if history.is_empty() {
            return Err(RatingError::EmptyHistory);
        }

        (1..=history.len())
            .map(|n| self.estimate(&history.prefix(n)))
            .collect()
    }
}
