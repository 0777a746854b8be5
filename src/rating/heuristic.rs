//! Heuristic (long-contest) rating
//!
//! Each performance `p` is expanded into virtual samples `p - S * ln(j)` for
//! `j = 1..=100`. The samples of all contests are pooled and the best 100 are
//! averaged with geometric weights `R^(i+1)`. Pooling across contests lets one
//! strong result fill most of the top set; that is how the published rating
//! behaves, not a per-contest top-K.

use crate::error::RatingError;
use crate::rating::constants::{HEURISTIC_RATIO, HEURISTIC_SPREAD, VIRTUAL_SAMPLES};
use crate::rating::estimator::RatingEstimator;
use crate::types::ContestHistory;

/// The 100 virtual samples of one performance, best first
pub(crate) fn virtual_samples(performance: f64) -> impl Iterator<Item = f64> {
    (1..=VIRTUAL_SAMPLES).map(move |j| performance - HEURISTIC_SPREAD * (j as f64).ln())
}

/// Estimator for the heuristic track (unweighted, no time decay)
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRatingEstimator;

impl HeuristicRatingEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Pooled virtual samples of every contest, sorted descending
    pub fn pooled_samples(&self, history: &ContestHistory) -> Vec<f64> {
        let mut samples: Vec<f64> = history
            .performances()
            .flat_map(|p| virtual_samples(p as f64))
            .collect();
        samples.sort_by(|a, b| b.total_cmp(a));
        samples
    }
}

impl RatingEstimator for HeuristicRatingEstimator {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn raw_rating(&self, history: &ContestHistory) -> Result<f64, RatingError> {
        if history.is_empty() {
            return Err(RatingError::EmptyHistory);
        }

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        let mut power = HEURISTIC_RATIO;
        for sample in self.pooled_samples(history).into_iter().take(VIRTUAL_SAMPLES) {
            numerator += sample * power;
            denominator += power;
            power *= HEURISTIC_RATIO;
        }

        Ok(numerator / denominator)
    }
}

/// Heuristic rating of a history (order does not matter)
pub fn calculate_heuristic_rating(history: &ContestHistory) -> Result<f64, RatingError> {
    HeuristicRatingEstimator.estimate(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_virtual_samples() {
        let samples: Vec<f64> = virtual_samples(2000.0).collect();
        assert_eq!(samples.len(), 100);
        assert_eq!(samples[0], 2000.0);
        assert_abs_diff_eq!(samples[99], 2000.0 - HEURISTIC_SPREAD * 100.0_f64.ln());
        assert!(samples.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_single_contest_uses_all_of_its_samples() {
        let history = ContestHistory::from_performances(&[2500]);
        let estimator = HeuristicRatingEstimator::new();

        let pooled = estimator.pooled_samples(&history);
        let own: Vec<f64> = virtual_samples(2500.0).collect();
        assert_eq!(pooled, own);
    }

    #[test]
    fn test_order_independent() {
        let a = ContestHistory::from_performances(&[3254, 2119, 2471]);
        let b = ContestHistory::from_performances(&[2471, 3254, 2119]);
        assert_eq!(
            calculate_heuristic_rating(&a).unwrap(),
            calculate_heuristic_rating(&b).unwrap()
        );
    }

    #[test]
    fn test_weak_contest_cannot_lower_rating() {
        // A far weaker result contributes no samples to the top 100.
        let strong = ContestHistory::from_performances(&[3000]);
        let with_weak = ContestHistory::from_performances(&[3000, -2000]);
        assert_eq!(
            calculate_heuristic_rating(&strong).unwrap(),
            calculate_heuristic_rating(&with_weak).unwrap()
        );
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            calculate_heuristic_rating(&ContestHistory::default()),
            Err(RatingError::EmptyHistory)
        );
    }
}
