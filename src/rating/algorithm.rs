//! Algorithm (short-contest) rating
//!
//! Performances are mapped into the exponential space `g(p) = 2^(p / 800)`,
//! averaged with weight `0.9^i` where `i` counts contests back from the most
//! recent one, and mapped back with `800 * log2`. A finite-sample term then
//! removes the upward bias such a weighted average has over few contests.

use crate::error::RatingError;
use crate::rating::constants::{ALGORITHM_DECAY, ALGORITHM_SCALE, FINITE_SAMPLE_PENALTY};
use crate::rating::estimator::RatingEstimator;
use crate::types::ContestHistory;

/// Estimator for the algorithm track
#[derive(Debug, Clone, Copy, Default)]
pub struct AlgorithmRatingEstimator;

impl AlgorithmRatingEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Decay-weighted mean in rating space, before the finite-sample term
    pub fn weighted_average(&self, history: &ContestHistory) -> Result<f64, RatingError> {
        if history.is_empty() {
            return Err(RatingError::EmptyHistory);
        }

        let mut weighted_sum = 0.0;
        let mut weight_sum = 0.0;
        let mut weight = 1.0;
        for performance in history.most_recent_first() {
            weighted_sum += to_rating_space(performance as f64) * weight;
            weight_sum += weight;
            weight *= ALGORITHM_DECAY;
        }

        Ok(from_rating_space(weighted_sum / weight_sum))
    }
}

impl RatingEstimator for AlgorithmRatingEstimator {
    fn name(&self) -> &'static str {
        "algorithm"
    }

    fn raw_rating(&self, history: &ContestHistory) -> Result<f64, RatingError> {
        let average = self.weighted_average(history)?;
        Ok(average - finite_sample_correction(history.len()))
    }
}

fn to_rating_space(performance: f64) -> f64 {
    2.0_f64.powf(performance / ALGORITHM_SCALE)
}

fn from_rating_space(value: f64) -> f64 {
    ALGORITHM_SCALE * value.log2()
}

/// `F(n) = sqrt(Σ 0.81^i) / Σ 0.9^i` for `i = 1..=n`, summed term by term
fn spread_ratio(n: usize) -> f64 {
    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 1..=n {
        numerator += (ALGORITHM_DECAY * ALGORITHM_DECAY).powi(i as i32);
        denominator += ALGORITHM_DECAY.powi(i as i32);
    }
    numerator.sqrt() / denominator
}

/// Same ratio from the closed forms of both geometric series
fn spread_ratio_closed_form(n: usize) -> f64 {
    let squared = ALGORITHM_DECAY * ALGORITHM_DECAY;
    let n = n as i32;
    let numerator = squared * (1.0 - squared.powi(n)) / (1.0 - squared);
    let denominator = ALGORITHM_DECAY * (1.0 - ALGORITHM_DECAY.powi(n)) / (1.0 - ALGORITHM_DECAY);
    numerator.sqrt() / denominator
}

/// Limit of the spread ratio as the number of contests grows
fn spread_ratio_limit() -> f64 {
    let squared = ALGORITHM_DECAY * ALGORITHM_DECAY;
    (squared / (1.0 - squared)).sqrt() / (ALGORITHM_DECAY / (1.0 - ALGORITHM_DECAY))
}

/// Rating points subtracted after `n` contests (1200 at one contest, tending to 0)
pub fn finite_sample_correction(n: usize) -> f64 {
    let limit = spread_ratio_limit();
    (spread_ratio(n) - limit) / (spread_ratio(1) - limit) * FINITE_SAMPLE_PENALTY
}

/// [`finite_sample_correction`] evaluated through the closed-form series sums
pub fn finite_sample_correction_closed_form(n: usize) -> f64 {
    let limit = spread_ratio_limit();
    (spread_ratio_closed_form(n) - limit) / (spread_ratio_closed_form(1) - limit)
        * FINITE_SAMPLE_PENALTY
}

/// Algorithm rating of a chronological history
pub fn calculate_algorithm_rating(history: &ContestHistory) -> Result<f64, RatingError> {
    AlgorithmRatingEstimator.estimate(history)
}
