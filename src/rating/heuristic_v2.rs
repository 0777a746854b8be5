//! Weighted heuristic rating with time decay
//!
//! Generalizes the heuristic rating in two ways:
//!
//! - each performance is adjusted for age before expansion:
//!   `p + 150 - 100 * days / 365`, with `days` counted between calendar days
//!   so the hour a contest ended does not matter;
//! - every virtual sample carries its contest's external weight. Samples are
//!   sorted descending over the whole pool and sample `i` contributes
//!   `q_i * (R^(s_{i-1}) - R^(s_i))`, where `s_i` is the running weight sum.
//!
//! With unit weights the interval masses reduce to the discrete weights
//! `R^i - R^(i+1)` of the unweighted rating, but nothing is truncated here:
//! all samples of all contests take part.
//!
//! The `+150` is applied even to a contest that ended on the base date.

use crate::error::RatingError;
use crate::rating::constants::{
    DAYS_PER_YEAR, HEURISTIC_RATIO, TIME_DECAY_OFFSET, TIME_DECAY_PER_YEAR,
};
use crate::rating::estimator::RatingEstimator;
use crate::rating::heuristic::virtual_samples;
use crate::types::{ContestHistory, PerformanceRecord};
use crate::utils::{day_of, days_between};
use chrono::NaiveDate;

/// A virtual sample and the weight inherited from its contest
#[derive(Debug, Clone, Copy, PartialEq)]
struct WeightedSample {
    value: f64,
    weight: f64,
}

/// Estimator for the heuristic track with contest weights and time decay
#[derive(Debug, Clone, Copy)]
pub struct HeuristicRatingEstimatorV2 {
    base_date: NaiveDate,
}

impl HeuristicRatingEstimatorV2 {
    /// Estimator evaluating histories as of `base_date`
    pub fn new(base_date: NaiveDate) -> Self {
        Self { base_date }
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    /// Performance after the age adjustment, with the record's weight
    fn adjusted(&self, index: usize, record: &PerformanceRecord) -> Result<(f64, f64), RatingError> {
        let end_time = record.end_time.as_ref().ok_or(RatingError::MissingField {
            index,
            field: "end_time",
        })?;
        let weight = record.weight.ok_or(RatingError::MissingField {
            index,
            field: "weight",
        })?;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(RatingError::InvalidWeight { index, weight });
        }

        let days = days_between(day_of(end_time), self.base_date) as f64;
        let adjusted = record.performance as f64 + TIME_DECAY_OFFSET
            - TIME_DECAY_PER_YEAR * (days / DAYS_PER_YEAR);

        Ok((adjusted, weight))
    }

    fn weighted_samples(&self, history: &ContestHistory) -> Result<Vec<WeightedSample>, RatingError> {
        let mut samples = Vec::new();
        for (index, record) in history.iter().enumerate() {
            let (adjusted, weight) = self.adjusted(index, record)?;
            samples.extend(virtual_samples(adjusted).map(|value| WeightedSample { value, weight }));
        }

        samples.sort_by(|a, b| b.value.total_cmp(&a.value));
        Ok(samples)
    }
}

impl RatingEstimator for HeuristicRatingEstimatorV2 {
    fn name(&self) -> &'static str {
        "heuristic_v2"
    }

    fn raw_rating(&self, history: &ContestHistory) -> Result<f64, RatingError> {
        if history.is_empty() {
            return Err(RatingError::EmptyHistory);
        }

        let mut rating = 0.0;
        let mut cumulative_weight = 0.0;
        let mut previous_mass = 1.0;
        for sample in self.weighted_samples(history)? {
            cumulative_weight += sample.weight;
            let mass = HEURISTIC_RATIO.powf(cumulative_weight);
            rating += sample.value * (previous_mass - mass);
            previous_mass = mass;
        }

        Ok(rating)
    }
}

/// Weighted heuristic rating of a history as of `base_date`
pub fn calculate_heuristic_rating_v2(
    history: &ContestHistory,
    base_date: NaiveDate,
) -> Result<f64, RatingError> {
    HeuristicRatingEstimatorV2::new(base_date).estimate(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::constants::{HEURISTIC_SPREAD, VIRTUAL_SAMPLES};
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, FixedOffset};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_adjustment_offset_and_decay() {
        let estimator = HeuristicRatingEstimatorV2::new(date(2025, 1, 1));

        let today = PerformanceRecord::new(2000)
            .with_end_time(at("2025-01-01T21:40:00+09:00"))
            .with_weight(1.0);
        assert_eq!(estimator.adjusted(0, &today).unwrap(), (2150.0, 1.0));

        let year_ago = PerformanceRecord::new(2000)
            .with_end_time(at("2024-01-02T21:40:00+09:00"))
            .with_weight(0.5);
        let (adjusted, weight) = estimator.adjusted(0, &year_ago).unwrap();
        assert_abs_diff_eq!(adjusted, 2050.0, epsilon = 1e-9);
        assert_eq!(weight, 0.5);
    }

    #[test]
    fn test_intraday_time_ignored() {
        let estimator = HeuristicRatingEstimatorV2::new(date(2025, 1, 10));
        let morning = PerformanceRecord::new(1500)
            .with_end_time(at("2025-01-01T00:10:00+09:00"))
            .with_weight(1.0);
        let night = PerformanceRecord::new(1500)
            .with_end_time(at("2025-01-01T23:50:00+09:00"))
            .with_weight(1.0);

        assert_eq!(
            estimator.adjusted(0, &morning).unwrap(),
            estimator.adjusted(0, &night).unwrap()
        );
    }

    #[test]
    fn test_single_unit_weight_contest_matches_closed_form() {
        let base = date(2025, 7, 6);
        let history: ContestHistory = vec![PerformanceRecord::new(1800)
            .with_end_time(at("2025-07-06T12:00:00+09:00"))
            .with_weight(1.0)]
        .into_iter()
        .collect();

        let raw = HeuristicRatingEstimatorV2::new(base)
            .raw_rating(&history)
            .unwrap();

        let expected: f64 = (0..VIRTUAL_SAMPLES)
            .map(|i| {
                let q = 1950.0 - HEURISTIC_SPREAD * ((i + 1) as f64).ln();
                q * (HEURISTIC_RATIO.powi(i as i32) - HEURISTIC_RATIO.powi(i as i32 + 1))
            })
            .sum();
        assert_abs_diff_eq!(raw, expected, epsilon = 1e-6);
    }

    #[test]
    fn test_half_weight_contest_uses_cumulative_weight_intervals() {
        let base = date(2025, 7, 6);
        let history: ContestHistory = vec![PerformanceRecord::new(1800)
            .with_end_time(at("2025-07-06T12:00:00+09:00"))
            .with_weight(0.5)]
        .into_iter()
        .collect();

        let raw = HeuristicRatingEstimatorV2::new(base)
            .raw_rating(&history)
            .unwrap();

        // Sample i spans cumulative weight [0.5 * i, 0.5 * (i + 1)].
        let expected: f64 = (0..VIRTUAL_SAMPLES)
            .map(|i| {
                let q = 1950.0 - HEURISTIC_SPREAD * ((i + 1) as f64).ln();
                let upper = HEURISTIC_RATIO.powf(0.5 * i as f64);
                let lower = HEURISTIC_RATIO.powf(0.5 * (i + 1) as f64);
                q * (upper - lower)
            })
            .sum();
        assert_abs_diff_eq!(raw, expected, epsilon = 1e-6);

        // Half the weight leaves more mass unassigned, so the raw value is lower.
        let unit: ContestHistory = history.iter().map(|r| r.clone().with_weight(1.0)).collect();
        let full = HeuristicRatingEstimatorV2::new(base).raw_rating(&unit).unwrap();
        assert!(raw < full);
    }

    #[test]
    fn test_lower_weight_reduces_influence() {
        let base = date(2025, 7, 6);
        let end = at("2025-07-01T21:00:00+09:00");
        let history = |weight: f64| -> ContestHistory {
            vec![
                PerformanceRecord::new(1500).with_end_time(end).with_weight(1.0),
                PerformanceRecord::new(2800).with_end_time(end).with_weight(weight),
            ]
            .into_iter()
            .collect()
        };

        let full = calculate_heuristic_rating_v2(&history(1.0), base).unwrap();
        let half = calculate_heuristic_rating_v2(&history(0.5), base).unwrap();
        assert!(half < full);
    }

    #[test]
    fn test_missing_fields() {
        let base = date(2025, 7, 6);

        let no_time: ContestHistory = vec![PerformanceRecord::new(1500).with_weight(1.0)]
            .into_iter()
            .collect();
        assert_eq!(
            calculate_heuristic_rating_v2(&no_time, base),
            Err(RatingError::MissingField {
                index: 0,
                field: "end_time"
            })
        );

        let no_weight: ContestHistory = vec![
            PerformanceRecord::new(1500)
                .with_end_time(at("2025-07-01T21:00:00+09:00"))
                .with_weight(1.0),
            PerformanceRecord::new(1600).with_end_time(at("2025-07-02T21:00:00+09:00")),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            calculate_heuristic_rating_v2(&no_weight, base),
            Err(RatingError::MissingField {
                index: 1,
                field: "weight"
            })
        );
    }

    #[test]
    fn test_invalid_weight() {
        let history: ContestHistory = vec![PerformanceRecord::new(1500)
            .with_end_time(at("2025-07-01T21:00:00+09:00"))
            .with_weight(-1.0)]
        .into_iter()
        .collect();

        assert_eq!(
            calculate_heuristic_rating_v2(&history, date(2025, 7, 6)),
            Err(RatingError::InvalidWeight {
                index: 0,
                weight: -1.0
            })
        );
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            calculate_heuristic_rating_v2(&ContestHistory::default(), date(2025, 7, 6)),
            Err(RatingError::EmptyHistory)
        );
    }
}
