//! Contest weight resolution for the weighted heuristic rating

use crate::config::RatingConfig;
use crate::contest::ingest::ContestInfo;
use chrono::{DateTime, Datelike, FixedOffset};
use std::collections::HashMap;

/// Supplies the weight of a contest given its screen name and end time
pub trait ContestWeightResolver: Send + Sync {
    fn resolve_weight(&self, contest_screen_name: &str, end_time: &DateTime<FixedOffset>) -> f64;
}

/// Weighs every contest equally
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformWeightResolver;

impl ContestWeightResolver for UniformWeightResolver {
    fn resolve_weight(&self, _contest_screen_name: &str, _end_time: &DateTime<FixedOffset>) -> f64 {
        1.0
    }
}

/// Weighs contests by duration once the weighting policy is in effect
///
/// A contest that ends after the policy year but is missing from the contest
/// list keeps weight 1.
#[derive(Debug, Clone)]
pub struct DurationWeightResolver {
    contests: HashMap<String, ContestInfo>,
    config: RatingConfig,
}

impl DurationWeightResolver {
    pub fn new(contests: impl IntoIterator<Item = ContestInfo>, config: RatingConfig) -> Self {
        let contests = contests
            .into_iter()
            .map(|c| (c.contest_screen_name.clone(), c))
            .collect();

        Self { contests, config }
    }

    /// Number of known contests
    pub fn len(&self) -> usize {
        self.contests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }
}

impl ContestWeightResolver for DurationWeightResolver {
    fn resolve_weight(&self, contest_screen_name: &str, end_time: &DateTime<FixedOffset>) -> f64 {
        if end_time.year() <= self.config.policy_change_year {
            return 1.0;
        }

        match self.contests.get(contest_screen_name) {
            Some(contest) if contest.duration_second >= self.config.long_contest_threshold_seconds => 1.0,
            Some(_) => self.config.short_contest_weight,
            None => 1.0,
        }
    }
}
