//! AtCoder data models and history assembly
//!
//! Reads the JSON a user's contest history page exports and the public
//! contest list, both already downloaded to disk, and turns them into a
//! [`ContestHistory`] the estimators can consume.

use crate::contest::weight::ContestWeightResolver;
use crate::error::{RatingError, Result};
use crate::types::{ContestHistory, PerformanceRecord};
use anyhow::{anyhow, Context};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One entry of a user's contest history export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AtCoderContestResult {
    pub is_rated: bool,
    pub place: u32,
    pub old_rating: i32,
    pub new_rating: i32,
    pub performance: i32,
    pub inner_performance: i32,
    pub contest_screen_name: String,
    pub contest_name: String,
    pub contest_name_en: String,
    pub end_time: String,
}

impl AtCoderContestResult {
    /// Only rated participations with a positive performance count toward a rating
    pub fn is_eligible(&self) -> bool {
        self.is_rated && self.performance > 0
    }
}

/// Contest list entry as published (`rate_change` and other fields are ignored)
#[derive(Debug, Clone, Deserialize)]
struct RawContest {
    id: String,
    start_epoch_second: i64,
    duration_second: i64,
    title: String,
}

/// Contest metadata needed for weighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestInfo {
    pub contest_screen_name: String,
    pub start_time: DateTime<Utc>,
    pub duration_second: i64,
    pub contest_name: String,
}

impl RawContest {
    fn into_contest_info(self) -> Result<ContestInfo> {
        let start_time = DateTime::from_timestamp(self.start_epoch_second, 0).ok_or_else(|| {
            anyhow!(
                "Contest {} has out-of-range start time {}",
                self.id,
                self.start_epoch_second
            )
        })?;

        Ok(ContestInfo {
            contest_screen_name: format!("{}.contest.atcoder.jp", self.id),
            start_time,
            duration_second: self.duration_second,
            contest_name: self.title,
        })
    }
}

/// Parse a contest history export
pub fn parse_contest_results(json: &str) -> Result<Vec<AtCoderContestResult>> {
    serde_json::from_str(json).context("Failed to parse contest history JSON")
}

/// Parse the contest list
pub fn parse_contests(json: &str) -> Result<Vec<ContestInfo>> {
    let raw: Vec<RawContest> =
        serde_json::from_str(json).context("Failed to parse contest list JSON")?;
    raw.into_iter().map(RawContest::into_contest_info).collect()
}

/// Load a contest history export from disk
pub fn load_contest_results(path: &Path) -> Result<Vec<AtCoderContestResult>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read contest history: {}", path.display()))?;
    let results = parse_contest_results(&json)?;

    info!("Loaded {} contest results from {}", results.len(), path.display());
    Ok(results)
}

/// Load the contest list from disk
pub fn load_contests(path: &Path) -> Result<Vec<ContestInfo>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read contest list: {}", path.display()))?;
    let contests = parse_contests(&json)?;

    info!("Loaded {} contests from {}", contests.len(), path.display());
    Ok(contests)
}

/// Build an estimator input from raw results, ordered oldest first
///
/// Ineligible results are dropped. A result whose end time cannot be parsed
/// fails the whole history. Results are sorted by end time; ties keep the
/// export's order.
pub fn build_history(
    results: &[AtCoderContestResult],
    resolver: &dyn ContestWeightResolver,
) -> std::result::Result<ContestHistory, RatingError> {
    let mut records = Vec::with_capacity(results.len());

    for (index, result) in results.iter().enumerate() {
        if !result.is_eligible() {
            debug!(
                contest = %result.contest_screen_name,
                rated = result.is_rated,
                performance = result.performance,
                "Skipping ineligible result"
            );
            continue;
        }

        let end_time = parse_end_time(index, &result.end_time)?;
        let weight = resolver.resolve_weight(&result.contest_screen_name, &end_time);

        records.push(
            PerformanceRecord::new(result.performance)
                .with_end_time(end_time)
                .with_weight(weight),
        );
    }

    ContestHistory::sorted_by_end_time(records)
}

fn parse_end_time(index: usize, value: &str) -> std::result::Result<DateTime<FixedOffset>, RatingError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| RatingError::InvalidTimestamp {
        index,
        value: value.to_string(),
    })
}
