//! Common types used throughout the rating estimator

use crate::error::RatingError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Judge track a history belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContestType {
    Algorithm,
    Heuristic,
}

impl std::fmt::Display for ContestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContestType::Algorithm => write!(f, "algorithm"),
            ContestType::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// One contest result as seen by the estimators
///
/// `end_time` and `weight` are only consulted by the weighted heuristic
/// estimator; the other estimators ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub performance: i32,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub weight: Option<f64>,
}

impl PerformanceRecord {
    /// Record carrying only a performance
    pub fn new(performance: i32) -> Self {
        Self {
            performance,
            end_time: None,
            weight: None,
        }
    }

    pub fn with_end_time(mut self, end_time: DateTime<FixedOffset>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl From<i32> for PerformanceRecord {
    fn from(performance: i32) -> Self {
        Self::new(performance)
    }
}

/// A user's contest history in chronological order, oldest first.
///
/// The last record is the most recent contest. The algorithm estimator decays
/// weights backward from it, so handing it a reversed history silently
/// produces a different rating. Build with [`ContestHistory::new`] when the
/// records are already chronological, or [`ContestHistory::sorted_by_end_time`]
/// to order them by timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestHistory {
    records: Vec<PerformanceRecord>,
}

impl ContestHistory {
    /// Wrap records the caller guarantees are oldest first
    pub fn new(records: Vec<PerformanceRecord>) -> Self {
        Self { records }
    }

    /// Order records by end time (stable for equal timestamps)
    pub fn sorted_by_end_time(mut records: Vec<PerformanceRecord>) -> Result<Self, RatingError> {
        if let Some(index) = records.iter().position(|r| r.end_time.is_none()) {
            return Err(RatingError::MissingField {
                index,
                field: "end_time",
            });
        }

        records.sort_by_key(|r| r.end_time);
        Ok(Self { records })
    }

    /// History from bare performances, oldest first
    pub fn from_performances(performances: &[i32]) -> Self {
        performances.iter().copied().map(PerformanceRecord::new).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PerformanceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PerformanceRecord> {
        self.records.iter()
    }

    /// Performances in chronological order
    pub fn performances(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(|r| r.performance)
    }

    /// Performances starting from the latest contest
    pub fn most_recent_first(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().rev().map(|r| r.performance)
    }

    /// The first `n` contests, i.e. the history as it stood after contest `n`
    pub fn prefix(&self, n: usize) -> Self {
        Self {
            records: self.records[..n.min(self.records.len())].to_vec(),
        }
    }

    /// Append a newer contest
    pub fn push(&mut self, record: PerformanceRecord) {
        self.records.push(record);
    }
}

impl FromIterator<PerformanceRecord> for ContestHistory {
    fn from_iter<I: IntoIterator<Item = PerformanceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContestHistory {
    type Item = &'a PerformanceRecord;
    type IntoIter = std::slice::Iter<'a, PerformanceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
