//! Date helpers shared by the estimators, ingest and the CLI

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate};

/// Get the current local timestamp
pub fn current_timestamp() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Calendar day of a timestamp, taken in the timestamp's own UTC offset
pub fn day_of(timestamp: &DateTime<FixedOffset>) -> NaiveDate {
    timestamp.date_naive()
}

/// Whole days from `earlier` to `later`; negative if `earlier` is after `later`
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

/// Parse a reference date given either as `YYYY-MM-DD` or as an RFC 3339 timestamp
pub fn parse_base_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| day_of(&timestamp))
        .map_err(|_| anyhow!("Invalid base date: {}", value))
}
