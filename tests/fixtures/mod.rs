//! Shared histories and helpers for integration tests
//!
//! Performance sequences are taken from public AtCoder profiles, oldest first,
//! together with the ratings AtCoder published after each contest.

#![allow(dead_code)]

use atcoder_rating::types::{ContestHistory, PerformanceRecord};
use chrono::{DateTime, FixedOffset};

/// tourist, algorithm track
pub const TOURIST_ALGORITHM: [i32; 10] = [3920, 3200, 4310, 4391, 4356, 4017, 3687, 4152, 4395, 4415];
pub const TOURIST_ALGORITHM_RATINGS: [f64; 10] =
    [2720.0, 2851.0, 3368.0, 3647.0, 3802.0, 3834.0, 3806.0, 3860.0, 3949.0, 4021.0];

/// chokudai, algorithm track
pub const CHOKUDAI_ALGORITHM: [i32; 10] = [2455, 3192, 3623, 2974, 2813, 3002, 3311, 2998, 2898, 3457];
pub const CHOKUDAI_ALGORITHM_RATINGS: [f64; 10] =
    [1255.0, 2155.0, 2676.0, 2728.0, 2733.0, 2775.0, 2872.0, 2887.0, 2885.0, 2978.0];

/// tourist, heuristic track
pub const TOURIST_HEURISTIC: [i32; 5] = [3254, 2119, 2471, 1297, 1446];
pub const TOURIST_HEURISTIC_RATINGS: [f64; 5] = [2254.0, 2299.0, 2382.0, 2382.0, 2383.0];

/// chokudai, heuristic track
pub const CHOKUDAI_HEURISTIC: [i32; 5] = [1338, 2399, 2531, 2789, 2269];
pub const CHOKUDAI_HEURISTIC_RATINGS: [f64; 5] = [343.0, 1453.0, 1850.0, 2160.0, 2215.0];

/// tourist, heuristic track with end times
pub const TOURIST_HEURISTIC_DATED: [(i32, &str); 5] = [
    (3254, "2021-04-25T23:00:00+09:00"),
    (2119, "2021-06-26T19:00:00+09:00"),
    (2471, "2024-01-13T19:00:00+09:00"),
    (1297, "2024-04-07T23:00:00+09:00"),
    (1446, "2024-07-21T19:00:00+09:00"),
];
pub const TOURIST_HEURISTIC_V2_BASE: &str = "2025-07-06T23:00:00+09:00";
pub const TOURIST_HEURISTIC_V2_RATING: f64 = 2180.0;

pub fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

/// History of dated records, each with the given weight
pub fn dated_history(records: &[(i32, &str)], weight: f64) -> ContestHistory {
    records
        .iter()
        .map(|(performance, end_time)| {
            PerformanceRecord::new(*performance)
                .with_end_time(at(end_time))
                .with_weight(weight)
        })
        .collect()
}

/// One entry of a contest history export
pub fn history_entry(screen_name: &str, performance: i32, end_time: &str, is_rated: bool) -> String {
    format!(
        r#"{{"IsRated":{},"Place":1,"OldRating":0,"NewRating":0,"Performance":{},"InnerPerformance":{},"ContestScreenName":"{}","ContestName":"{}","ContestNameEn":"{}","EndTime":"{}"}}"#,
        is_rated, performance, performance, screen_name, screen_name, screen_name, end_time
    )
}

/// One entry of the contest list
pub fn contest_entry(id: &str, start_epoch_second: i64, duration_second: i64) -> String {
    format!(
        r#"{{"id":"{}","start_epoch_second":{},"duration_second":{},"title":"{}","rate_change":"All"}}"#,
        id, start_epoch_second, duration_second, id
    )
}

/// Write a JSON array of entries to a temporary file
pub fn json_file(entries: &[String]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[{}]", entries.join(",")).unwrap();
    file
}
