//! Contest data at the boundary of the estimation core
//!
//! Parsing of downloaded AtCoder history and contest-list JSON, eligibility
//! filtering, and contest weighting.

pub mod ingest;
pub mod weight;

pub use ingest::{
    build_history, load_contest_results, load_contests, AtCoderContestResult, ContestInfo,
};
pub use weight::{ContestWeightResolver, DurationWeightResolver, UniformWeightResolver};
