//! AtCoder rating estimator
//!
//! This crate estimates AtCoder algorithm and heuristic ratings from a user's
//! contest performance history, reproducing the published rating formulas,
//! and provides the ingest, weighting and reporting around them.

pub mod config;
pub mod contest;
pub mod display;
pub mod error;
pub mod metrics;
pub mod rating;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use rating::{
    apply_correction, calculate_algorithm_rating, calculate_heuristic_rating,
    calculate_heuristic_rating_v2, inverse_correction, RatingEstimator,
};
pub use service::{RatingReport, RatingService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
