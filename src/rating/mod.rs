//! Rating estimation
//!
//! This module provides the low-rating correction and the three estimators
//! AtCoder publishes: the algorithm rating, the heuristic rating, and the
//! weighted heuristic rating with time decay.

pub mod algorithm;
pub mod constants;
pub mod correction;
pub mod estimator;
pub mod heuristic;
pub mod heuristic_v2;

// Re-export commonly used types
pub use algorithm::{calculate_algorithm_rating, AlgorithmRatingEstimator};
pub use correction::{apply_correction, inverse_correction};
pub use estimator::RatingEstimator;
pub use heuristic::{calculate_heuristic_rating, HeuristicRatingEstimator};
pub use heuristic_v2::{calculate_heuristic_rating_v2, HeuristicRatingEstimatorV2};
