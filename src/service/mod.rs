//! Service layer for the rating estimator
//!
//! Coordinates ingest, estimation and metrics for one user history at a time.

pub mod app;

pub use app::{RatingEntry, RatingReport, RatingService};
