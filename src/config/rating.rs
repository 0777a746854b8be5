//! Contest weighting configuration

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// How much evidence a heuristic contest contributes to the weighted rating
///
/// Contests ending in or before `policy_change_year` always weigh 1. Later
/// contests weigh 1 when they last at least `long_contest_threshold_seconds`
/// and `short_contest_weight` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub policy_change_year: i32,
    pub long_contest_threshold_seconds: i64,
    pub short_contest_weight: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            policy_change_year: 2024,
            long_contest_threshold_seconds: 24 * 60 * 60,
            short_contest_weight: 0.5,
        }
    }
}

impl RatingConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.long_contest_threshold_seconds <= 0 {
            return Err(RatingError::ConfigurationError {
                message: "Long contest threshold must be positive".to_string(),
            });
        }

        if !(self.short_contest_weight > 0.0 && self.short_contest_weight <= 1.0) {
            return Err(RatingError::ConfigurationError {
                message: format!(
                    "Short contest weight must be in (0, 1], got {}",
                    self.short_contest_weight
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_config_default() {
        let config = RatingConfig::default();
        assert_eq!(config.policy_change_year, 2024);
        assert_eq!(config.long_contest_threshold_seconds, 86_400);
        assert_eq!(config.short_contest_weight, 0.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rating_config_validation() {
        let mut config = RatingConfig::default();

        config.long_contest_threshold_seconds = 0;
        assert!(config.validate().is_err());

        config = RatingConfig::default();
        config.short_contest_weight = 0.0;
        assert!(config.validate().is_err());

        config.short_contest_weight = 1.5;
        assert!(config.validate().is_err());

        config.short_contest_weight = f64::NAN;
        assert!(config.validate().is_err());
    }
}
