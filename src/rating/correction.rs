//! Low-rating correction
//!
//! Raw estimates below 400 (including negative ones) are compressed into
//! `(0, 400)` so the published rating never drops to zero. The transform is
//! continuous and strictly increasing, and the identity from 400 upward.

use crate::error::RatingError;
use crate::rating::constants::CORRECTION_THRESHOLD;

/// Map a raw rating onto the published scale
pub fn apply_correction(raw: f64) -> f64 {
    if raw >= CORRECTION_THRESHOLD {
        return raw;
    }
    CORRECTION_THRESHOLD / ((CORRECTION_THRESHOLD - raw) / CORRECTION_THRESHOLD).exp()
}

/// Recover the raw rating behind a corrected one
///
/// Only defined for positive ratings; zero, negative and NaN inputs yield
/// [`RatingError::DomainError`].
pub fn inverse_correction(corrected: f64) -> Result<f64, RatingError> {
    if corrected.is_nan() || corrected <= 0.0 {
        return Err(RatingError::DomainError { corrected });
    }
    if corrected >= CORRECTION_THRESHOLD {
        return Ok(corrected);
    }
    Ok(CORRECTION_THRESHOLD - CORRECTION_THRESHOLD * (CORRECTION_THRESHOLD / corrected).ln())
}
