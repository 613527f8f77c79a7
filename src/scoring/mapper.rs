//! Probability of default → credit score and rating.
//!
//! `score = 300 + (1 - p) * 600`, reported as its floor. The rating is looked
//! up on the unrounded score; with integer tier boundaries both agree.

use crate::domain::{Rating, ScoreResult};
use crate::error::AppError;

pub const BASE_SCORE: f64 = 300.0;
pub const SCALE_LENGTH: f64 = 600.0;

/// Unrounded score for a default probability.
pub fn raw_score(probability_of_default: f64) -> f64 {
    let non_default = 1.0 - probability_of_default;
    BASE_SCORE + non_default * SCALE_LENGTH
}

/// Map a default probability onto the score axis and rating taxonomy.
///
/// A probability outside `[0, 1]` (or NaN) has no rating; that can only come
/// from a broken upstream computation and is reported as an internal error.
pub fn map_probability(probability_of_default: f64) -> Result<ScoreResult, AppError> {
    let score = raw_score(probability_of_default);
    let rating = Rating::from_score(score).ok_or_else(|| {
        AppError::internal(format!(
            "Credit score {score} (from default probability {probability_of_default}) is outside 300..=900."
        ))
    })?;

    // In [300, 900] after the rating lookup, so the cast is exact.
    let credit_score = score.floor() as u16;

    Ok(ScoreResult {
        probability: probability_of_default,
        credit_score,
        rating,
    })
}
