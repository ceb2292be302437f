use agentscore_core::constants::{MAX_SCORE, NEUTRAL_SCORE};

/// Decayed support ratio, clamped to 0–100. NaN reads as neutral.
pub fn score(weighted_ratio: f64) -> f64 {
    if weighted_ratio.is_nan() {
        NEUTRAL_SCORE
    } else {
        weighted_ratio.clamp(0.0, MAX_SCORE)
    }
}
