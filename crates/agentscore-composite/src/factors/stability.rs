use agentscore_core::constants::MAX_SCORE;

/// Ratio stability: linear up to `saturation_days` of majority support.
pub fn score(stable_days: f64, saturation_days: f64) -> f64 {
    if !stable_days.is_finite() || stable_days <= 0.0 || saturation_days <= 0.0 {
        return 0.0;
    }
    (stable_days / saturation_days * 100.0).min(MAX_SCORE)
}
