use agentscore_core::constants::MAX_SCORE;

/// Staker diversity: linear up to `saturation` unique stakers.
pub fn score(unique_stakers: u32, saturation: u32) -> f64 {
    if saturation == 0 {
        return MAX_SCORE;
    }
    (f64::from(unique_stakers) / f64::from(saturation) * 100.0).min(MAX_SCORE)
}
