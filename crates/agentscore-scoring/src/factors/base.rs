use agentscore_core::constants::NEUTRAL_SCORE;
use agentscore_core::Wei;

/// Support share of the total stake × 100.
///
/// Zero total stake is the neutral prior, 50.
pub fn calculate(support: Wei, oppose: Wei) -> f64 {
    let total = support.saturating_add(oppose);
    if total.is_zero() {
        return NEUTRAL_SCORE;
    }
    support.value() as f64 / total.value() as f64 * 100.0
}

/// Pull `base_score` toward 50 in proportion to missing confidence.
///
/// `anchored = 50 + (base − 50) × confidence`
pub fn anchor(base_score: f64, confidence: f64) -> f64 {
    NEUTRAL_SCORE + (base_score - NEUTRAL_SCORE) * confidence
}
