use agentscore_core::config::{Network, ScoringConfig};
use agentscore_core::constants::MAX_SCORE;
use agentscore_core::{TrustFlowSnapshot, TrustLevel, Wei};
use agentscore_core::models::TrustScoreResult;

use crate::factors;

/// Resolved scoring constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    /// τ, in whole token units.
    pub liquidity_scale: f64,
    pub momentum_scale: f64,
    pub min_momentum_floor: f64,
    pub max_momentum_cap: f64,
}

impl ScoringParams {
    pub fn new(config: &ScoringConfig, network: Network) -> Self {
        Self {
            liquidity_scale: config.liquidity_scale_for(network),
            momentum_scale: config.momentum_scale,
            min_momentum_floor: config.min_momentum_floor,
            max_momentum_cap: config.max_momentum_cap,
        }
    }

    /// `max(floor, cap × confidence)`.
    pub fn momentum_bound(&self, confidence: f64) -> f64 {
        factors::momentum::bound(confidence, self.min_momentum_floor, self.max_momentum_cap)
    }
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self::new(&ScoringConfig::default(), Network::default())
    }
}

/// Full score computation.
///
/// ```text
/// base      = support / total × 100            (50 with no stake)
/// conf      = 1 − e^(−total_units / τ)
/// anchored  = 50 + (base − 50) × conf
/// momentum  = clamp(flow / total × k, ±max(floor, cap × conf))
/// score     = round(clamp(anchored + momentum, 0, 100))
/// ```
pub fn compute(
    support: Wei,
    oppose: Wei,
    flow: Option<&TrustFlowSnapshot>,
    params: &ScoringParams,
) -> TrustScoreResult {
    let total = support.saturating_add(oppose);
    let total_units = total.to_units();

    let base_score = factors::base::calculate(support, oppose);
    let confidence = factors::confidence::calculate(total_units, params.liquidity_scale);
    let anchored_score = factors::base::anchor(base_score, confidence);
    let momentum = factors::momentum::calculate(
        flow,
        total_units,
        confidence,
        params.momentum_scale,
        params.min_momentum_floor,
        params.max_momentum_cap,
    );

    let score = final_score(anchored_score + momentum);

    TrustScoreResult {
        score,
        level: TrustLevel::from_score(score),
        base_score,
        anchored_score,
        confidence,
        momentum,
        support_stake_wei: support,
        oppose_stake_wei: oppose,
        net_stake_wei: support.signed_diff(oppose),
        total_stake_wei: total,
    }
}

/// Clamp to `[0, 100]` and round half away from zero.
pub fn final_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return agentscore_core::constants::NEUTRAL_SCORE as u8;
    }
    raw.clamp(0.0, MAX_SCORE).round() as u8
}
