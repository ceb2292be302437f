use tracing::debug;

use agentscore_core::models::{Tier, TierMetrics};

use crate::table::tier_table;

/// Highest tier whose four thresholds are all met.
///
/// # Examples
///
/// ```
/// use agentscore_core::models::Tier;
/// use agentscore_tier::calculate_tier;
///
/// assert_eq!(calculate_tier(6, 150.0, 70.0, 10.0), Tier::Trusted);
/// // Enough stake and stakers, but too young for Verified.
/// assert_eq!(calculate_tier(12, 5_000.0, 90.0, 20.0), Tier::Trusted);
/// ```
pub fn calculate_tier(stakers: u32, total_stake: f64, trust_ratio: f64, age_days: f64) -> Tier {
    classify(&TierMetrics {
        stakers,
        total_stake,
        trust_ratio,
        age_days,
    })
}

/// [`calculate_tier`] over a [`TierMetrics`] value.
pub fn classify(metrics: &TierMetrics) -> Tier {
    let tier = tier_table()
        .iter()
        .find(|row| row.is_met_by(metrics))
        .map(|row| row.tier)
        .unwrap_or(Tier::Unverified);
    debug!(tier = %tier, stakers = metrics.stakers, "tier classified");
    tier
}

/// The tier above `tier`, or `None` at the top.
pub fn next_tier(tier: Tier) -> Option<Tier> {
    match tier {
        Tier::Unverified => Some(Tier::Sandbox),
        Tier::Sandbox => Some(Tier::Trusted),
        Tier::Trusted => Some(Tier::Verified),
        Tier::Verified => None,
    }
}
