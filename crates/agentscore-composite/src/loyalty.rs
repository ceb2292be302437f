//! Loyalty multiplier for long-term stakers.

use chrono::{DateTime, Utc};

use agentscore_core::models::{LoyaltyBonus, LoyaltyTier};
use agentscore_core::{StakeRecord, StakeSide};
use agentscore_decay::age_days;

/// Loyalty thresholds, longest first: (min days held, tier, multiplier).
const LOYALTY_TABLE: [(f64, LoyaltyTier, f64); 3] = [
    (180.0, LoyaltyTier::Platinum, 1.5),
    (90.0, LoyaltyTier::Gold, 1.3),
    (30.0, LoyaltyTier::Silver, 1.15),
];

/// Loyalty bonus for a holder whose first stake was at `first_stake`.
pub fn loyalty_bonus(first_stake: DateTime<Utc>, now: DateTime<Utc>) -> LoyaltyBonus {
    let days_held = age_days(first_stake, now).max(0.0);
    let (tier, multiplier) = LOYALTY_TABLE
        .iter()
        .find(|(min_days, _, _)| days_held >= *min_days)
        .map_or((LoyaltyTier::Bronze, 1.0), |(_, tier, multiplier)| (*tier, *multiplier));

    LoyaltyBonus {
        tier,
        multiplier,
        days_held,
    }
}

/// Loyalty bonus from the earliest support stake in `signals`.
///
/// No support history reads as a brand-new holder.
pub fn loyalty_from_history(signals: &[StakeRecord], now: DateTime<Utc>) -> LoyaltyBonus {
    let first = signals
        .iter()
        .filter(|s| s.side == StakeSide::Support)
        .map(|s| s.timestamp)
        .min()
        .unwrap_or(now);
    loyalty_bonus(first, now)
}
