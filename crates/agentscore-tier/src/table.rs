use agentscore_core::models::{Tier, TierRequirement};

/// Requirements ordered strictest first. The last row is the only open one.
const TIER_TABLE: [TierRequirement; 4] = [
    TierRequirement {
        tier: Tier::Verified,
        min_stakers: 10,
        min_total_stake: 1_000.0,
        min_trust_ratio: 80.0,
        min_age_days: 30.0,
    },
    TierRequirement {
        tier: Tier::Trusted,
        min_stakers: 5,
        min_total_stake: 100.0,
        min_trust_ratio: 65.0,
        min_age_days: 7.0,
    },
    TierRequirement {
        tier: Tier::Sandbox,
        min_stakers: 1,
        min_total_stake: 1.0,
        min_trust_ratio: 0.0,
        min_age_days: 0.0,
    },
    TierRequirement {
        tier: Tier::Unverified,
        min_stakers: 0,
        min_total_stake: 0.0,
        min_trust_ratio: 0.0,
        min_age_days: 0.0,
    },
];

/// All tier requirements, strictest first.
pub fn tier_table() -> &'static [TierRequirement] {
    &TIER_TABLE
}

/// Requirement row for `tier`.
pub fn requirement(tier: Tier) -> &'static TierRequirement {
    match tier {
        Tier::Verified => &TIER_TABLE[0],
        Tier::Trusted => &TIER_TABLE[1],
        Tier::Sandbox => &TIER_TABLE[2],
        Tier::Unverified => &TIER_TABLE[3],
    }
}
