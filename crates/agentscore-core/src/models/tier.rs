//! Reputation tiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Discrete reputation tier, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Tier {
    Unverified,
    Sandbox,
    Trusted,
    Verified,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unverified => "Unverified",
            Self::Sandbox => "Sandbox",
            Self::Trusted => "Trusted",
            Self::Verified => "Verified",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Unverified => "No meaningful on-chain trust signal yet",
            Self::Sandbox => "Early signal from at least one staker",
            Self::Trusted => "Sustained support from several stakers",
            Self::Verified => "Broad, long-standing, well-capitalized support",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thresholds an entity must meet, all at once, to hold a tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TierRequirement {
    pub tier: Tier,
    pub min_stakers: u32,
    /// Whole token units.
    pub min_total_stake: f64,
    /// 0–100.
    pub min_trust_ratio: f64,
    pub min_age_days: f64,
}

impl TierRequirement {
    pub fn is_met_by(&self, metrics: &TierMetrics) -> bool {
        metrics.stakers >= self.min_stakers
            && metrics.total_stake >= self.min_total_stake
            && metrics.trust_ratio >= self.min_trust_ratio
            && metrics.age_days >= self.min_age_days
    }

    pub fn is_open(&self) -> bool {
        self.min_stakers == 0
            && self.min_total_stake == 0.0
            && self.min_trust_ratio == 0.0
            && self.min_age_days == 0.0
    }
}

/// Current values of the four tier dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TierMetrics {
    pub stakers: u32,
    /// Whole token units.
    pub total_stake: f64,
    /// 0–100.
    pub trust_ratio: f64,
    pub age_days: f64,
}

/// Progress from the current tier toward the next one, per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TierProgress {
    pub current_tier: Tier,
    pub next_tier: Option<Tier>,
    pub stakers_percent: u8,
    pub stake_percent: u8,
    pub ratio_percent: u8,
    pub age_percent: u8,
    /// Unweighted mean of the four percentages.
    pub overall_percent: u8,
}
