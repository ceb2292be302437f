//! Composite score, exit throttling, and loyalty.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Inputs to the composite formula. Each feeds one 0–100 sub-score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeInput {
    /// Time-decayed support ratio, 0–100.
    pub weighted_ratio: f64,
    pub unique_stakers: u32,
    /// Days the cumulative ratio stayed at or above 50%.
    pub stable_days: f64,
    pub current_price: f64,
    pub peak_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompositeBreakdown {
    pub signal_score: f64,
    pub staker_score: f64,
    pub stability_score: f64,
    pub price_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompositeResult {
    /// Weighted sum of the breakdown, 0–100.
    pub score: f64,
    pub breakdown: CompositeBreakdown,
    pub is_stable: bool,
    /// `current_price / peak_price`, 0–1.
    pub price_retention_ratio: f64,
}

/// How much of a position may be sold today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExitLimit {
    pub is_limited: bool,
    pub max_sell_shares: f64,
    /// Share of the position, 0–100.
    pub max_sell_percent: f64,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl LoyaltyTier {
    pub fn label(self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LoyaltyBonus {
    pub tier: LoyaltyTier,
    /// Offsets the trust-impact penalty applied when a long-term holder sells.
    pub multiplier: f64,
    pub days_held: f64,
}
