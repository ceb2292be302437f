//! Trust score output.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::wei::{self, Wei};

/// Five-level taxonomy over the 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TrustLevel {
    Critical,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl TrustLevel {
    pub const EXCELLENT_MIN: u8 = 90;
    pub const GOOD_MIN: u8 = 70;
    pub const MODERATE_MIN: u8 = 50;
    pub const LOW_MIN: u8 = 30;

    /// Map a score to its level. Thresholds are inclusive lower bounds.
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= Self::EXCELLENT_MIN => Self::Excellent,
            s if s >= Self::GOOD_MIN => Self::Good,
            s if s >= Self::MODERATE_MIN => Self::Moderate,
            s if s >= Self::LOW_MIN => Self::Low,
            _ => Self::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one trust score computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TrustScoreResult {
    /// Final score in `[0, 100]`.
    pub score: u8,
    pub level: TrustLevel,
    /// Raw support share × 100, 50 with no stake.
    pub base_score: f64,
    /// Base score pulled toward 50 by `1 − confidence`.
    pub anchored_score: f64,
    /// Liquidity confidence, approaching 1 as stake grows. Reaches exactly 1.0
    /// only once `e^(−stake/τ)` underflows in `f64`.
    pub confidence: f64,
    /// Bounded adjustment from recent flow.
    pub momentum: f64,
    #[ts(type = "string")]
    pub support_stake_wei: Wei,
    #[ts(type = "string")]
    pub oppose_stake_wei: Wei,
    /// `support − oppose`, may be negative.
    #[serde(with = "wei::signed_string")]
    #[ts(type = "string")]
    pub net_stake_wei: i128,
    #[ts(type = "string")]
    pub total_stake_wei: Wei,
}
