//! Recent buy/sell flow, used for score momentum.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::stake::StakeSide;
use crate::wei::Wei;

/// Deposit and redeem totals per side over a recent window.
///
/// Missing fields deserialize as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default, rename_all = "camelCase")]
#[ts(export)]
pub struct TrustFlowSnapshot {
    #[ts(type = "string")]
    pub buy_support_wei: Wei,
    #[ts(type = "string")]
    pub sell_support_wei: Wei,
    #[ts(type = "string")]
    pub buy_oppose_wei: Wei,
    #[ts(type = "string")]
    pub sell_oppose_wei: Wei,
}

impl TrustFlowSnapshot {
    pub fn is_empty(&self) -> bool {
        self.buy_support_wei.is_zero()
            && self.sell_support_wei.is_zero()
            && self.buy_oppose_wei.is_zero()
            && self.sell_oppose_wei.is_zero()
    }

    /// `buy_support − sell_support − buy_oppose + sell_oppose`, in whole units.
    ///
    /// Positive means money is moving toward trust.
    pub fn signed_flow_units(&self) -> f64 {
        self.buy_support_wei.to_units() - self.sell_support_wei.to_units()
            - self.buy_oppose_wei.to_units()
            + self.sell_oppose_wei.to_units()
    }
}

/// Kind of vault ledger event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowEventKind {
    Deposit,
    Redeem,
}

/// A deposit into or redemption from one side's vault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEvent {
    pub kind: FlowEventKind,
    pub side: StakeSide,
    pub amount_wei: Wei,
    pub timestamp: DateTime<Utc>,
}

/// Longest custom window accepted (~100 years).
const MAX_CUSTOM_WINDOW_SECS: i64 = 100 * 365 * 86_400;

/// Look-back window for flow snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowWindow {
    #[default]
    Day,
    Week,
    /// Arbitrary window in seconds.
    Custom(i64),
}

impl FlowWindow {
    pub fn duration(self) -> Duration {
        match self {
            Self::Day => Duration::hours(24),
            Self::Week => Duration::days(7),
            Self::Custom(secs) => Duration::seconds(secs.clamp(0, MAX_CUSTOM_WINDOW_SECS)),
        }
    }
}
