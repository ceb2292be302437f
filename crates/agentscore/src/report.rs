//! Report inputs and outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use agentscore_core::models::{
    CompositeResult, EntityStakes, FlowEvent, FlowWindow, LoyaltyBonus, StakeRecord, Tier,
    TierProgress, TrustScoreResult, WeightedTrustResult,
};

/// Everything known about one entity, as fetched from the indexer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgentInput {
    /// Current vault positions and labeled claims.
    pub stakes: EntityStakes,
    /// Vault ledger events, for momentum.
    pub flow_events: Vec<FlowEvent>,
    pub flow_window: FlowWindow,
    /// Timestamped staking history, for decay, stability and loyalty.
    pub signals: Vec<StakeRecord>,
    /// Registration time. Falls back to the earliest signal.
    pub created_at: Option<DateTime<Utc>>,
    /// Current share supply of the entity's vault, whole units.
    pub current_supply: f64,
}

/// Full trust picture for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AgentReport {
    pub trust: TrustScoreResult,
    pub decay: WeightedTrustResult,
    pub tier: Tier,
    pub progress: TierProgress,
    pub composite: CompositeResult,
    /// Loyalty of the entity's longest-standing supporter (earliest support
    /// signal). Per-holder loyalty for a sale comes from
    /// [`AgentScorer::holder_loyalty`](crate::AgentScorer::holder_loyalty).
    pub loyalty: LoyaltyBonus,
}
