//! Data model shared by every engine crate.

pub mod composite;
pub mod curve;
pub mod decay;
pub mod flow;
pub mod score;
pub mod stake;
pub mod tier;

pub use composite::{
    CompositeBreakdown, CompositeInput, CompositeResult, ExitLimit, LoyaltyBonus, LoyaltyTier,
};
pub use curve::{BuyQuote, CurvePoint, SellQuote};
pub use decay::WeightedTrustResult;
pub use flow::{FlowEvent, FlowEventKind, FlowWindow, TrustFlowSnapshot};
pub use score::{TrustLevel, TrustScoreResult};
pub use stake::{EntityStakes, Position, StakeRecord, StakeSide, StakeSummary, Triple, Vault};
pub use tier::{Tier, TierMetrics, TierProgress, TierRequirement};
