//! # agentscore-scoring
//!
//! Trust score engine. Converts support/oppose stake totals and a recent flow
//! snapshot into a bounded 0–100 score:
//! base ratio → liquidity confidence → anchoring toward 50 → bounded momentum.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::{calculate_trust_score_from_stakes, TrustScoreEngine};
pub use formula::ScoringParams;
