//! # agentscore-decay
//!
//! Time weighting for trust signals. Fresh signals get a bonus, older ones
//! decay with a 90-day half-life, and negligible weights drop to zero.
//! The weighted trust ratio aggregates signals per side under these weights.

pub mod engine;
pub mod ratio;
pub mod weight;

pub use engine::DecayWeighter;
pub use ratio::weighted_trust_ratio;
pub use weight::{age_days, decay_weight};
