//! # agentscore-core
//!
//! Foundation crate for the AgentScore trust engine.
//! Defines the stake data model, result types, config, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod wei;

// Re-export the most commonly used types at the crate root.
pub use config::{AgentScoreConfig, Network};
pub use errors::{AgentScoreError, AgentScoreResult};
pub use models::{StakeRecord, StakeSide, StakeSummary, TrustFlowSnapshot, TrustLevel};
pub use wei::Wei;
