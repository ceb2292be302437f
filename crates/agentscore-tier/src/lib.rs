//! # agentscore-tier
//!
//! Classifies an entity into Unverified / Sandbox / Trusted / Verified from
//! four metrics (stakers, total stake, trust ratio, age) and reports progress
//! toward the next tier.

pub mod classifier;
pub mod progress;
pub mod table;

pub use classifier::{calculate_tier, classify, next_tier};
pub use progress::calculate_progress;
pub use table::{requirement, tier_table};
