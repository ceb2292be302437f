//! # agentscore-composite
//!
//! Whale-resistant composite trust score. Four 0–100 sub-scores (decayed
//! signal ratio, staker diversity, ratio stability, price retention) are
//! blended with configurable weights. Also hosts the large-holder exit
//! limiter and the loyalty multiplier for long-term stakers.

pub mod calculator;
pub mod exit;
pub mod factors;
pub mod history;
pub mod loyalty;

pub use calculator::CompositeTrustCalculator;
pub use exit::exit_limit;
pub use history::{peak_price, stability_days};
pub use loyalty::{loyalty_bonus, loyalty_from_history};
