//! The four composite sub-scores, each 0–100.

pub mod price;
pub mod signal;
pub mod stability;
pub mod stakers;
