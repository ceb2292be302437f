//! # agentscore-curve
//!
//! Linear bonding curve: `price(supply) = base_price + slope × supply`.
//! Buys pay the protocol fee before the curve math, sells pay it after.
//! All amounts are whole token units as `f64`.

pub mod curve;
pub mod formula;

pub use curve::BondingCurve;
