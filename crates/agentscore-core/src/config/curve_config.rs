use serde::{Deserialize, Serialize};

use super::defaults;

/// Linear bonding curve parameters: `price(supply) = base_price + slope × supply`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub base_price: f64,
    pub slope: f64,
    /// Protocol fee fraction taken on buys (before curve math) and sells (after).
    pub protocol_fee: f64,
    /// Minimum supply span sampled by curve charts.
    pub min_curve_span: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            base_price: defaults::DEFAULT_BASE_PRICE,
            slope: defaults::DEFAULT_SLOPE,
            protocol_fee: defaults::DEFAULT_PROTOCOL_FEE,
            min_curve_span: defaults::DEFAULT_MIN_CURVE_SPAN,
        }
    }
}
