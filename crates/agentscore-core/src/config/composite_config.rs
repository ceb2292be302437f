use serde::{Deserialize, Serialize};

use super::defaults;

/// Composite (whale-resistant) score configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// Weight of the decayed signal ratio.
    pub signal_weight: f64,
    /// Weight of staker diversity.
    pub staker_weight: f64,
    /// Weight of ratio stability over time.
    pub stability_weight: f64,
    /// Weight of price retention against the peak.
    pub price_weight: f64,
    /// Unique stakers at which the staker score saturates.
    pub staker_saturation: u32,
    /// Stable days at which the stability score saturates.
    pub stability_saturation_days: f64,
    /// Minimum stable days for `is_stable`.
    pub stable_min_days: f64,
    /// Ownership share of total supply from which exits are throttled.
    pub whale_threshold: f64,
    /// Fraction of a whale position sellable per day.
    pub whale_max_sell_fraction: f64,
}

impl CompositeConfig {
    pub fn weight_sum(&self) -> f64 {
        self.signal_weight + self.staker_weight + self.stability_weight + self.price_weight
    }
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            signal_weight: defaults::DEFAULT_SIGNAL_WEIGHT,
            staker_weight: defaults::DEFAULT_STAKER_WEIGHT,
            stability_weight: defaults::DEFAULT_STABILITY_WEIGHT,
            price_weight: defaults::DEFAULT_PRICE_WEIGHT,
            staker_saturation: defaults::DEFAULT_STAKER_SATURATION,
            stability_saturation_days: defaults::DEFAULT_STABILITY_SATURATION_DAYS,
            stable_min_days: defaults::DEFAULT_STABLE_MIN_DAYS,
            whale_threshold: defaults::DEFAULT_WHALE_THRESHOLD,
            whale_max_sell_fraction: defaults::DEFAULT_WHALE_MAX_SELL_FRACTION,
        }
    }
}
