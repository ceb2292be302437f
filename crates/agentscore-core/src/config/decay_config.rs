use serde::{Deserialize, Serialize};

use super::defaults;

/// Signal decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Signals younger than this (days) get the freshness bonus.
    pub freshness_window_days: f64,
    /// Weight of a brand-new signal.
    pub freshness_bonus: f64,
    /// Days for a signal's weight to halve once outside the freshness window.
    pub half_life_days: f64,
    /// Weights below this are treated as zero.
    pub min_weight: f64,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            freshness_window_days: defaults::DEFAULT_FRESHNESS_WINDOW_DAYS,
            freshness_bonus: defaults::DEFAULT_FRESHNESS_BONUS,
            half_life_days: defaults::DEFAULT_HALF_LIFE_DAYS,
            min_weight: defaults::DEFAULT_MIN_WEIGHT,
        }
    }
}
