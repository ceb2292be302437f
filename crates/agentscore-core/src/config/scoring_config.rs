use serde::{Deserialize, Serialize};

use super::defaults;
use super::network::Network;

/// Trust score engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Liquidity scale τ in whole token units. `None` follows the network default.
    pub liquidity_scale: Option<f64>,
    /// Multiplier applied to net flow / total stake.
    pub momentum_scale: f64,
    /// Momentum bound when confidence is near zero.
    pub min_momentum_floor: f64,
    /// Momentum bound reached at full confidence.
    pub max_momentum_cap: f64,
}

impl ScoringConfig {
    /// Resolve τ for the given network.
    pub fn liquidity_scale_for(&self, network: Network) -> f64 {
        self.liquidity_scale.unwrap_or(match network {
            Network::Testnet => defaults::DEFAULT_TESTNET_LIQUIDITY_SCALE,
            Network::Mainnet => defaults::DEFAULT_MAINNET_LIQUIDITY_SCALE,
        })
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            liquidity_scale: None,
            momentum_scale: defaults::DEFAULT_MOMENTUM_SCALE,
            min_momentum_floor: defaults::DEFAULT_MIN_MOMENTUM_FLOOR,
            max_momentum_cap: defaults::DEFAULT_MAX_MOMENTUM_CAP,
        }
    }
}
