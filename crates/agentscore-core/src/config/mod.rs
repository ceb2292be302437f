//! Engine configuration.
//!
//! Every section is `#[serde(default)]`, so an empty TOML document yields the
//! stock configuration and a partial one overrides only what it names.
//!
//! # Examples
//!
//! ```
//! use agentscore_core::config::{AgentScoreConfig, Network};
//!
//! let config = AgentScoreConfig::from_toml("network = \"mainnet\"").unwrap();
//! assert_eq!(config.network, Network::Mainnet);
//! assert!((config.liquidity_scale() - 5_000.0).abs() < f64::EPSILON);
//! ```

pub mod composite_config;
pub mod curve_config;
pub mod decay_config;
pub mod defaults;
pub mod network;
pub mod observability_config;
pub mod scoring_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use composite_config::CompositeConfig;
pub use curve_config::CurveConfig;
pub use decay_config::DecayConfig;
pub use network::Network;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;

use crate::errors::{AgentScoreError, AgentScoreResult, ConfigError};

/// Tolerance for the composite weights summing to 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentScoreConfig {
    pub network: Network,
    pub scoring: ScoringConfig,
    pub decay: DecayConfig,
    pub composite: CompositeConfig,
    pub curve: CurveConfig,
    pub observability: ObservabilityConfig,
}

impl AgentScoreConfig {
    /// Stock configuration for a network.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> AgentScoreResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> AgentScoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn to_toml(&self) -> AgentScoreResult<String> {
        toml::to_string(self).map_err(|e| AgentScoreError::SerializationError {
            reason: e.to_string(),
        })
    }

    /// Liquidity scale τ for the configured network.
    pub fn liquidity_scale(&self) -> f64 {
        self.scoring.liquidity_scale_for(self.network)
    }

    /// Reject values that would make the engine produce NaN or out-of-range scores.
    pub fn validate(&self) -> AgentScoreResult<()> {
        let scoring = &self.scoring;
        if let Some(tau) = scoring.liquidity_scale {
            require_positive("scoring.liquidity_scale", tau)?;
        }
        require_non_negative("scoring.momentum_scale", scoring.momentum_scale)?;
        require_non_negative("scoring.min_momentum_floor", scoring.min_momentum_floor)?;
        require_non_negative("scoring.max_momentum_cap", scoring.max_momentum_cap)?;

        let decay = &self.decay;
        require_positive("decay.freshness_window_days", decay.freshness_window_days)?;
        require_positive("decay.half_life_days", decay.half_life_days)?;
        require_fraction("decay.min_weight", decay.min_weight)?;
        if !decay.freshness_bonus.is_finite() || decay.freshness_bonus < 1.0 {
            return Err(ConfigError::invalid("decay.freshness_bonus", "must be at least 1.0").into());
        }

        let composite = &self.composite;
        require_non_negative("composite.signal_weight", composite.signal_weight)?;
        require_non_negative("composite.staker_weight", composite.staker_weight)?;
        require_non_negative("composite.stability_weight", composite.stability_weight)?;
        require_non_negative("composite.price_weight", composite.price_weight)?;
        let sum = composite.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::invalid(
                "composite weights",
                format!("must sum to 1.0, got {sum:.6}"),
            )
            .into());
        }
        if composite.staker_saturation == 0 {
            return Err(ConfigError::invalid("composite.staker_saturation", "must be non-zero").into());
        }
        require_positive("composite.stability_saturation_days", composite.stability_saturation_days)?;
        require_non_negative("composite.stable_min_days", composite.stable_min_days)?;
        require_unit_interval("composite.whale_threshold", composite.whale_threshold)?;
        require_unit_interval("composite.whale_max_sell_fraction", composite.whale_max_sell_fraction)?;

        let curve = &self.curve;
        require_non_negative("curve.base_price", curve.base_price)?;
        require_non_negative("curve.slope", curve.slope)?;
        if curve.base_price == 0.0 && curve.slope == 0.0 {
            return Err(ConfigError::invalid("curve", "base_price and slope cannot both be zero").into());
        }
        require_fraction("curve.protocol_fee", curve.protocol_fee)?;
        require_positive("curve.min_curve_span", curve.min_curve_span)?;

        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be positive, got {value}")))
    }
}

fn require_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be non-negative, got {value}")))
    }
}

/// `[0, 1)`.
fn require_fraction(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be in [0, 1), got {value}")))
    }
}

/// `(0, 1]`.
fn require_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be in (0, 1], got {value}")))
    }
}
