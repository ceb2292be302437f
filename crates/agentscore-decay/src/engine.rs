use chrono::{DateTime, Utc};
use tracing::debug;

use agentscore_core::config::DecayConfig;
use agentscore_core::models::WeightedTrustResult;
use agentscore_core::StakeRecord;

use crate::{ratio, weight};

/// Decay weighter bound to one [`DecayConfig`].
#[derive(Debug, Clone, Default)]
pub struct DecayWeighter {
    config: DecayConfig,
}

impl DecayWeighter {
    pub fn new(config: &DecayConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Weight for a signal of the given age in days.
    pub fn decay_weight(&self, age_days: f64) -> f64 {
        weight::decay_weight(age_days, &self.config)
    }

    /// Weight for a signal as of `now`.
    pub fn signal_weight(&self, signal: &StakeRecord, now: DateTime<Utc>) -> f64 {
        self.decay_weight(weight::age_days(signal.timestamp, now))
    }

    /// Decayed and raw support ratios over `signals` as of `now`.
    pub fn weighted_trust_ratio(
        &self,
        signals: &[StakeRecord],
        now: DateTime<Utc>,
    ) -> WeightedTrustResult {
        let result = ratio::weighted_trust_ratio(signals, now, &self.config);
        debug!(
            signals = result.total_signals,
            fresh = result.fresh_signal_count,
            weighted_ratio = result.weighted_ratio,
            raw_ratio = result.raw_ratio,
            "weighted trust ratio computed"
        );
        result
    }
}
