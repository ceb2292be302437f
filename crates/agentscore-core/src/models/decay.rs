use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Time-weighted trust ratio over a set of signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WeightedTrustResult {
    /// Decayed support share × 100 (50 when nothing carries weight).
    pub weighted_ratio: f64,
    /// Undecayed support share × 100.
    pub raw_ratio: f64,
    /// `weighted_ratio − raw_ratio`.
    pub decay_delta: f64,
    /// Σ support amount × weight, in whole units.
    pub weighted_support: f64,
    /// Σ oppose amount × weight, in whole units.
    pub weighted_oppose: f64,
    /// Signals inside the freshness window.
    pub fresh_signal_count: usize,
    pub total_signals: usize,
}
