use chrono::{DateTime, Utc};

use agentscore_core::config::DecayConfig;
use agentscore_core::constants::NEUTRAL_SCORE;
use agentscore_core::models::WeightedTrustResult;
use agentscore_core::{StakeRecord, StakeSide};

use crate::weight::{age_days, decay_weight, is_fresh};

/// Aggregate signals into decayed and raw support ratios.
///
/// `ratio = Σ support × w / (Σ support × w + Σ oppose × w) × 100`, 50 when
/// nothing carries weight. The raw ratio uses `w = 1` throughout, and
/// `decay_delta` shows how much recency moved the number.
pub fn weighted_trust_ratio(
    signals: &[StakeRecord],
    now: DateTime<Utc>,
    config: &DecayConfig,
) -> WeightedTrustResult {
    let mut weighted_support = 0.0;
    let mut weighted_oppose = 0.0;
    let mut raw_support = 0.0;
    let mut raw_oppose = 0.0;
    let mut fresh_signal_count = 0;

    for signal in signals {
        let age = age_days(signal.timestamp, now);
        let weight = decay_weight(age, config);
        let amount = signal.amount_wei.to_units();
        if is_fresh(age, config) {
            fresh_signal_count += 1;
        }
        match signal.side {
            StakeSide::Support => {
                weighted_support += amount * weight;
                raw_support += amount;
            }
            StakeSide::Oppose => {
                weighted_oppose += amount * weight;
                raw_oppose += amount;
            }
        }
    }

    let weighted_ratio = ratio(weighted_support, weighted_oppose);
    let raw_ratio = ratio(raw_support, raw_oppose);

    WeightedTrustResult {
        weighted_ratio,
        raw_ratio,
        decay_delta: weighted_ratio - raw_ratio,
        weighted_support,
        weighted_oppose,
        fresh_signal_count,
        total_signals: signals.len(),
    }
}

fn ratio(support: f64, oppose: f64) -> f64 {
    let total = support + oppose;
    if total > 0.0 {
        support / total * 100.0
    } else {
        NEUTRAL_SCORE
    }
}
