use chrono::{DateTime, Utc};

use agentscore_core::config::DecayConfig;
use agentscore_core::constants::SECONDS_PER_DAY;

/// Fractional days between `timestamp` and `now`. Negative for future timestamps.
pub fn age_days(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - timestamp).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}

/// Weight of a signal aged `age_days`.
///
/// - `age < 0` (timestamp in the future): 1.0.
/// - `0 ≤ age ≤ window`: linear from the freshness bonus down to 1.0.
/// - `age > window`: `0.5^(age / half_life)`, 0 once below `min_weight`.
///
/// Range: 0.0 – freshness bonus.
pub fn decay_weight(age_days: f64, config: &DecayConfig) -> f64 {
    if age_days.is_nan() || age_days < 0.0 {
        return 1.0;
    }

    if age_days <= config.freshness_window_days && config.freshness_window_days > 0.0 {
        let progress = age_days / config.freshness_window_days;
        return config.freshness_bonus - (config.freshness_bonus - 1.0) * progress;
    }

    let weight = 0.5f64.powf(age_days / config.half_life_days);
    if weight < config.min_weight {
        0.0
    } else {
        weight
    }
}

/// Whether a signal of this age is inside the freshness window.
pub fn is_fresh(age_days: f64, config: &DecayConfig) -> bool {
    (0.0..=config.freshness_window_days).contains(&age_days)
}
