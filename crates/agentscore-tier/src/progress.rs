use agentscore_core::models::{TierMetrics, TierProgress};

use crate::classifier::{classify, next_tier};
use crate::table::requirement;

/// Per-dimension progress toward the tier above the current one.
///
/// Each dimension is `min(100, round(current / required × 100))`, with 100
/// when nothing is required. At the top tier everything reads 100.
pub fn calculate_progress(metrics: &TierMetrics) -> TierProgress {
    let current_tier = classify(metrics);

    let Some(next) = next_tier(current_tier) else {
        return TierProgress {
            current_tier,
            next_tier: None,
            stakers_percent: 100,
            stake_percent: 100,
            ratio_percent: 100,
            age_percent: 100,
            overall_percent: 100,
        };
    };

    let target = requirement(next);
    let stakers_percent = percent(f64::from(metrics.stakers), f64::from(target.min_stakers));
    let stake_percent = percent(metrics.total_stake, target.min_total_stake);
    let ratio_percent = percent(metrics.trust_ratio, target.min_trust_ratio);
    let age_percent = percent(metrics.age_days, target.min_age_days);
    let sum = u16::from(stakers_percent)
        + u16::from(stake_percent)
        + u16::from(ratio_percent)
        + u16::from(age_percent);
    let overall_percent = (f64::from(sum) / 4.0).round() as u8;

    TierProgress {
        current_tier,
        next_tier: Some(next),
        stakers_percent,
        stake_percent,
        ratio_percent,
        age_percent,
        overall_percent,
    }
}

fn percent(current: f64, required: f64) -> u8 {
    if required <= 0.0 {
        return 100;
    }
    if current.is_nan() || current <= 0.0 {
        return 0;
    }
    (current / required * 100.0).round().min(100.0) as u8
}
