//! Property tests for decay weighting.

use agentscore_core::config::DecayConfig;
use agentscore_core::{StakeRecord, Wei};
use agentscore_decay::{decay_weight, DecayWeighter};
use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn weight_is_non_increasing_in_age(a in 0.0f64..2_000.0, b in 0.0f64..2_000.0) {
        let config = DecayConfig::default();
        let (younger, older) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(decay_weight(younger, &config) >= decay_weight(older, &config));
    }

    #[test]
    fn weight_stays_within_bonus(age in -1_000.0f64..10_000.0) {
        let config = DecayConfig::default();
        let w = decay_weight(age, &config);
        prop_assert!(w >= 0.0);
        prop_assert!(w <= config.freshness_bonus);
    }

    #[test]
    fn weighted_ratio_is_a_percentage(
        amounts in prop::collection::vec((any::<bool>(), 0u64..1_000_000, 0i64..1_000), 0..40),
    ) {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let signals: Vec<StakeRecord> = amounts
            .iter()
            .map(|(support, amount, age)| {
                let ts = now - Duration::days(*age);
                if *support {
                    StakeRecord::support(Wei::from_units(*amount), ts)
                } else {
                    StakeRecord::oppose(Wei::from_units(*amount), ts)
                }
            })
            .collect();
        let result = DecayWeighter::default().weighted_trust_ratio(&signals, now);
        prop_assert!((0.0..=100.0).contains(&result.weighted_ratio));
        prop_assert!((0.0..=100.0).contains(&result.raw_ratio));
        prop_assert_eq!(result.total_signals, signals.len());
        prop_assert!(result.fresh_signal_count <= result.total_signals);
    }
}
