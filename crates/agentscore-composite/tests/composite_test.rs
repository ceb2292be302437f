use agentscore_composite::{exit_limit, loyalty_bonus, loyalty_from_history, CompositeTrustCalculator};
use agentscore_core::config::{CompositeConfig, CurveConfig};
use agentscore_core::models::{CompositeInput, LoyaltyTier};
use agentscore_core::{StakeRecord, Wei};
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

fn units(n: u64) -> Wei {
    Wei::from_units(n)
}

fn calculator() -> CompositeTrustCalculator {
    CompositeTrustCalculator::new(&CompositeConfig::default(), &CurveConfig::default())
}

// ── Composite blend ─────────────────────────────────────────────────────

#[test]
fn weights_blend_sub_scores() {
    let result = calculator().calculate(&CompositeInput {
        weighted_ratio: 80.0,
        unique_stakers: 10,
        stable_days: 15.0,
        current_price: 0.5,
        peak_price: 1.0,
    });
    assert_eq!(result.breakdown.signal_score, 80.0);
    assert_eq!(result.breakdown.staker_score, 50.0);
    assert_eq!(result.breakdown.stability_score, 50.0);
    assert_eq!(result.breakdown.price_score, 50.0);
    // 0.4×80 + 0.2×50 + 0.25×50 + 0.15×50
    assert!((result.score - 62.0).abs() < 1e-9);
    assert!(result.is_stable);
    assert_eq!(result.price_retention_ratio, 0.5);
}

#[test]
fn one_whale_cannot_buy_a_top_score() {
    // Unanimous decayed ratio from a single fresh staker.
    let result = calculator().calculate(&CompositeInput {
        weighted_ratio: 100.0,
        unique_stakers: 1,
        stable_days: 0.5,
        current_price: 1.0,
        peak_price: 1.0,
    });
    assert!(result.score < 60.0);
    assert!(!result.is_stable);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let result = calculator().calculate(&CompositeInput {
        weighted_ratio: 250.0,
        unique_stakers: 500,
        stable_days: 1_000.0,
        current_price: 3.0,
        peak_price: 1.0,
    });
    assert!((result.score - 100.0).abs() < 1e-9);
    assert_eq!(result.price_retention_ratio, 1.0);
}

// ── History ─────────────────────────────────────────────────────────────

#[test]
fn stability_counts_majority_intervals() {
    let history = vec![
        StakeRecord::support(units(10), now() - Duration::days(20)),
        StakeRecord::oppose(units(30), now() - Duration::days(15)),
        StakeRecord::support(units(40), now() - Duration::days(5)),
    ];
    // Stable 20→15 (5 days), unstable 15→5, stable 5→now (5 days).
    let days = calculator().stability_days(&history, now());
    assert!((days - 10.0).abs() < 1e-9);
}

#[test]
fn stability_ignores_input_order() {
    let mut history = vec![
        StakeRecord::support(units(10), now() - Duration::days(20)),
        StakeRecord::oppose(units(30), now() - Duration::days(15)),
        StakeRecord::support(units(40), now() - Duration::days(5)),
    ];
    let forward = calculator().stability_days(&history, now());
    history.reverse();
    assert_eq!(calculator().stability_days(&history, now()), forward);
}

#[test]
fn empty_history_has_no_stability() {
    assert_eq!(calculator().stability_days(&[], now()), 0.0);
}

#[test]
fn peak_price_tracks_cumulative_support() {
    let calc = calculator();
    let history = vec![
        StakeRecord::support(units(100), now() - Duration::days(3)),
        StakeRecord::oppose(units(500), now() - Duration::days(2)),
        StakeRecord::support(units(50), now() - Duration::days(1)),
    ];
    let first = calc.curve().shares_for_amount(100.0, 0.0);
    let second = calc.curve().shares_for_amount(50.0, first);
    let peak = calc.peak_price(&history, 20.0);
    assert!((peak - calc.curve().price(first + second)).abs() < 1e-12);

    let input = calc.input_from_history(70.0, 3, &history, 20.0, now());
    assert!(input.current_price < input.peak_price);
    assert!(calc.calculate(&input).price_retention_ratio < 1.0);
}

#[test]
fn exit_after_deposit_lowers_price_retention() {
    let calc = calculator();
    // 100 units mint roughly 437 shares from an empty vault; most are redeemed.
    let history = vec![StakeRecord::support(units(100), now() - Duration::days(10))];
    let minted = calc.curve().shares_for_amount(100.0, 0.0);
    assert!(minted > 400.0);

    let input = calc.input_from_history(70.0, 1, &history, 150.0, now());
    let result = calc.calculate(&input);
    assert!((input.peak_price - calc.curve().price(minted)).abs() < 1e-12);
    assert!(result.price_retention_ratio < 0.5);
    assert!(result.breakdown.price_score < 50.0);
}

#[test]
fn peak_price_never_below_current() {
    let calc = calculator();
    assert_eq!(calc.peak_price(&[], 42.0), calc.curve().price(42.0));
}

// ── Exit limiter ────────────────────────────────────────────────────────

#[test]
fn whale_exit_is_halved() {
    let limit = exit_limit(200.0, 1_000.0, &CompositeConfig::default());
    assert!(limit.is_limited);
    assert_eq!(limit.max_sell_shares, 100.0);
    assert_eq!(limit.max_sell_percent, 50.0);
    assert!(limit.reason.as_deref().unwrap_or_default().contains("20.0%"));
}

#[test]
fn small_holder_is_unrestricted() {
    let limit = calculator().exit_limit(199.0, 1_000.0);
    assert!(!limit.is_limited);
    assert_eq!(limit.max_sell_shares, 199.0);
    assert_eq!(limit.max_sell_percent, 100.0);
    assert!(limit.reason.is_none());
}

#[test]
fn empty_vault_is_unrestricted() {
    let limit = exit_limit(10.0, 0.0, &CompositeConfig::default());
    assert!(!limit.is_limited);
    assert_eq!(limit.max_sell_shares, 10.0);
}

// ── Loyalty ─────────────────────────────────────────────────────────────

#[test]
fn loyalty_tiers_by_days_held() {
    let cases = [
        (0, LoyaltyTier::Bronze, 1.0),
        (29, LoyaltyTier::Bronze, 1.0),
        (30, LoyaltyTier::Silver, 1.15),
        (90, LoyaltyTier::Gold, 1.3),
        (180, LoyaltyTier::Platinum, 1.5),
        (1_000, LoyaltyTier::Platinum, 1.5),
    ];
    for (days, tier, multiplier) in cases {
        let bonus = loyalty_bonus(now() - Duration::days(days), now());
        assert_eq!(bonus.tier, tier, "{days} days");
        assert_eq!(bonus.multiplier, multiplier);
    }
}

#[test]
fn future_first_stake_holds_zero_days() {
    let bonus = calculator().loyalty_bonus(now() + Duration::days(3), now());
    assert_eq!(bonus.days_held, 0.0);
    assert_eq!(bonus.tier, LoyaltyTier::Bronze);
}

#[test]
fn loyalty_uses_earliest_support_stake() {
    let history = vec![
        StakeRecord::oppose(units(1), now() - Duration::days(400)),
        StakeRecord::support(units(1), now() - Duration::days(95)),
        StakeRecord::support(units(1), now() - Duration::days(10)),
    ];
    let bonus = loyalty_from_history(&history, now());
    assert_eq!(bonus.tier, LoyaltyTier::Gold);
    assert_eq!(loyalty_from_history(&[], now()).tier, LoyaltyTier::Bronze);
}

proptest! {
    #[test]
    fn composite_score_is_bounded(
        ratio in -50.0f64..200.0,
        stakers in 0u32..1_000,
        stable in -10.0f64..1_000.0,
        current in 0.0f64..10.0,
        peak in 0.0f64..10.0,
    ) {
        let result = calculator().calculate(&CompositeInput {
            weighted_ratio: ratio,
            unique_stakers: stakers,
            stable_days: stable,
            current_price: current,
            peak_price: peak,
        });
        prop_assert!((0.0..=100.0).contains(&result.score));
        prop_assert!((0.0..=1.0).contains(&result.price_retention_ratio));
    }

    #[test]
    fn exit_limit_never_exceeds_position(user in 0.0f64..1e6, total in 0.0f64..1e6) {
        let limit = exit_limit(user, total, &CompositeConfig::default());
        prop_assert!(limit.max_sell_shares <= user);
        prop_assert_eq!(limit.is_limited, limit.reason.is_some());
    }
}
