//! Metrics derived from an entity's full staking history.

use chrono::{DateTime, Utc};

use agentscore_core::constants::{NEUTRAL_SCORE, SECONDS_PER_DAY};
use agentscore_core::{StakeRecord, StakeSide, Wei};
use agentscore_curve::BondingCurve;

/// Days the cumulative support ratio stayed at or above 50%.
///
/// Records are replayed in timestamp order. After each one the running ratio
/// is evaluated and, when it holds a majority, the time until the next record
/// (or `now` for the last) is counted. An even split counts as stable.
pub fn stability_days(signals: &[StakeRecord], now: DateTime<Utc>) -> f64 {
    let mut ordered: Vec<&StakeRecord> = signals.iter().collect();
    ordered.sort_by_key(|s| s.timestamp);

    let mut support = Wei::ZERO;
    let mut oppose = Wei::ZERO;
    let mut stable_seconds = 0.0;

    for (i, signal) in ordered.iter().enumerate() {
        match signal.side {
            StakeSide::Support => support += signal.amount_wei,
            StakeSide::Oppose => oppose += signal.amount_wei,
        }

        let until = ordered.get(i + 1).map_or(now, |next| next.timestamp);
        let interval = (until - signal.timestamp).num_milliseconds() as f64 / 1000.0;
        if interval > 0.0 && support_ratio(support, oppose) >= NEUTRAL_SCORE {
            stable_seconds += interval;
        }
    }

    stable_seconds / SECONDS_PER_DAY
}

/// Highest price the curve reached as support shares accumulated, including
/// the price at `current_supply`.
///
/// Each support deposit is converted to the shares it minted at the supply of
/// the moment, so the replayed supply is in the same unit as `current_supply`.
pub fn peak_price(signals: &[StakeRecord], current_supply: f64, curve: &BondingCurve) -> f64 {
    let mut ordered: Vec<&StakeRecord> = signals.iter().collect();
    ordered.sort_by_key(|s| s.timestamp);

    let mut supply = 0.0;
    let mut peak = curve.price(current_supply);
    for signal in ordered {
        if signal.side == StakeSide::Support {
            supply += curve.shares_for_amount(signal.amount_wei.to_units(), supply);
            peak = peak.max(curve.price(supply));
        }
    }
    peak
}

fn support_ratio(support: Wei, oppose: Wei) -> f64 {
    let total = support.to_units() + oppose.to_units();
    if total > 0.0 {
        support.to_units() / total * 100.0
    } else {
        NEUTRAL_SCORE
    }
}
