//! Large-holder exit throttling.

use agentscore_core::config::CompositeConfig;
use agentscore_core::models::ExitLimit;

/// How much of `user_shares` may be sold today.
///
/// Holders of at least `whale_threshold` of the supply may sell only
/// `whale_max_sell_fraction` of their position per day. Everyone else, and
/// any position in an empty vault, is unrestricted.
///
/// # Examples
///
/// ```
/// use agentscore_composite::exit_limit;
/// use agentscore_core::config::CompositeConfig;
///
/// let limit = exit_limit(300.0, 1_000.0, &CompositeConfig::default());
/// assert!(limit.is_limited);
/// assert_eq!(limit.max_sell_shares, 150.0);
/// ```
pub fn exit_limit(user_shares: f64, total_supply: f64, config: &CompositeConfig) -> ExitLimit {
    let user_shares = if user_shares.is_finite() { user_shares.max(0.0) } else { 0.0 };

    if !(total_supply.is_finite() && total_supply > 0.0) || user_shares == 0.0 {
        return unrestricted(user_shares);
    }

    let ownership = user_shares / total_supply;
    if ownership < config.whale_threshold {
        return unrestricted(user_shares);
    }

    let max_sell_shares = user_shares * config.whale_max_sell_fraction;
    let max_sell_percent = config.whale_max_sell_fraction * 100.0;
    tracing::debug!(
        ownership_percent = ownership * 100.0,
        max_sell_shares,
        "large holder exit limited"
    );
    ExitLimit {
        is_limited: true,
        max_sell_shares,
        max_sell_percent,
        reason: Some(format!(
            "Position holds {:.1}% of supply; sales are limited to {:.0}% of it per day",
            ownership * 100.0,
            max_sell_percent,
        )),
    }
}

fn unrestricted(user_shares: f64) -> ExitLimit {
    ExitLimit {
        is_limited: false,
        max_sell_shares: user_shares,
        max_sell_percent: 100.0,
        reason: None,
    }
}
