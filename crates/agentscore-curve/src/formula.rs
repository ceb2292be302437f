//! Closed-form integrals of the linear price function.
//!
//! Every function treats negative or NaN quantities as zero.

/// Clamp to a finite non-negative quantity.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Spot price at `supply`.
pub fn price(base_price: f64, slope: f64, supply: f64) -> f64 {
    base_price + slope * non_negative(supply)
}

/// Cost of minting `shares` starting at `supply`: `∫_s^{s+n} price`.
pub fn buy_cost(base_price: f64, slope: f64, shares: f64, supply: f64) -> f64 {
    let n = non_negative(shares);
    let s = non_negative(supply);
    base_price * n + slope * (s * n + n * n / 2.0)
}

/// Proceeds of burning `shares` from `supply`: `∫_{s-n}^{s} price`.
///
/// The burned quantity is clamped to the supply.
pub fn sell_proceeds(base_price: f64, slope: f64, shares: f64, supply: f64) -> f64 {
    let s = non_negative(supply);
    let n = non_negative(shares).min(s);
    base_price * n + slope * (s * n - n * n / 2.0)
}

/// Shares minted by spending `amount` at `supply`.
///
/// Positive root of `slope/2·N² + (base + slope·supply)·N − amount = 0`.
pub fn shares_for_amount(base_price: f64, slope: f64, amount: f64, supply: f64) -> f64 {
    let amount = non_negative(amount);
    if amount == 0.0 {
        return 0.0;
    }
    if slope == 0.0 {
        return if base_price > 0.0 { amount / base_price } else { 0.0 };
    }

    let linear = price(base_price, slope, supply);
    let discriminant = linear * linear + 2.0 * slope * amount;
    if discriminant < 0.0 {
        return 0.0;
    }
    // (√D − p) / slope, rationalized.
    let denominator = linear + discriminant.sqrt();
    if denominator > 0.0 {
        2.0 * amount / denominator
    } else {
        0.0
    }
}
