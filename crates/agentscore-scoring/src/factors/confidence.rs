/// Liquidity confidence: `1 − e^(−total_units / τ)`.
///
/// Range: `[0, 1)`, approaching 1 as stake grows. In `f64` it reaches exactly
/// 1.0 once the exponential underflows, far past any realistic stake.
/// Non-positive stake or a degenerate τ yields 0.
pub fn calculate(total_units: f64, liquidity_scale: f64) -> f64 {
    if total_units.is_nan() || total_units <= 0.0 || liquidity_scale.is_nan() || liquidity_scale <= 0.0 {
        return 0.0;
    }
    (1.0 - (-total_units / liquidity_scale).exp()).clamp(0.0, 1.0)
}
