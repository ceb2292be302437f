/// `current / peak`, clamped to 0–1. A zero peak means nothing was lost.
pub fn retention(current_price: f64, peak_price: f64) -> f64 {
    if peak_price.is_nan() || peak_price <= 0.0 {
        return 1.0;
    }
    if current_price.is_nan() {
        return 0.0;
    }
    (current_price / peak_price).clamp(0.0, 1.0)
}

/// Price retention as a 0–100 score.
pub fn score(current_price: f64, peak_price: f64) -> f64 {
    retention(current_price, peak_price) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_peak_retains_everything() {
        assert_eq!(score(0.5, 0.0), 100.0);
    }

    #[test]
    fn halved_price_scores_fifty() {
        assert_eq!(score(0.05, 0.10), 50.0);
    }

    #[test]
    fn price_above_peak_is_clamped() {
        assert_eq!(score(2.0, 1.0), 100.0);
    }
}
