use tracing::debug;

use agentscore_core::config::CurveConfig;
use agentscore_core::models::{BuyQuote, CurvePoint, SellQuote};

use crate::formula::{self, non_negative};

/// Bonding curve bound to one [`CurveConfig`].
///
/// # Examples
///
/// ```
/// use agentscore_core::config::CurveConfig;
/// use agentscore_curve::BondingCurve;
///
/// let curve = BondingCurve::new(&CurveConfig::default());
/// let quote = curve.calculate_buy(10.0, 0.0);
/// assert!((quote.fee - 0.5).abs() < 1e-12);
/// assert!(quote.shares_out > 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BondingCurve {
    config: CurveConfig,
}

impl BondingCurve {
    pub fn new(config: &CurveConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    pub fn price(&self, supply: f64) -> f64 {
        formula::price(self.config.base_price, self.config.slope, supply)
    }

    pub fn shares_for_amount(&self, amount: f64, supply: f64) -> f64 {
        formula::shares_for_amount(self.config.base_price, self.config.slope, amount, supply)
    }

    pub fn buy_cost(&self, shares: f64, supply: f64) -> f64 {
        formula::buy_cost(self.config.base_price, self.config.slope, shares, supply)
    }

    pub fn sell_proceeds(&self, shares: f64, supply: f64) -> f64 {
        formula::sell_proceeds(self.config.base_price, self.config.slope, shares, supply)
    }

    /// Quote a buy of `amount`. The protocol fee comes off the top.
    pub fn calculate_buy(&self, amount: f64, supply: f64) -> BuyQuote {
        let amount_in = non_negative(amount);
        let supply = non_negative(supply);
        let fee = amount_in * self.config.protocol_fee;
        let net_amount = amount_in - fee;
        let shares_out = self.shares_for_amount(net_amount, supply);

        let start_price = self.price(supply);
        let new_supply = supply + shares_out;
        let new_price = self.price(new_supply);
        let average_price = if shares_out > 0.0 {
            net_amount / shares_out
        } else {
            start_price
        };
        let price_impact_percent = if start_price > 0.0 {
            (new_price - start_price) / start_price * 100.0
        } else {
            0.0
        };

        debug!(amount_in, shares_out, new_supply, "buy quoted");
        BuyQuote {
            amount_in,
            fee,
            net_amount,
            shares_out,
            new_supply,
            new_price,
            average_price,
            price_impact_percent,
        }
    }

    /// Quote a sell of `shares`. The protocol fee comes off the proceeds.
    pub fn calculate_sell(&self, shares: f64, supply: f64) -> SellQuote {
        let supply = non_negative(supply);
        let shares_in = non_negative(shares).min(supply);
        let gross_proceeds = self.sell_proceeds(shares_in, supply);
        let fee = gross_proceeds * self.config.protocol_fee;
        let net_proceeds = gross_proceeds - fee;
        let new_supply = supply - shares_in;
        let average_price = if shares_in > 0.0 {
            gross_proceeds / shares_in
        } else {
            self.price(supply)
        };

        debug!(shares_in, net_proceeds, new_supply, "sell quoted");
        SellQuote {
            shares_in,
            gross_proceeds,
            fee,
            net_proceeds,
            new_supply,
            new_price: self.price(new_supply),
            average_price,
        }
    }

    /// Sample the curve at `points` evenly spaced supplies over
    /// `[0, max(2 × current_supply, min_curve_span)]`.
    pub fn generate_curve_data(&self, current_supply: f64, points: usize) -> Vec<CurvePoint> {
        let max_supply = (2.0 * non_negative(current_supply)).max(self.config.min_curve_span);
        match points {
            0 => Vec::new(),
            1 => vec![self.point(0.0)],
            _ => {
                let step = max_supply / (points - 1) as f64;
                (0..points).map(|i| self.point(step * i as f64)).collect()
            }
        }
    }

    fn point(&self, supply: f64) -> CurvePoint {
        CurvePoint {
            supply,
            price: self.price(supply),
        }
    }
}
