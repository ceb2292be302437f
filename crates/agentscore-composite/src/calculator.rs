use chrono::{DateTime, Utc};
use tracing::debug;

use agentscore_core::config::{CompositeConfig, CurveConfig};
use agentscore_core::constants::MAX_SCORE;
use agentscore_core::models::{CompositeBreakdown, CompositeInput, CompositeResult, ExitLimit, LoyaltyBonus};
use agentscore_core::StakeRecord;
use agentscore_curve::BondingCurve;

use crate::{exit, factors, history, loyalty};

/// Composite trust calculator bound to one composite and curve config.
#[derive(Debug, Clone, Default)]
pub struct CompositeTrustCalculator {
    config: CompositeConfig,
    curve: BondingCurve,
}

impl CompositeTrustCalculator {
    pub fn new(config: &CompositeConfig, curve: &CurveConfig) -> Self {
        Self {
            config: config.clone(),
            curve: BondingCurve::new(curve),
        }
    }

    pub fn config(&self) -> &CompositeConfig {
        &self.config
    }

    pub fn curve(&self) -> &BondingCurve {
        &self.curve
    }

    /// Blend the four sub-scores.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentscore_composite::CompositeTrustCalculator;
    /// use agentscore_core::models::CompositeInput;
    ///
    /// let calc = CompositeTrustCalculator::default();
    /// let result = calc.calculate(&CompositeInput {
    ///     weighted_ratio: 100.0,
    ///     unique_stakers: 20,
    ///     stable_days: 30.0,
    ///     current_price: 1.0,
    ///     peak_price: 1.0,
    /// });
    /// assert!((result.score - 100.0).abs() < 1e-9);
    /// assert!(result.is_stable);
    /// ```
    pub fn calculate(&self, input: &CompositeInput) -> CompositeResult {
        let breakdown = CompositeBreakdown {
            signal_score: factors::signal::score(input.weighted_ratio),
            staker_score: factors::stakers::score(input.unique_stakers, self.config.staker_saturation),
            stability_score: factors::stability::score(
                input.stable_days,
                self.config.stability_saturation_days,
            ),
            price_score: factors::price::score(input.current_price, input.peak_price),
        };

        let score = (breakdown.signal_score * self.config.signal_weight
            + breakdown.staker_score * self.config.staker_weight
            + breakdown.stability_score * self.config.stability_weight
            + breakdown.price_score * self.config.price_weight)
            .clamp(0.0, MAX_SCORE);

        debug!(
            score,
            signal = breakdown.signal_score,
            stakers = breakdown.staker_score,
            stability = breakdown.stability_score,
            price = breakdown.price_score,
            "composite score computed"
        );

        CompositeResult {
            score,
            breakdown,
            is_stable: input.stable_days >= self.config.stable_min_days,
            price_retention_ratio: factors::price::retention(input.current_price, input.peak_price),
        }
    }

    /// Assemble a [`CompositeInput`] from a staking history.
    ///
    /// `weighted_ratio` and `unique_stakers` come from the decay weighter and
    /// the stake summary; stability and prices are derived here.
    pub fn input_from_history(
        &self,
        weighted_ratio: f64,
        unique_stakers: u32,
        signals: &[StakeRecord],
        current_supply: f64,
        now: DateTime<Utc>,
    ) -> CompositeInput {
        CompositeInput {
            weighted_ratio,
            unique_stakers,
            stable_days: self.stability_days(signals, now),
            current_price: self.curve.price(current_supply),
            peak_price: self.peak_price(signals, current_supply),
        }
    }

    pub fn stability_days(&self, signals: &[StakeRecord], now: DateTime<Utc>) -> f64 {
        history::stability_days(signals, now)
    }

    pub fn peak_price(&self, signals: &[StakeRecord], current_supply: f64) -> f64 {
        history::peak_price(signals, current_supply, &self.curve)
    }

    pub fn exit_limit(&self, user_shares: f64, total_supply: f64) -> ExitLimit {
        exit::exit_limit(user_shares, total_supply, &self.config)
    }

    pub fn loyalty_bonus(&self, first_stake: DateTime<Utc>, now: DateTime<Utc>) -> LoyaltyBonus {
        loyalty::loyalty_bonus(first_stake, now)
    }
}
