use tracing::debug;

use agentscore_core::config::{AgentScoreConfig, Network, ScoringConfig};
use agentscore_core::models::TrustScoreResult;
use agentscore_core::{StakeSummary, TrustFlowSnapshot, Wei};

use crate::formula::{self, ScoringParams};

/// Trust score engine.
///
/// Holds resolved constants only; every call is a pure function of its inputs.
#[derive(Debug, Clone, Default)]
pub struct TrustScoreEngine {
    params: ScoringParams,
}

impl TrustScoreEngine {
    pub fn new(config: &ScoringConfig, network: Network) -> Self {
        Self::with_params(ScoringParams::new(config, network))
    }

    pub fn with_params(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn from_config(config: &AgentScoreConfig) -> Self {
        Self::new(&config.scoring, config.network)
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score a summarized entity. A missing flow snapshot means zero flow.
    pub fn calculate(
        &self,
        summary: &StakeSummary,
        flow: Option<&TrustFlowSnapshot>,
    ) -> TrustScoreResult {
        self.calculate_from_stakes(summary.support_stake_wei, summary.oppose_stake_wei, flow)
    }

    /// Score raw support/oppose totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use agentscore_core::{TrustLevel, Wei};
    /// use agentscore_scoring::TrustScoreEngine;
    ///
    /// let engine = TrustScoreEngine::default();
    /// let result = engine.calculate_from_stakes(Wei::from_units(700), Wei::from_units(300), None);
    /// assert_eq!(result.score, 70);
    /// assert_eq!(result.level, TrustLevel::Good);
    /// ```
    pub fn calculate_from_stakes(
        &self,
        support: Wei,
        oppose: Wei,
        flow: Option<&TrustFlowSnapshot>,
    ) -> TrustScoreResult {
        let result = formula::compute(support, oppose, flow, &self.params);
        debug!(
            score = result.score,
            level = %result.level,
            base_score = result.base_score,
            confidence = result.confidence,
            momentum = result.momentum,
            "trust score computed"
        );
        result
    }
}

/// Score raw totals with the stock testnet engine and no flow.
///
/// `calculate_trust_score_from_stakes(0, 0)` is the neutral 50 / moderate.
pub fn calculate_trust_score_from_stakes(support: Wei, oppose: Wei) -> TrustScoreResult {
    TrustScoreEngine::default().calculate_from_stakes(support, oppose, None)
}
