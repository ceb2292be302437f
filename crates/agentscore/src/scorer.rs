use chrono::{DateTime, Utc};

use agentscore_composite::{loyalty_from_history, CompositeTrustCalculator};
use agentscore_core::models::{
    EntityStakes, ExitLimit, LoyaltyBonus, StakeSummary, TierMetrics, TrustScoreResult,
};
use agentscore_core::{AgentScoreConfig, AgentScoreResult, TrustFlowSnapshot};
use agentscore_curve::BondingCurve;
use agentscore_decay::{age_days, DecayWeighter};
use agentscore_observability::{composite_span, report_span, scoring_span};
use agentscore_observability::tracing_setup::events;
use agentscore_scoring::TrustScoreEngine;
use agentscore_stake::{snapshot_from_events, summarize};

use crate::report::{AgentInput, AgentReport};

/// Engine facade bound to one validated configuration.
#[derive(Debug, Clone)]
pub struct AgentScorer {
    config: AgentScoreConfig,
    engine: TrustScoreEngine,
    weighter: DecayWeighter,
    composite: CompositeTrustCalculator,
}

impl AgentScorer {
    /// Build from a configuration, rejecting invalid values.
    pub fn new(config: AgentScoreConfig) -> AgentScoreResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Build from a TOML document.
    pub fn from_toml(toml_str: &str) -> AgentScoreResult<Self> {
        AgentScoreConfig::from_toml(toml_str).map(Self::build)
    }

    fn build(config: AgentScoreConfig) -> Self {
        Self {
            engine: TrustScoreEngine::from_config(&config),
            weighter: DecayWeighter::new(&config.decay),
            composite: CompositeTrustCalculator::new(&config.composite, &config.curve),
            config,
        }
    }

    pub fn config(&self) -> &AgentScoreConfig {
        &self.config
    }

    pub fn engine(&self) -> &TrustScoreEngine {
        &self.engine
    }

    pub fn weighter(&self) -> &DecayWeighter {
        &self.weighter
    }

    pub fn composite(&self) -> &CompositeTrustCalculator {
        &self.composite
    }

    pub fn curve(&self) -> &BondingCurve {
        self.composite.curve()
    }

    /// Summarize and score an entity's current stakes.
    pub fn score_entity(
        &self,
        stakes: &EntityStakes,
        flow: Option<&TrustFlowSnapshot>,
    ) -> TrustScoreResult {
        self.engine.calculate(&summarize(stakes), flow)
    }

    /// Daily exit allowance for a holder of `user_shares` out of `total_supply`.
    pub fn exit_limit(&self, user_shares: f64, total_supply: f64) -> ExitLimit {
        let limit = self.composite.exit_limit(user_shares, total_supply);
        if limit.is_limited {
            events::exit_limited(user_shares / total_supply * 100.0, limit.max_sell_shares);
        }
        limit
    }

    /// Loyalty bonus for one holder, from that holder's own first stake.
    pub fn holder_loyalty(&self, first_stake: DateTime<Utc>, now: DateTime<Utc>) -> LoyaltyBonus {
        self.composite.loyalty_bonus(first_stake, now)
    }

    /// Build the full report for one entity as of `now`.
    pub fn report(&self, input: &AgentInput, now: DateTime<Utc>) -> AgentReport {
        let span = report_span!(input.signals.len());
        let _guard = span.enter();

        let summary = summarize(&input.stakes);
        let flow = snapshot_from_events(&input.flow_events, input.flow_window, now);
        let flow = (!flow.is_empty()).then_some(flow);
        let trust = scoring_span!(self.config.network)
            .in_scope(|| self.engine.calculate(&summary, flow.as_ref()));
        events::score_computed(trust.score, trust.level, trust.confidence, trust.momentum);

        let decay = self.weighter.weighted_trust_ratio(&input.signals, now);

        let stakers = unique_stakers(&summary);
        let progress = agentscore_tier::calculate_progress(&TierMetrics {
            stakers,
            total_stake: summary.total_stake_wei().to_units(),
            trust_ratio: trust.base_score,
            age_days: entity_age_days(input, now),
        });
        events::tier_assigned(progress.current_tier, progress.next_tier, progress.overall_percent);

        let composite_input = self.composite.input_from_history(
            decay.weighted_ratio,
            stakers,
            &input.signals,
            input.current_supply,
            now,
        );
        let composite = composite_span!(input.signals.len())
            .in_scope(|| self.composite.calculate(&composite_input));
        let loyalty = loyalty_from_history(&input.signals, now);

        events::report_built(trust.score, progress.current_tier, composite.score, decay.total_signals);

        AgentReport {
            trust,
            decay,
            tier: progress.current_tier,
            progress,
            composite,
            loyalty,
        }
    }
}

impl Default for AgentScorer {
    fn default() -> Self {
        Self::build(AgentScoreConfig::default())
    }
}

fn unique_stakers(summary: &StakeSummary) -> u32 {
    u32::try_from(summary.unique_staker_count()).unwrap_or(u32::MAX)
}

/// Days since registration, or since the earliest signal when unregistered.
fn entity_age_days(input: &AgentInput, now: DateTime<Utc>) -> f64 {
    input
        .created_at
        .or_else(|| input.signals.iter().map(|s| s.timestamp).min())
        .map_or(0.0, |since| age_days(since, now).max(0.0))
}
