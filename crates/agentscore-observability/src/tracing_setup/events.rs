//! Structured log events for score lifecycle milestones.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

use agentscore_core::models::{Tier, TrustLevel};

/// Log a computed trust score.
pub fn score_computed(score: u8, level: TrustLevel, confidence: f64, momentum: f64) {
    tracing::info!(
        event = "score_computed",
        score = score,
        level = %level,
        confidence = confidence,
        momentum = momentum,
        "trust score computed"
    );
}

/// Log a tier assignment.
pub fn tier_assigned(tier: Tier, next_tier: Option<Tier>, overall_percent: u8) {
    tracing::info!(
        event = "tier_assigned",
        tier = %tier,
        next_tier = ?next_tier,
        overall_percent = overall_percent,
        "tier assigned"
    );
}

/// Log a throttled whale exit.
pub fn exit_limited(ownership_percent: f64, max_sell_shares: f64) {
    tracing::warn!(
        event = "exit_limited",
        ownership_percent = ownership_percent,
        max_sell_shares = max_sell_shares,
        "exit limited"
    );
}

/// Log a finished agent report.
pub fn report_built(score: u8, tier: Tier, composite_score: f64, signals: usize) {
    tracing::info!(
        event = "report_built",
        score = score,
        tier = %tier,
        composite_score = composite_score,
        signals = signals,
        "agent report built"
    );
}
