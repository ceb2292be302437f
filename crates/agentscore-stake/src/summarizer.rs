//! Stake summarizer: vault positions → support/oppose totals and staker sets.

use tracing::debug;

use agentscore_core::models::{EntityStakes, Vault};
use agentscore_core::{StakeSide, StakeSummary, Wei};

use crate::predicates::classify_predicate;

/// Aggregate everything staked on an entity.
///
/// - The entity's own vault counts as direct support.
/// - A triple with a support/oppose predicate adds its vault to that side and
///   its counter-vault, if any, to the other side.
/// - Triples with other predicates are ignored.
///
/// Amounts are summed as integers. Unparsable share strings count as zero,
/// and a position with zero shares does not make its holder a staker.
///
/// # Examples
///
/// ```
/// use agentscore_core::models::{EntityStakes, Position, Triple, Vault};
/// use agentscore_stake::summarize;
///
/// let stakes = EntityStakes {
///     vault: Vault::new(vec![Position::new("0xAbC", "700")]),
///     triples: vec![Triple::new(
///         "reported_for_spam",
///         Vault::new(vec![Position::new("0xdef", "300")]),
///     )],
/// };
/// let summary = summarize(&stakes);
/// assert_eq!(summary.support_stake_wei.value(), 700);
/// assert_eq!(summary.oppose_stake_wei.value(), 300);
/// assert!(summary.support_staker_addresses.contains("0xabc"));
/// ```
pub fn summarize(stakes: &EntityStakes) -> StakeSummary {
    let mut summary = StakeSummary::default();

    accumulate(&mut summary, StakeSide::Support, &stakes.vault);

    for triple in &stakes.triples {
        let Some(side) = classify_predicate(&triple.predicate_label) else {
            debug!(predicate = %triple.predicate_label, "ignoring unclassified predicate");
            continue;
        };
        accumulate(&mut summary, side, &triple.vault);
        if let Some(counter) = &triple.counter_vault {
            accumulate(&mut summary, side.opposite(), counter);
        }
    }

    debug!(
        support_wei = %summary.support_stake_wei,
        oppose_wei = %summary.oppose_stake_wei,
        support_stakers = summary.support_staker_count(),
        oppose_stakers = summary.oppose_staker_count(),
        "stake summary computed"
    );

    summary
}

fn accumulate(summary: &mut StakeSummary, side: StakeSide, vault: &Vault) {
    for position in &vault.positions {
        let shares = Wei::parse_lossy(&position.shares);
        if shares.is_zero() {
            continue;
        }
        let address = position.account_id.trim().to_lowercase();
        match side {
            StakeSide::Support => {
                summary.support_stake_wei += shares;
                if !address.is_empty() {
                    summary.support_staker_addresses.insert(address);
                }
            }
            StakeSide::Oppose => {
                summary.oppose_stake_wei += shares;
                if !address.is_empty() {
                    summary.oppose_staker_addresses.insert(address);
                }
            }
        }
    }
}
