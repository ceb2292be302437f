//! Stake records and per-entity aggregation inputs/outputs.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::wei::Wei;

/// Which way a stake points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum StakeSide {
    Support,
    Oppose,
}

impl StakeSide {
    pub fn opposite(self) -> Self {
        match self {
            Self::Support => Self::Oppose,
            Self::Oppose => Self::Support,
        }
    }
}

/// One staking action. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StakeRecord {
    pub side: StakeSide,
    #[ts(type = "string")]
    pub amount_wei: Wei,
    pub timestamp: DateTime<Utc>,
}

impl StakeRecord {
    pub fn new(side: StakeSide, amount_wei: Wei, timestamp: DateTime<Utc>) -> Self {
        Self {
            side,
            amount_wei,
            timestamp,
        }
    }

    pub fn support(amount_wei: Wei, timestamp: DateTime<Utc>) -> Self {
        Self::new(StakeSide::Support, amount_wei, timestamp)
    }

    pub fn oppose(amount_wei: Wei, timestamp: DateTime<Utc>) -> Self {
        Self::new(StakeSide::Oppose, amount_wei, timestamp)
    }
}

/// A staker's position in a vault, as the indexer returns it.
///
/// `shares` stays a raw string: the summarizer decides how to treat rows it
/// cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub account_id: String,
    pub shares: String,
}

impl Position {
    pub fn new(account_id: impl Into<String>, shares: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            shares: shares.into(),
        }
    }
}

/// Bonding-curve pool backing an atom or triple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vault {
    pub positions: Vec<Position>,
}

impl Vault {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }
}

/// A stakeable subject–predicate–object claim about the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Triple {
    pub predicate_label: String,
    #[serde(default)]
    pub vault: Vault,
    /// Stakes against the claim itself.
    #[serde(default)]
    pub counter_vault: Option<Vault>,
}

impl Triple {
    pub fn new(predicate_label: impl Into<String>, vault: Vault) -> Self {
        Self {
            predicate_label: predicate_label.into(),
            vault,
            counter_vault: None,
        }
    }

    pub fn with_counter_vault(mut self, counter_vault: Vault) -> Self {
        self.counter_vault = Some(counter_vault);
        self
    }
}

/// Everything staked on an entity: its own vault plus labeled claims about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityStakes {
    pub vault: Vault,
    pub triples: Vec<Triple>,
}

/// Support/oppose totals and staker sets for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StakeSummary {
    #[ts(type = "string")]
    pub support_stake_wei: Wei,
    #[ts(type = "string")]
    pub oppose_stake_wei: Wei,
    /// Lower-cased addresses.
    pub support_staker_addresses: BTreeSet<String>,
    /// Lower-cased addresses.
    pub oppose_staker_addresses: BTreeSet<String>,
}

impl StakeSummary {
    pub fn total_stake_wei(&self) -> Wei {
        self.support_stake_wei + self.oppose_stake_wei
    }

    pub fn support_staker_count(&self) -> usize {
        self.support_staker_addresses.len()
    }

    pub fn oppose_staker_count(&self) -> usize {
        self.oppose_staker_addresses.len()
    }

    /// Stakers on either side, counted once.
    pub fn unique_staker_count(&self) -> usize {
        self.support_staker_addresses
            .union(&self.oppose_staker_addresses)
            .count()
    }
}
