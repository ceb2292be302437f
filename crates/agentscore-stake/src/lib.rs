//! # agentscore-stake
//!
//! Turns raw indexer data into the inputs of the score engine:
//! support/oppose totals with staker sets ([`summarize`]) and recent
//! buy/sell flow ([`snapshot_from_events`]).

pub mod flow;
pub mod predicates;
pub mod summarizer;

pub use flow::snapshot_from_events;
pub use predicates::classify_predicate;
pub use summarizer::summarize;
