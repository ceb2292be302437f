//! # agentscore
//!
//! One-call entry point to the AgentScore trust engine. [`AgentScorer`]
//! wires the stake summarizer, trust score engine, decay weighter, tier
//! classifier, composite calculator and bonding curve behind a single
//! validated [`AgentScoreConfig`].
//!
//! ```
//! use agentscore::{AgentInput, AgentScorer};
//! use agentscore_core::models::{Position, Tier, Vault};
//! use chrono::Utc;
//!
//! let scorer = AgentScorer::default();
//! let mut input = AgentInput::default();
//! input.stakes.vault = Vault::new(vec![Position::new("0xA11CE", "5000000000000000000")]);
//!
//! let report = scorer.report(&input, Utc::now());
//! assert_eq!(report.tier, Tier::Sandbox);
//! assert!(report.trust.score >= 50);
//! ```

pub mod report;
pub mod scorer;

pub use report::{AgentInput, AgentReport};
pub use scorer::AgentScorer;

pub use agentscore_core::{AgentScoreConfig, AgentScoreError, AgentScoreResult, Network};
