//! # agentscore-observability
//!
//! Structured tracing for the AgentScore engine: subscriber setup for
//! binaries and embedders, named events for score lifecycle milestones, and
//! span macros. Library crates only emit through `tracing`; installing a
//! subscriber is left to the host.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
