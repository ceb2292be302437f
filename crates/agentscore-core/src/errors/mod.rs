//! Error types.
//!
//! Score computation itself never fails: malformed input collapses to neutral
//! defaults. Errors only surface at the configuration boundary.

mod config_error;

pub use config_error::ConfigError;

/// Top-level error for the AgentScore workspace.
#[derive(Debug, thiserror::Error)]
pub enum AgentScoreError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    SerializationError { reason: String },
}

/// Convenience alias used across the workspace.
pub type AgentScoreResult<T> = Result<T, AgentScoreError>;
