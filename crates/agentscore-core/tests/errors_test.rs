use agentscore_core::errors::*;

#[test]
fn invalid_value_carries_field_and_reason() {
    let err = ConfigError::InvalidValue {
        field: "decay.half_life_days".into(),
        reason: "must be positive, got 0".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("decay.half_life_days"));
    assert!(msg.contains("must be positive"));
}

#[test]
fn io_error_carries_path() {
    let err = ConfigError::Io {
        path: "agentscore.toml".into(),
        reason: "not found".into(),
    };
    assert!(err.to_string().contains("agentscore.toml"));
}

#[test]
fn config_error_converts_to_agentscore_error() {
    let err: AgentScoreError = ConfigError::Parse {
        reason: "bad".into(),
    }
    .into();
    assert!(matches!(err, AgentScoreError::ConfigError(_)));
    assert!(err.to_string().starts_with("configuration error"));
}
