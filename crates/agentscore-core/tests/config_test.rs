use agentscore_core::config::*;
use agentscore_core::errors::{AgentScoreError, ConfigError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = AgentScoreConfig::from_toml("").unwrap();

    assert_eq!(config.network, Network::Testnet);
    assert!(config.scoring.liquidity_scale.is_none());
    assert_eq!(config.liquidity_scale(), 10.0);
    assert_eq!(config.scoring.momentum_scale, 50.0);
    assert_eq!(config.scoring.min_momentum_floor, 2.0);
    assert_eq!(config.scoring.max_momentum_cap, 15.0);

    assert_eq!(config.decay.freshness_window_days, 7.0);
    assert_eq!(config.decay.freshness_bonus, 1.5);
    assert_eq!(config.decay.half_life_days, 90.0);
    assert_eq!(config.decay.min_weight, 0.01);

    assert!((config.composite.weight_sum() - 1.0).abs() < 1e-12);
    assert_eq!(config.composite.staker_saturation, 20);
    assert_eq!(config.composite.whale_threshold, 0.20);

    assert_eq!(config.curve.protocol_fee, 0.05);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
network = "mainnet"

[scoring]
max_momentum_cap = 20.0

[curve]
slope = 0.002
"#;
    let config = AgentScoreConfig::from_toml(toml).unwrap();
    assert_eq!(config.network, Network::Mainnet);
    assert_eq!(config.scoring.max_momentum_cap, 20.0);
    assert_eq!(config.curve.slope, 0.002);
    // Non-overridden fields keep defaults
    assert_eq!(config.scoring.momentum_scale, 50.0);
    assert_eq!(config.curve.base_price, 0.01);
}

#[test]
fn mainnet_liquidity_scale_is_500x_testnet() {
    let testnet = AgentScoreConfig::for_network(Network::Testnet).liquidity_scale();
    let mainnet = AgentScoreConfig::for_network(Network::Mainnet).liquidity_scale();
    assert!((mainnet / testnet - 500.0).abs() < 1e-9);
}

#[test]
fn explicit_liquidity_scale_overrides_network() {
    let config = AgentScoreConfig::from_toml(
        r#"
network = "mainnet"
[scoring]
liquidity_scale = 42.0
"#,
    )
    .unwrap();
    assert_eq!(config.liquidity_scale(), 42.0);
}

#[test]
fn weights_not_summing_to_one_are_rejected() {
    let err = AgentScoreConfig::from_toml(
        r#"
[composite]
signal_weight = 0.5
"#,
    )
    .unwrap_err();
    match err {
        AgentScoreError::ConfigError(ConfigError::InvalidValue { field, .. }) => {
            assert_eq!(field, "composite weights");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_positive_liquidity_scale_is_rejected() {
    let result = AgentScoreConfig::from_toml("[scoring]\nliquidity_scale = 0.0\n");
    assert!(result.is_err());
}

#[test]
fn fee_of_one_is_rejected() {
    let result = AgentScoreConfig::from_toml("[curve]\nprotocol_fee = 1.0\n");
    assert!(result.is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = AgentScoreConfig::from_toml("network = [").unwrap_err();
    assert!(matches!(
        err,
        AgentScoreError::ConfigError(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AgentScoreConfig::from_file("/nonexistent/agentscore.toml").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("/nonexistent/agentscore.toml"));
}

#[test]
fn config_survives_toml_round_trip() {
    let config = AgentScoreConfig::for_network(Network::Mainnet);
    let text = config.to_toml().unwrap();
    let parsed = AgentScoreConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.network, Network::Mainnet);
    assert_eq!(parsed.curve.slope, config.curve.slope);
}
