/// AgentScore engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of decimals of the staking token (tTRUST uses 18, like ETH).
pub const TOKEN_DECIMALS: u32 = 18;

/// Wei per whole token unit.
pub const WEI_PER_UNIT: u128 = 1_000_000_000_000_000_000;

/// Neutral score used whenever there is no signal to speak of.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Upper bound of every 0–100 score in the engine.
pub const MAX_SCORE: f64 = 100.0;

/// Seconds per day, for timestamp → age conversions.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
