// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_TESTNET_LIQUIDITY_SCALE: f64 = 10.0; // tTRUST units
pub const DEFAULT_MAINNET_LIQUIDITY_SCALE: f64 = 5_000.0; // 500× testnet
pub const DEFAULT_MOMENTUM_SCALE: f64 = 50.0;
pub const DEFAULT_MIN_MOMENTUM_FLOOR: f64 = 2.0;
pub const DEFAULT_MAX_MOMENTUM_CAP: f64 = 15.0;

// --- Decay ---
pub const DEFAULT_FRESHNESS_WINDOW_DAYS: f64 = 7.0;
pub const DEFAULT_FRESHNESS_BONUS: f64 = 1.5;
pub const DEFAULT_HALF_LIFE_DAYS: f64 = 90.0;
pub const DEFAULT_MIN_WEIGHT: f64 = 0.01;

// --- Composite ---
pub const DEFAULT_SIGNAL_WEIGHT: f64 = 0.40;
pub const DEFAULT_STAKER_WEIGHT: f64 = 0.20;
pub const DEFAULT_STABILITY_WEIGHT: f64 = 0.25;
pub const DEFAULT_PRICE_WEIGHT: f64 = 0.15;
pub const DEFAULT_STAKER_SATURATION: u32 = 20;
pub const DEFAULT_STABILITY_SATURATION_DAYS: f64 = 30.0;
pub const DEFAULT_STABLE_MIN_DAYS: f64 = 7.0;
pub const DEFAULT_WHALE_THRESHOLD: f64 = 0.20;
pub const DEFAULT_WHALE_MAX_SELL_FRACTION: f64 = 0.5;

// --- Bonding curve ---
pub const DEFAULT_BASE_PRICE: f64 = 0.01; // tTRUST per share at zero supply
pub const DEFAULT_SLOPE: f64 = 0.001; // price increase per share of supply
pub const DEFAULT_PROTOCOL_FEE: f64 = 0.05;
pub const DEFAULT_MIN_CURVE_SPAN: f64 = 20.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
