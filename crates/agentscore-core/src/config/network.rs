use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Deployment the engine is scoring for.
///
/// Stake magnitudes differ by orders of magnitude between the testnet
/// (faucet tTRUST) and production, so the liquidity scale τ follows the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Network {
    #[default]
    Testnet,
    Mainnet,
}
