use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Preview of a buy on the bonding curve. Amounts in whole token units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BuyQuote {
    pub amount_in: f64,
    pub fee: f64,
    /// Amount left for the curve after the fee.
    pub net_amount: f64,
    pub shares_out: f64,
    pub new_supply: f64,
    pub new_price: f64,
    pub average_price: f64,
    /// Price move caused by the buy, percent of the starting price.
    pub price_impact_percent: f64,
}

/// Preview of a sell on the bonding curve. Amounts in whole token units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SellQuote {
    /// Shares actually sold (clamped to supply).
    pub shares_in: f64,
    pub gross_proceeds: f64,
    pub fee: f64,
    pub net_proceeds: f64,
    pub new_supply: f64,
    pub new_price: f64,
    pub average_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CurvePoint {
    pub supply: f64,
    pub price: f64,
}
