use serde::Deserialize;
use std::collections::HashMap;

pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Response of `GET /bitcoin/dashboards/address/{address}`. The payload is
/// keyed by the queried address; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct AddressDashboard {
    pub data: HashMap<String, AddressData>,
    pub context: ApiContext,
}

#[derive(Debug, Deserialize)]
pub struct AddressData {
    #[serde(default)]
    pub transactions: Vec<TransactionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEntry {
    pub hash: String,
    /// Net effect of the transaction on the address, in satoshis. Positive
    /// means the address received funds.
    pub balance_change: i64,
}

#[derive(Debug, Deserialize)]
pub struct ApiContext {
    pub market_price_usd: f64,
}

impl TransactionEntry {
    pub fn amount_btc(&self) -> f64 {
        self.balance_change as f64 / SATS_PER_BTC
    }
}
