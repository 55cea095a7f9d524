use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// One price reading for an asset. Lives for a single poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSnapshot {
    pub id: String,
    pub price: f64,
    pub change_24h: Option<f64>,
    pub volume_24h: Option<f64>,
    pub market_cap: Option<f64>,
}

/// Latest snapshots keyed by asset id.
pub type PriceTable = BTreeMap<String, PriceSnapshot>;

#[derive(Debug, Deserialize)]
struct Quote {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
    usd_24h_vol: Option<f64>,
    usd_market_cap: Option<f64>,
}

/// Decodes a `/simple/price` body. Ids the API returned without a usd
/// price are left out of the table.
pub fn parse_price_table(body: &str) -> serde_json::Result<PriceTable> {
    let quotes: HashMap<String, Quote> = serde_json::from_str(body)?;
    Ok(quotes
        .into_iter()
        .filter_map(|(id, quote)| {
            let price = quote.usd?;
            let snapshot = PriceSnapshot {
                id: id.clone(),
                price,
                change_24h: quote.usd_24h_change,
                volume_24h: quote.usd_24h_vol,
                market_cap: quote.usd_market_cap,
            };
            Some((id, snapshot))
        })
        .collect())
}
