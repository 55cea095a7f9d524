pub mod coingecko;

use crate::error::Result;
use crate::models::{Asset, PriceTable};
use std::future::Future;

/// Remote market data, one attempt per call.
pub trait MarketApi: Clone + Send + Sync + 'static {
    fn fetch_markets(&self) -> impl Future<Output = Result<Vec<Asset>>> + Send;

    fn fetch_prices(&self, ids: &[String]) -> impl Future<Output = Result<PriceTable>> + Send;
}
