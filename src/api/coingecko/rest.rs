use crate::api::MarketApi;
use crate::config::{Config, USER_AGENT};
use crate::error::{CoinWatchError, Result};
use crate::models::{parse_price_table, Asset, PriceTable};
use log::{debug, error, info};
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Instant;

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// The two CoinGecko endpoints the dashboard reads.
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<'a> {
    Markets { per_page: u32 },
    SimplePrice { ids: &'a [String], extended: bool },
}

impl Endpoint<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Markets { .. } => "coins/markets",
            Endpoint::SimplePrice { .. } => "simple/price",
        }
    }

    pub fn url(&self, base: &str) -> String {
        match self {
            Endpoint::Markets { per_page } => format!(
                "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=false",
                base, per_page
            ),
            Endpoint::SimplePrice { ids, extended } => {
                let mut url = format!(
                    "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
                    base,
                    ids.join(",")
                );
                if *extended {
                    url.push_str("&include_24hr_vol=true&include_market_cap=true");
                }
                url
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: reqwest::Client,
    base_url: String,
    per_page: u32,
    extended_quotes: bool,
}

impl CoinGeckoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| CoinWatchError::ConfigError(format!("invalid API key: {}", e)))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        info!("Using CoinGecko API at {}", config.api_url);

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_url.clone(),
            per_page: config.per_page,
            extended_quotes: config.extended_quotes,
        })
    }

    /// Single GET, no retry. Non-2xx statuses come back as `StatusError`.
    async fn get(&self, endpoint: Endpoint<'_>) -> Result<String> {
        let url = endpoint.url(&self.base_url);
        let started = Instant::now();
        debug!("GET {}", url);

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", endpoint.name(), e);
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("{} responded with {}", endpoint.name(), status);
            return Err(CoinWatchError::StatusError {
                endpoint: endpoint.name(),
                status,
            });
        }

        let body = response.text().await?;
        debug!(
            "{} answered in {} ms ({} bytes)",
            endpoint.name(),
            started.elapsed().as_millis(),
            body.len()
        );
        Ok(body)
    }
}

impl MarketApi for CoinGeckoClient {
    async fn fetch_markets(&self) -> Result<Vec<Asset>> {
        let body = self
            .get(Endpoint::Markets {
                per_page: self.per_page,
            })
            .await?;
        let assets: Vec<Asset> = serde_json::from_str(&body)?;
        info!("Fetched {} assets from the market list", assets.len());
        Ok(assets)
    }

    async fn fetch_prices(&self, ids: &[String]) -> Result<PriceTable> {
        if ids.is_empty() {
            return Ok(PriceTable::new());
        }

        let body = self
            .get(Endpoint::SimplePrice {
                ids,
                extended: self.extended_quotes,
            })
            .await?;
        let table = parse_price_table(&body)?;
        debug!("Fetched {} of {} requested prices", table.len(), ids.len());
        Ok(table)
    }
}
