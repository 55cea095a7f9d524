//! In-memory stand-ins for the network and the terminal.

use crate::api::MarketApi;
use crate::error::{CoinWatchError, Result};
use crate::models::{Asset, PriceSnapshot, PriceTable};
use crate::ui::notifier::Toast;
use crate::ui::theme::Theme;
use crate::ui::view::{AlertRow, ListEntry, PriceView};
use crate::ui::Renderer;

#[derive(Clone, Default)]
pub struct FakeApi {
    pub assets: Vec<Asset>,
    pub prices: PriceTable,
    pub fail: bool,
}

impl FakeApi {
    /// Bitcoin at `bitcoin_price` (+2.5%) and Ethereum at 3000 (-1%).
    pub fn market(bitcoin_price: f64) -> Self {
        let mut prices = PriceTable::new();
        prices.insert("bitcoin".into(), snapshot("bitcoin", bitcoin_price, 2.5));
        prices.insert("ethereum".into(), snapshot("ethereum", 3000.0, -1.0));
        Self {
            assets: vec![
                asset("bitcoin", "Bitcoin", "btc"),
                asset("ethereum", "Ethereum", "eth"),
            ],
            prices,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl MarketApi for FakeApi {
    async fn fetch_markets(&self) -> Result<Vec<Asset>> {
        if self.fail {
            return Err(unavailable("coins/markets"));
        }
        Ok(self.assets.clone())
    }

    async fn fetch_prices(&self, ids: &[String]) -> Result<PriceTable> {
        if self.fail {
            return Err(unavailable("simple/price"));
        }
        Ok(self
            .prices
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(id, s)| (id.clone(), s.clone()))
            .collect())
    }
}

pub fn unavailable(endpoint: &'static str) -> CoinWatchError {
    CoinWatchError::StatusError {
        endpoint,
        status: reqwest::StatusCode::TOO_MANY_REQUESTS,
    }
}

#[derive(Default)]
pub struct RecordingRenderer {
    pub list: Vec<ListEntry>,
    pub prices: Option<PriceView>,
    pub alerts: Vec<AlertRow>,
    pub toasts: Vec<Toast>,
    pub notifications: Vec<(String, String)>,
    pub theme: Option<Theme>,
}

impl Renderer for RecordingRenderer {
    fn render_list(&mut self, entries: Vec<ListEntry>) {
        self.list = entries;
    }

    fn render_prices(&mut self, view: PriceView) {
        self.prices = Some(view);
    }

    fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn show_notification(&mut self, title: &str, body: &str) {
        self.notifications.push((title.to_string(), body.to_string()));
    }

    fn render_alerts(&mut self, rows: Vec<AlertRow>) {
        self.alerts = rows;
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = Some(theme);
    }
}

pub fn asset(id: &str, name: &str, symbol: &str) -> Asset {
    Asset {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        image: None,
        market_cap: None,
        market_cap_rank: None,
        current_price: None,
    }
}

pub fn snapshot(id: &str, price: f64, change: f64) -> PriceSnapshot {
    PriceSnapshot {
        id: id.to_string(),
        price,
        change_24h: Some(change),
        volume_24h: None,
        market_cap: None,
    }
}
