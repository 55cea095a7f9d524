//! Application context: stores, persistence, market data and rendering,
//! wired together. All mutation happens on the task that owns the `App`;
//! network calls run on spawned tasks and report back as [`Message`]s.

use crate::api::MarketApi;
use crate::error::{CoinWatchError, Result};
use crate::export::{write_export, ExportDocument};
use crate::models::{Asset, PriceTable};
use crate::store::selection::Toggled;
use crate::store::{AlertStore, AlertThresholds, Selection, Storage, THEME_KEY};
use crate::ui::notifier::Toast;
use crate::ui::theme::Theme;
use crate::ui::view::{project_alerts, project_list, project_prices};
use crate::ui::Renderer;
use chrono::Local;
use log::{debug, error, info, warn};
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug)]
pub enum Message {
    Markets(Result<Vec<Asset>>),
    Prices {
        generation: u64,
        result: Result<PriceTable>,
    },
}

pub struct App<A, S, R> {
    api: A,
    storage: S,
    renderer: R,
    tx: UnboundedSender<Message>,
    export_dir: PathBuf,
    assets: Vec<Asset>,
    selection: Selection,
    alerts: AlertStore,
    theme: Theme,
    filter: String,
    prices: PriceTable,
    prices_loaded: bool,
    generation: u64,
}

impl<A: MarketApi, S: Storage, R: Renderer> App<A, S, R> {
    pub fn new(
        api: A,
        storage: S,
        renderer: R,
        tx: UnboundedSender<Message>,
        export_dir: PathBuf,
    ) -> Self {
        let selection = Selection::load(&storage);
        let alerts = AlertStore::load(&storage);
        let theme = match storage.load(THEME_KEY) {
            Ok(Some(name)) => Theme::parse(&name),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("{}", e);
                Theme::default()
            }
        };

        let mut app = Self {
            api,
            storage,
            renderer,
            tx,
            export_dir,
            assets: Vec::new(),
            selection,
            alerts,
            theme,
            filter: String::new(),
            prices: PriceTable::new(),
            prices_loaded: false,
            generation: 0,
        };
        app.renderer.apply_theme(theme);
        app.render_all();
        app
    }

    /// Initial load: market list plus a first price poll.
    pub fn start(&mut self) {
        self.load_markets();
        self.refresh_prices();
    }

    pub fn load_markets(&mut self) {
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.fetch_markets().await;
            if tx.send(Message::Markets(result)).is_err() {
                debug!("Dashboard gone; dropping market list");
            }
        });
    }

    /// Starts a price poll for the current selection. Any response to an
    /// earlier poll still in flight will be discarded.
    pub fn refresh_prices(&mut self) {
        self.generation += 1;
        if self.selection.is_empty() {
            self.prices.clear();
            self.prices_loaded = false;
            self.render_prices();
            self.render_alerts();
            return;
        }

        let generation = self.generation;
        let ids = self.selection.ids().to_vec();
        let api = self.api.clone();
        let tx = self.tx.clone();
        debug!("Price poll #{} for {} assets", generation, ids.len());
        tokio::spawn(async move {
            let result = api.fetch_prices(&ids).await;
            if tx.send(Message::Prices { generation, result }).is_err() {
                debug!("Dashboard gone; dropping price poll #{}", generation);
            }
        });
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::Markets(result) => self.apply_markets(result),
            Message::Prices { generation, result } => self.apply_prices(generation, result),
        }
    }

    fn apply_markets(&mut self, result: Result<Vec<Asset>>) {
        match result {
            Ok(assets) => {
                self.assets = assets;
                self.render_list();
                self.render_prices();
            }
            Err(e) => {
                error!("Error fetching market list: {}", e);
                self.renderer
                    .show_toast(Toast::error(format!("Could not load market list: {}", e)));
            }
        }
    }

    fn apply_prices(&mut self, generation: u64, result: Result<PriceTable>) {
        if generation != self.generation {
            debug!(
                "Discarding stale price poll #{} (latest #{})",
                generation, self.generation
            );
            return;
        }

        match result {
            Ok(table) => {
                if table.is_empty() {
                    warn!("Price poll #{} returned no data", generation);
                }
                self.prices = table;
                self.prices_loaded = true;
                self.render_prices();
                self.render_alerts();
                self.check_alerts();
            }
            Err(e) => {
                error!("Error fetching prices: {}", e);
                self.renderer
                    .show_toast(Toast::error(format!("Could not fetch prices: {}", e)));
            }
        }
    }

    fn check_alerts(&mut self) {
        for id in self.selection.ids() {
            let Some(snapshot) = self.prices.get(id) else {
                continue;
            };
            if let Some(breach) = self.alerts.evaluate(id, snapshot.price) {
                let message = breach.describe(&display_name(&self.assets, id), snapshot.price);
                info!("ALERT: {}", message);
                self.renderer.show_toast(Toast::warning(message.clone()));
                self.renderer.show_notification("Price alert", &message);
            }
        }
    }

    pub fn add_selection(&mut self, id: &str) {
        match self.selection.add(id, &mut self.storage) {
            Ok(true) => self.renderer.show_toast(Toast::success(format!(
                "Added {} to your watch-list",
                display_name(&self.assets, id)
            ))),
            Ok(false) => return,
            Err(e) => self.report_storage_error(e),
        }
        self.after_selection_change();
    }

    pub fn remove_selection(&mut self, id: &str) {
        match self.selection.remove(id, &mut self.storage) {
            Ok(true) => self.renderer.show_toast(Toast::info(format!(
                "Removed {} from your watch-list",
                display_name(&self.assets, id)
            ))),
            Ok(false) => return,
            Err(e) => self.report_storage_error(e),
        }
        self.after_selection_change();
    }

    /// Checkbox handler.
    pub fn toggle_selection(&mut self, id: &str) {
        let name = display_name(&self.assets, id);
        match self.selection.toggle(id, &mut self.storage) {
            Ok(Toggled::Added) => self
                .renderer
                .show_toast(Toast::success(format!("Added {} to your watch-list", name))),
            Ok(Toggled::Removed) => self
                .renderer
                .show_toast(Toast::info(format!("Removed {} from your watch-list", name))),
            Err(e) => self.report_storage_error(e),
        }
        self.after_selection_change();
    }

    fn after_selection_change(&mut self) {
        self.render_list();
        self.render_prices();
        self.refresh_prices();
    }

    pub fn alert_for(&self, id: &str) -> Option<AlertThresholds> {
        self.alerts.get(id)
    }

    /// Saves thresholds typed into the alert form. Returns `false` when the
    /// input was ignored: the asset is not watched, a field is non-numeric,
    /// or both fields are blank.
    pub fn submit_alert(&mut self, id: &str, upper: &str, lower: &str) -> bool {
        if !self.selection.contains(id) {
            debug!("Ignoring alert for unwatched {}", id);
            self.renderer.show_toast(Toast::warning(format!(
                "Add {} to your watch-list before setting an alert",
                display_name(&self.assets, id)
            )));
            return false;
        }
        let (upper, lower) = match (parse_bound(upper), parse_bound(lower)) {
            (Some(upper), Some(lower)) if upper.is_some() || lower.is_some() => (upper, lower),
            _ => {
                debug!("Ignoring alert input for {}", id);
                return false;
            }
        };

        match self.alerts.set(id, upper, lower, &mut self.storage) {
            Ok(()) => self.renderer.show_toast(Toast::success(format!(
                "Alert saved for {}",
                display_name(&self.assets, id)
            ))),
            Err(e) => self.report_storage_error(e),
        }
        self.render_prices();
        self.render_alerts();
        true
    }

    pub fn clear_alert(&mut self, id: &str) {
        match self.alerts.remove(id, &mut self.storage) {
            Ok(true) => self.renderer.show_toast(Toast::info(format!(
                "Alert removed for {}",
                display_name(&self.assets, id)
            ))),
            Ok(false) => return,
            Err(e) => self.report_storage_error(e),
        }
        self.render_prices();
        self.render_alerts();
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.render_list();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.save(THEME_KEY, self.theme.as_str()) {
            self.report_storage_error(e);
        }
        self.renderer.apply_theme(self.theme);
    }

    pub fn export_document(&self) -> ExportDocument {
        ExportDocument {
            selected_cryptos: self.selection.ids().to_vec(),
            price_alerts: self.alerts.as_map().clone(),
        }
    }

    pub fn export(&mut self) -> Option<PathBuf> {
        match write_export(&self.export_document(), &self.export_dir, Local::now()) {
            Ok(path) => {
                self.renderer
                    .show_toast(Toast::success(format!("Exported to {}", path.display())));
                Some(path)
            }
            Err(e) => {
                error!("Export failed: {}", e);
                self.renderer
                    .show_toast(Toast::error(format!("Export failed: {}", e)));
                None
            }
        }
    }

    fn report_storage_error(&mut self, e: CoinWatchError) {
        error!("{}", e);
        self.renderer
            .show_toast(Toast::error(format!("Could not save settings: {}", e)));
    }

    fn render_list(&mut self) {
        self.renderer
            .render_list(project_list(&self.assets, &self.selection, &self.filter));
    }

    fn render_prices(&mut self) {
        self.renderer.render_prices(project_prices(
            &self.selection,
            self.prices_loaded.then_some(&self.prices),
            &self.assets,
            &self.alerts,
        ));
    }

    fn render_alerts(&mut self) {
        self.renderer
            .render_alerts(project_alerts(&self.alerts, &self.prices));
    }

    fn render_all(&mut self) {
        self.render_list();
        self.render_prices();
        self.render_alerts();
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn alerts(&self) -> &AlertStore {
        &self.alerts
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn price_generation(&self) -> u64 {
        self.generation
    }
}

fn display_name(assets: &[Asset], id: &str) -> String {
    assets
        .iter()
        .find(|asset| asset.id == id)
        .map(|asset| asset.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Blank → `Some(None)`; a non-negative number, optionally written with
/// `$` and thousands separators → `Some(Some(n))`; anything else → `None`.
fn parse_bound(input: &str) -> Option<Option<f64>> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();
    if cleaned.is_empty() {
        return Some(None);
    }
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(Some(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AlertBreach, MemoryStorage, ALERTS_KEY, SELECTED_KEY};
    use crate::testing::{snapshot, unavailable, FakeApi, RecordingRenderer};
    use crate::ui::notifier::ToastLevel;
    use crate::ui::view::{PriceCard, PriceView, Trend, EMPTY_SELECTION_MESSAGE};
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    type TestApp = App<FakeApi, MemoryStorage, RecordingRenderer>;

    fn app_with(api: FakeApi, storage: MemoryStorage) -> (TestApp, UnboundedReceiver<Message>) {
        let (tx, rx) = unbounded_channel();
        let app = App::new(
            api,
            storage,
            RecordingRenderer::default(),
            tx,
            std::env::temp_dir(),
        );
        (app, rx)
    }

    async fn pump(app: &mut TestApp, rx: &mut UnboundedReceiver<Message>) {
        let message = rx.recv().await.expect("channel closed");
        app.handle(message);
    }

    fn cards(app: &TestApp) -> Vec<PriceCard> {
        match app.renderer().prices.clone() {
            Some(PriceView::Cards(cards)) => cards,
            other => panic!("expected price cards, got {:?}", other),
        }
    }

    fn last_toast(app: &TestApp) -> &Toast {
        app.renderer().toasts.last().expect("no toast shown")
    }

    #[tokio::test]
    async fn startup_with_empty_selection_shows_empty_state_and_market_list() {
        let (mut app, mut rx) = app_with(FakeApi::market(50000.0), MemoryStorage::new());
        app.start();
        pump(&mut app, &mut rx).await;

        assert_eq!(app.renderer().prices, Some(PriceView::Empty));
        assert_eq!(EMPTY_SELECTION_MESSAGE, "No cryptocurrencies selected");
        let labels: Vec<&str> = app.renderer().list.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Bitcoin (BTC)", "Ethereum (ETH)"]);
        assert!(app.renderer().list.iter().all(|e| !e.checked));
    }

    #[tokio::test]
    async fn selecting_bitcoin_renders_its_card() {
        let (mut app, mut rx) = app_with(FakeApi::market(50000.0), MemoryStorage::new());
        app.start();
        pump(&mut app, &mut rx).await;

        app.toggle_selection("bitcoin");
        assert_eq!(last_toast(&app).level, ToastLevel::Success);
        assert!(app.renderer().list[0].checked);
        assert_eq!(app.renderer().prices, Some(PriceView::Loading));

        pump(&mut app, &mut rx).await;
        let cards = cards(&app);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Bitcoin (BTC)");
        assert_eq!(cards[0].price, "$50,000.00");
        assert_eq!(cards[0].change, "+2.50%");
        assert_eq!(cards[0].trend, Trend::Positive);

        assert_eq!(
            app.storage().load(SELECTED_KEY).unwrap().as_deref(),
            Some(r#"["bitcoin"]"#)
        );
    }

    #[tokio::test]
    async fn deselecting_last_asset_returns_to_empty_state() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, mut rx) = app_with(FakeApi::market(50000.0), storage);
        app.refresh_prices();
        pump(&mut app, &mut rx).await;
        assert_eq!(cards(&app).len(), 1);

        app.toggle_selection("bitcoin");
        assert_eq!(app.renderer().prices, Some(PriceView::Empty));
        assert!(app.selection().is_empty());
        assert_eq!(last_toast(&app).level, ToastLevel::Info);
    }

    #[tokio::test]
    async fn breached_alert_raises_toast_and_notification() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, mut rx) = app_with(FakeApi::market(40.0), storage);
        assert!(app.submit_alert("bitcoin", "100", "50"));

        app.refresh_prices();
        pump(&mut app, &mut rx).await;

        let toast = last_toast(&app);
        assert_eq!(toast.level, ToastLevel::Warning);
        assert!(toast.message.contains("lower alert: 50"));
        assert_eq!(app.renderer().notifications.len(), 1);
        assert_eq!(app.renderer().notifications[0].0, "Price alert");
        assert_eq!(cards(&app)[0].breach, Some(AlertBreach::Lower(50.0)));
    }

    #[tokio::test]
    async fn price_inside_bounds_stays_quiet() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, mut rx) = app_with(FakeApi::market(75.0), storage);
        app.submit_alert("bitcoin", "100", "50");
        let toasts_before = app.renderer().toasts.len();

        app.refresh_prices();
        pump(&mut app, &mut rx).await;

        assert_eq!(app.renderer().toasts.len(), toasts_before);
        assert!(app.renderer().notifications.is_empty());
    }

    #[tokio::test]
    async fn malformed_alert_input_is_ignored() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, _rx) = app_with(FakeApi::market(1.0), storage);

        assert!(!app.submit_alert("bitcoin", "abc", ""));
        assert!(!app.submit_alert("bitcoin", "100", "fifty"));
        assert!(!app.submit_alert("bitcoin", "  ", ""));
        assert!(!app.submit_alert("bitcoin", "-5", ""));

        assert!(app.alerts().is_empty());
        assert!(app.renderer().toasts.is_empty());
        assert_eq!(app.storage().load(ALERTS_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn alert_input_accepts_currency_formatting_and_one_side() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, _rx) = app_with(FakeApi::market(1.0), storage);

        assert!(app.submit_alert("bitcoin", "$100,000", ""));
        assert_eq!(
            app.alert_for("bitcoin"),
            Some(AlertThresholds::new(Some(100_000.0), None))
        );
        assert_eq!(app.renderer().alerts.len(), 1);
    }

    #[tokio::test]
    async fn alert_on_unwatched_asset_is_rejected() {
        let (mut app, _rx) = app_with(FakeApi::market(1.0), MemoryStorage::new());

        assert!(!app.submit_alert("ethereum", "100", ""));
        assert!(app.alert_for("ethereum").is_none());
        assert!(app.renderer().alerts.is_empty());
        assert_eq!(app.storage().load(ALERTS_KEY).unwrap(), None);
        assert_eq!(last_toast(&app).level, ToastLevel::Warning);

        app.add_selection("ethereum");
        assert!(app.submit_alert("ethereum", "100", ""));
        assert_eq!(
            app.alert_for("ethereum"),
            Some(AlertThresholds::new(Some(100.0), None))
        );
    }

    #[tokio::test]
    async fn empty_price_reply_is_not_left_loading() {
        let (mut app, mut rx) = app_with(FakeApi::market(1.0), MemoryStorage::new());
        app.add_selection("delisted-coin");
        assert_eq!(app.renderer().prices, Some(PriceView::Loading));

        pump(&mut app, &mut rx).await;
        assert!(cards(&app).is_empty());

        app.remove_selection("delisted-coin");
        app.add_selection("bitcoin");
        assert_eq!(app.renderer().prices, Some(PriceView::Loading));
    }

    #[tokio::test]
    async fn stale_price_response_is_discarded() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, _rx) = app_with(FakeApi::market(1.0), storage);

        app.refresh_prices();
        let stale = app.price_generation();
        app.refresh_prices();
        let fresh = app.price_generation();

        let mut newer = PriceTable::new();
        newer.insert("bitcoin".into(), snapshot("bitcoin", 61000.0, 1.0));
        let mut older = PriceTable::new();
        older.insert("bitcoin".into(), snapshot("bitcoin", 59000.0, 1.0));

        app.handle(Message::Prices {
            generation: fresh,
            result: Ok(newer),
        });
        app.handle(Message::Prices {
            generation: stale,
            result: Ok(older),
        });

        assert_eq!(cards(&app)[0].price, "$61,000.00");
    }

    #[tokio::test]
    async fn failed_poll_keeps_previous_prices() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, mut rx) = app_with(FakeApi::market(50000.0), storage);
        app.refresh_prices();
        pump(&mut app, &mut rx).await;

        app.refresh_prices();
        app.handle(Message::Prices {
            generation: app.price_generation(),
            result: Err(unavailable("simple/price")),
        });

        assert_eq!(cards(&app)[0].price, "$50,000.00");
        let toast = last_toast(&app);
        assert_eq!(toast.level, ToastLevel::Error);
        assert!(toast.message.contains("429"));
    }

    #[tokio::test]
    async fn failed_market_list_reports_error() {
        let (mut app, mut rx) = app_with(FakeApi::failing(), MemoryStorage::new());
        app.load_markets();
        pump(&mut app, &mut rx).await;

        assert!(app.renderer().list.is_empty());
        assert_eq!(last_toast(&app).level, ToastLevel::Error);
    }

    #[tokio::test]
    async fn storage_failure_is_reported_but_selection_changes() {
        let (mut app, _rx) = app_with(FakeApi::market(1.0), MemoryStorage::read_only());
        app.add_selection("bitcoin");

        assert!(app.selection().contains("bitcoin"));
        assert_eq!(last_toast(&app).level, ToastLevel::Error);
    }

    #[tokio::test]
    async fn add_then_remove_round_trips() {
        let (mut app, _rx) = app_with(FakeApi::market(1.0), MemoryStorage::new());
        app.add_selection("ethereum");
        let before = app.selection().clone();

        app.add_selection("bitcoin");
        app.add_selection("bitcoin");
        app.remove_selection("bitcoin");

        assert_eq!(app.selection(), &before);
    }

    #[tokio::test]
    async fn alerts_survive_deselection() {
        let storage = MemoryStorage::new().with_value(SELECTED_KEY, r#"["bitcoin"]"#);
        let (mut app, _rx) = app_with(FakeApi::market(1.0), storage);
        app.submit_alert("bitcoin", "", "10");
        app.remove_selection("bitcoin");

        assert!(app.alert_for("bitcoin").is_some());
        assert_eq!(app.renderer().alerts[0].id, "bitcoin");

        app.clear_alert("bitcoin");
        assert!(app.alert_for("bitcoin").is_none());
    }

    #[tokio::test]
    async fn state_reloads_from_storage() {
        let (mut app, _rx) = app_with(FakeApi::market(1.0), MemoryStorage::new());
        app.add_selection("ethereum");
        app.add_selection("bitcoin");
        app.submit_alert("bitcoin", "70000", "40000");
        app.toggle_theme();
        let storage = app.storage().clone();

        let (reloaded, _rx) = app_with(FakeApi::market(1.0), storage);
        assert_eq!(reloaded.selection(), app.selection());
        assert_eq!(reloaded.alerts(), app.alerts());
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.renderer().theme, Some(Theme::Light));
    }

    #[tokio::test]
    async fn filter_narrows_market_list() {
        let (mut app, mut rx) = app_with(FakeApi::market(1.0), MemoryStorage::new());
        app.load_markets();
        pump(&mut app, &mut rx).await;

        app.set_filter("ETH");
        assert_eq!(app.renderer().list.len(), 1);
        assert_eq!(app.renderer().list[0].id, "ethereum");

        app.set_filter("");
        assert_eq!(app.renderer().list.len(), 2);
    }

    #[tokio::test]
    async fn export_matches_current_state() {
        let dir = std::env::temp_dir().join(format!("coinwatch-export-test-{}", std::process::id()));
        let (tx, _rx) = unbounded_channel();
        let mut app = App::new(
            FakeApi::market(1.0),
            MemoryStorage::new(),
            RecordingRenderer::default(),
            tx,
            dir.clone(),
        );
        app.add_selection("bitcoin");
        app.add_selection("ethereum");
        app.submit_alert("bitcoin", "100", "50");
        app.submit_alert("ethereum", "", "2000");

        let path = app.export().expect("export failed");
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(
            written,
            serde_json::json!({
                "selectedCryptos": ["bitcoin", "ethereum"],
                "priceAlerts": {
                    "bitcoin": {"upper": 100.0, "lower": 50.0},
                    "ethereum": {"upper": null, "lower": 2000.0}
                }
            })
        );
        let document: ExportDocument = serde_json::from_value(written).unwrap();
        assert_eq!(document, app.export_document());

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn parse_bound_cases() {
        assert_eq!(parse_bound(""), Some(None));
        assert_eq!(parse_bound(" 42.5 "), Some(Some(42.5)));
        assert_eq!(parse_bound("$1,250"), Some(Some(1250.0)));
        assert_eq!(parse_bound("inf"), None);
        assert_eq!(parse_bound("12abc"), None);
    }
}
