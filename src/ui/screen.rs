use super::notifier::{DesktopNotifier, Toast, ToastQueue};
use super::theme::Theme;
use super::view::{AlertRow, ListEntry, PriceView};
use super::Renderer;
use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Everything the dashboard draws, as last rendered by the app.
#[derive(Debug)]
pub struct Screen {
    pub list: Vec<ListEntry>,
    pub prices: PriceView,
    pub alerts: Vec<AlertRow>,
    pub theme: Theme,
    pub last_update: Option<DateTime<Local>>,
    toasts: ToastQueue,
    desktop: DesktopNotifier,
}

impl Screen {
    pub fn new(toast_duration: Duration, desktop: DesktopNotifier) -> Self {
        Self {
            list: Vec::new(),
            prices: PriceView::Empty,
            alerts: Vec::new(),
            theme: Theme::default(),
            last_update: None,
            toasts: ToastQueue::new(toast_duration),
            desktop,
        }
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn prune_toasts(&mut self, now: Instant) {
        self.toasts.prune(now);
    }
}

impl Renderer for Screen {
    fn render_list(&mut self, entries: Vec<ListEntry>) {
        self.list = entries;
    }

    fn render_prices(&mut self, view: PriceView) {
        if matches!(view, PriceView::Cards(_)) {
            self.last_update = Some(Local::now());
        }
        self.prices = view;
    }

    fn show_toast(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    fn show_notification(&mut self, title: &str, body: &str) {
        self.desktop.notify(title, body);
    }

    fn render_alerts(&mut self, rows: Vec<AlertRow>) {
        self.alerts = rows;
    }

    fn apply_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }
}
