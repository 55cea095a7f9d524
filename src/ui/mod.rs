pub mod dashboard;
pub mod notifier;
pub mod screen;
pub mod theme;
pub mod view;

use notifier::Toast;
use theme::Theme;
use view::{AlertRow, ListEntry, PriceView};

/// Output side of the application. Every call replaces what was shown before.
pub trait Renderer {
    fn render_list(&mut self, entries: Vec<ListEntry>);

    fn render_prices(&mut self, view: PriceView);

    fn show_toast(&mut self, toast: Toast);

    fn show_notification(&mut self, title: &str, body: &str);

    fn render_alerts(&mut self, _rows: Vec<AlertRow>) {}

    fn apply_theme(&mut self, _theme: Theme) {}
}
