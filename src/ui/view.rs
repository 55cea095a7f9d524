//! Pure projections from application state to what the dashboard shows.
//!
//! Nothing here touches the terminal; the [`Screen`](super::screen::Screen)
//! stores these values and the dashboard draws them.

use crate::models::{Asset, PriceTable};
use crate::store::{AlertBreach, AlertStore, AlertThresholds, Selection};
use num_format::{Locale, ToFormattedString};

pub const EMPTY_SELECTION_MESSAGE: &str = "No cryptocurrencies selected";

/// A market list row with its checkbox state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub rank: Option<u32>,
    /// Price reported with the market list, not the live poll.
    pub price: Option<String>,
    pub market_cap: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Unknown,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceCard {
    pub id: String,
    pub title: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
    pub volume: Option<String>,
    pub market_cap: Option<String>,
    pub alert: Option<String>,
    pub breach: Option<AlertBreach>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceView {
    /// Nothing selected.
    Empty,
    /// Selection exists but no poll has completed yet.
    Loading,
    Cards(Vec<PriceCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub id: String,
    pub upper: String,
    pub lower: String,
    pub current: Option<String>,
    pub breach: Option<AlertBreach>,
}

pub fn project_list(assets: &[Asset], selection: &Selection, filter: &str) -> Vec<ListEntry> {
    let needle = filter.trim().to_lowercase();
    assets
        .iter()
        .map(|asset| (asset, asset.label()))
        .filter(|(_, label)| needle.is_empty() || label.to_lowercase().contains(&needle))
        .map(|(asset, label)| ListEntry {
            id: asset.id.clone(),
            label,
            checked: selection.contains(&asset.id),
            rank: asset.market_cap_rank,
            price: asset.current_price.map(format_price),
            market_cap: asset.market_cap.map(format_compact),
        })
        .collect()
}

/// Cards follow selection order; selected ids missing from `prices` are skipped.
/// `prices` is `None` until a poll for the selection has completed.
pub fn project_prices(
    selection: &Selection,
    prices: Option<&PriceTable>,
    assets: &[Asset],
    alerts: &AlertStore,
) -> PriceView {
    if selection.is_empty() {
        return PriceView::Empty;
    }
    let Some(prices) = prices else {
        return PriceView::Loading;
    };

    let cards = selection
        .ids()
        .iter()
        .filter_map(|id| prices.get(id))
        .map(|snapshot| {
            let (change, trend) = format_change(snapshot.change_24h);
            let title = assets
                .iter()
                .find(|asset| asset.id == snapshot.id)
                .map(Asset::label)
                .unwrap_or_else(|| snapshot.id.clone());
            PriceCard {
                id: snapshot.id.clone(),
                title,
                price: format_price(snapshot.price),
                change,
                trend,
                volume: snapshot.volume_24h.map(format_compact),
                market_cap: snapshot.market_cap.map(format_compact),
                alert: alerts.get(&snapshot.id).map(|t| describe_thresholds(&t)),
                breach: alerts.evaluate(&snapshot.id, snapshot.price),
            }
        })
        .collect();

    PriceView::Cards(cards)
}

pub fn project_alerts(alerts: &AlertStore, prices: &PriceTable) -> Vec<AlertRow> {
    alerts
        .iter()
        .map(|(id, thresholds)| {
            let snapshot = prices.get(id);
            AlertRow {
                id: id.clone(),
                upper: thresholds.upper.map(format_price).unwrap_or_else(|| "-".into()),
                lower: thresholds.lower.map(format_price).unwrap_or_else(|| "-".into()),
                current: snapshot.map(|s| format_price(s.price)),
                breach: snapshot.and_then(|s| thresholds.check(s.price)),
            }
        })
        .collect()
}

fn describe_thresholds(thresholds: &AlertThresholds) -> String {
    let mut parts = Vec::new();
    if let Some(upper) = thresholds.upper {
        parts.push(format!("▲ {}", format_price(upper)));
    }
    if let Some(lower) = thresholds.lower {
        parts.push(format!("▼ {}", format_price(lower)));
    }
    parts.join("  ")
}

/// `$50,000.00` at or above one dollar, up to six decimals below.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "-".to_string();
    }
    if price.abs() >= 1.0 {
        let cents = (price * 100.0).round() as i64;
        let whole = cents / 100;
        let fraction = (cents % 100).abs();
        return format!("${}.{:02}", whole.to_formatted_string(&Locale::en), fraction);
    }

    let mut digits = format!("{:.6}", price);
    let point = digits.find('.').unwrap_or(digits.len());
    while digits.ends_with('0') && digits.len() - point > 3 {
        digits.pop();
    }
    format!("${}", digits)
}

/// Signed percentage; zero counts as positive.
pub fn format_change(change: Option<f64>) -> (String, Trend) {
    match change {
        Some(c) if c.is_finite() && c >= 0.0 => (format!("+{:.2}%", c.abs()), Trend::Positive),
        Some(c) if c.is_finite() => (format!("{:.2}%", c), Trend::Negative),
        _ => ("n/a".to_string(), Trend::Unknown),
    }
}

pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000_000_000.0 {
        format!("${:.2}T", value / 1_000_000_000_000.0)
    } else if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.2}K", value / 1_000.0)
    } else {
        format!("${:.2}", value)
    }
}
