use crate::cli::Cli;
use std::path::PathBuf;
use std::time::Duration;

pub const COINGECKO_API_URL: &str = "https://api.coingecko.com/api/v3";
pub const USER_AGENT: &str = concat!("coinwatch/", env!("CARGO_PKG_VERSION"));
pub const POLL_INTERVAL_SECS: u64 = 30;
pub const MARKET_PAGE_SIZE: u32 = 100;
pub const TOAST_SECS: u64 = 3;
pub const LOG_FILE_NAME: &str = "coinwatch.log";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_key: Option<String>,
    pub poll_interval: Duration,
    pub per_page: u32,
    pub request_timeout: Option<Duration>,
    pub extended_quotes: bool,
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub toast_duration: Duration,
    pub desktop_notifications: bool,
}

impl Config {
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: COINGECKO_API_URL.to_string(),
            api_key: None,
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            per_page: MARKET_PAGE_SIZE,
            request_timeout: None,
            extended_quotes: false,
            data_dir: default_data_dir(),
            export_dir: PathBuf::from("."),
            toast_duration: Duration::from_secs(TOAST_SECS),
            desktop_notifications: true,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        let defaults = Config::default();
        Self {
            api_url: cli
                .api_url
                .as_deref()
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            api_key: cli.api_key.clone().filter(|key| !key.is_empty()),
            // A zero interval would spin the poller.
            poll_interval: cli
                .interval
                .map(|secs| Duration::from_secs(secs.max(1)))
                .unwrap_or(defaults.poll_interval),
            per_page: cli.per_page.unwrap_or(defaults.per_page).clamp(1, 250),
            request_timeout: cli.timeout.map(Duration::from_secs),
            extended_quotes: cli.extended_quotes,
            data_dir: cli.data_dir.clone().unwrap_or(defaults.data_dir),
            export_dir: cli.export_dir.clone().unwrap_or(defaults.export_dir),
            toast_duration: cli
                .toast_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.toast_duration),
            desktop_notifications: !cli.no_desktop_notify,
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_default()
        .join("coinwatch")
}
