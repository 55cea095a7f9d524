use clap::Parser;
use std::path::PathBuf;

/// Terminal watch-list for cryptocurrency prices with threshold alerts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the CoinGecko v3 API.
    #[arg(long, env = "COINGECKO_API_URL")]
    pub api_url: Option<String>,

    /// Demo API key, sent as `x-cg-demo-api-key`.
    #[arg(long, env = "COINGECKO_API_KEY")]
    pub api_key: Option<String>,

    /// Seconds between price polls.
    #[arg(long)]
    pub interval: Option<u64>,

    /// Number of assets requested for the market list.
    #[arg(long)]
    pub per_page: Option<u32>,

    /// HTTP request timeout in seconds. Requests never time out when unset.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Also request 24h volume and market cap with each price poll.
    #[arg(long)]
    pub extended_quotes: bool,

    /// Directory holding the persisted watch-list, alerts and theme.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep state in memory only. Nothing is read from or written to disk.
    #[arg(long)]
    pub ephemeral: bool,

    /// Directory exports are written to. Defaults to the current directory.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Seconds a toast stays on screen.
    #[arg(long)]
    pub toast_secs: Option<u64>,

    /// Never emit desktop notifications.
    #[arg(long)]
    pub no_desktop_notify: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,

    /// Write logs to stderr instead of the log file in the data directory.
    #[arg(long)]
    pub log_stderr: bool,
}
