use clap::Parser;
use coinwatch::api::coingecko::CoinGeckoClient;
use coinwatch::cli::Cli;
use coinwatch::config::Config;
use coinwatch::store::{FileStorage, MemoryStorage};
use coinwatch::ui::dashboard::Dashboard;
use env_logger::{Builder, Target};
use log::{info, LevelFilter};
use std::error::Error;
use std::fs::{self, OpenOptions};
use std::io::Write;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    // The TUI owns stdout, so logs go to a file unless asked otherwise.
    let target = if cli.log_stderr {
        Target::Stderr
    } else {
        fs::create_dir_all(&config.data_dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_file())?;
        Target::Pipe(Box::new(file))
    };

    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module("coinwatch", cli.log_level)
        .format(|buf, record| {
            let ts = chrono::Local::now().format("%H:%M:%S%.3f");
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                ts,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(target)
        .init();

    info!("Starting coinwatch against {}", config.api_url);

    let api = CoinGeckoClient::new(&config)?;

    if cli.ephemeral {
        info!("Ephemeral session, nothing will be persisted");
        Dashboard::new(api, MemoryStorage::new(), &config).run().await
    } else {
        let storage = FileStorage::open(config.data_dir.clone())?;
        info!("Persisting state in {}", storage.dir().display());
        Dashboard::new(api, storage, &config).run().await
    }
}
