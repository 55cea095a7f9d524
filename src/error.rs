use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoinWatchError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{endpoint} returned status {status}")]
    StatusError {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error for '{key}': {message}")]
    StorageError { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, CoinWatchError>;
