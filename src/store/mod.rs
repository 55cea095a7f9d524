//! Durable key-value persistence and the stores built on top of it.
//!
//! Values are opaque strings, mirroring browser `localStorage`: the
//! selection and alerts are stored as JSON, the theme as a bare word.

pub mod alerts;
pub mod selection;

pub use alerts::{AlertBreach, AlertStore, AlertThresholds};
pub use selection::Selection;

use crate::error::{CoinWatchError, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const SELECTED_KEY: &str = "selectedCryptos";
pub const ALERTS_KEY: &str = "priceAlerts";
pub const THEME_KEY: &str = "theme";

pub trait Storage {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Reads and decodes `key`. Missing, unreadable and corrupt values all
/// yield `None`; the latter two are logged.
pub fn load_json<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<T> {
    let raw = match storage.load(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring corrupt value stored under '{}': {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize + ?Sized>(
    storage: &mut dyn Storage,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.save(key, &raw)
}

/// One file per key inside a data directory.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        debug!("Storage directory: {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

fn storage_error(key: &str, e: io::Error) -> CoinWatchError {
    CoinWatchError::StorageError {
        key: key.to_string(),
        message: e.to_string(),
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(storage_error(key, e)),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        // Write-then-rename so a crash never leaves a half-written value.
        let tmp = self.dir.join(format!("{}.tmp", key));
        fs::write(&tmp, value).map_err(|e| storage_error(key, e))?;
        fs::rename(&tmp, self.path(key)).map_err(|e| storage_error(key, e))?;
        debug!("Persisted '{}' ({} bytes)", key, value.len());
        Ok(())
    }
}

/// Non-persistent storage for `--ephemeral` sessions and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose every `save` fails, for exercising write errors.
    pub fn read_only() -> Self {
        Self {
            values: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(CoinWatchError::StorageError {
                key: key.to_string(),
                message: "storage is read-only".to_string(),
            });
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
