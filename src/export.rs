use crate::error::Result;
use crate::store::AlertThresholds;
use chrono::{DateTime, Local};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot of the user's settings, keyed like the persisted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub selected_cryptos: Vec<String>,
    pub price_alerts: BTreeMap<String, AlertThresholds>,
}

pub fn export_file_name(at: DateTime<Local>) -> String {
    format!("coinwatch-export-{}.json", at.format("%Y%m%d-%H%M%S"))
}

pub fn write_export(document: &ExportDocument, dir: &Path, at: DateTime<Local>) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(at));
    fs::write(&path, serde_json::to_string_pretty(document)?)?;
    info!(
        "Exported {} assets and {} alerts to {}",
        document.selected_cryptos.len(),
        document.price_alerts.len(),
        path.display()
    );
    Ok(path)
}
