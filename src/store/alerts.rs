use super::{load_json, save_json, Storage, ALERTS_KEY};
use crate::error::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional price bounds for one asset. `None` means no bound on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub upper: Option<f64>,
    pub lower: Option<f64>,
}

impl AlertThresholds {
    pub fn new(upper: Option<f64>, lower: Option<f64>) -> Self {
        Self { upper, lower }
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_none() && self.lower.is_none()
    }

    /// Inclusive on both sides. The upper bound wins when both match.
    pub fn check(&self, price: f64) -> Option<AlertBreach> {
        if let Some(upper) = self.upper {
            if price >= upper {
                return Some(AlertBreach::Upper(upper));
            }
        }
        if let Some(lower) = self.lower {
            if price <= lower {
                return Some(AlertBreach::Lower(lower));
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AlertBreach {
    Upper(f64),
    Lower(f64),
}

impl AlertBreach {
    pub fn describe(&self, id: &str, price: f64) -> String {
        match self {
            AlertBreach::Upper(t) => format!("{} rose to {} (upper alert: {})", id, price, t),
            AlertBreach::Lower(t) => format!("{} fell to {} (lower alert: {})", id, price, t),
        }
    }
}

/// Per-asset thresholds. Entries outlive deselection of their asset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertStore {
    thresholds: BTreeMap<String, AlertThresholds>,
}

impl AlertStore {
    pub fn load(storage: &dyn Storage) -> Self {
        let thresholds: BTreeMap<String, AlertThresholds> =
            load_json(storage, ALERTS_KEY).unwrap_or_default();
        let thresholds: BTreeMap<_, _> = thresholds
            .into_iter()
            .filter(|(_, t)| !t.is_empty())
            .collect();
        info!("Loaded {} price alerts", thresholds.len());
        Self { thresholds }
    }

    /// Overwrites the thresholds for `id`. Two empty bounds remove the entry.
    pub fn set(
        &mut self,
        id: &str,
        upper: Option<f64>,
        lower: Option<f64>,
        storage: &mut dyn Storage,
    ) -> Result<()> {
        let thresholds = AlertThresholds::new(upper, lower);
        if thresholds.is_empty() {
            self.thresholds.remove(id);
        } else {
            self.thresholds.insert(id.to_string(), thresholds);
        }
        debug!("Alert for {}: {:?}", id, thresholds);
        self.persist(storage)
    }

    pub fn remove(&mut self, id: &str, storage: &mut dyn Storage) -> Result<bool> {
        if self.thresholds.remove(id).is_none() {
            return Ok(false);
        }
        self.persist(storage)?;
        Ok(true)
    }

    pub fn get(&self, id: &str) -> Option<AlertThresholds> {
        self.thresholds.get(id).copied()
    }

    pub fn evaluate(&self, id: &str, price: f64) -> Option<AlertBreach> {
        self.thresholds.get(id).and_then(|t| t.check(price))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AlertThresholds)> {
        self.thresholds.iter()
    }

    pub fn as_map(&self) -> &BTreeMap<String, AlertThresholds> {
        &self.thresholds
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    fn persist(&self, storage: &mut dyn Storage) -> Result<()> {
        save_json(storage, ALERTS_KEY, &self.thresholds)
    }
}
