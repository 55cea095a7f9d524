use super::{load_json, save_json, Storage, SELECTED_KEY};
use crate::error::Result;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The watch-list: asset ids in the order the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn load(storage: &dyn Storage) -> Self {
        let stored: Vec<String> = load_json(storage, SELECTED_KEY).unwrap_or_default();
        let mut selection = Self::default();
        for id in stored {
            if !selection.contains(&id) {
                selection.ids.push(id);
            }
        }
        info!("Loaded {} selected assets", selection.ids.len());
        selection
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn add(&mut self, id: &str, storage: &mut dyn Storage) -> Result<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        self.ids.push(id.to_string());
        debug!("Selected {}", id);
        self.persist(storage)?;
        Ok(true)
    }

    /// Returns whether `id` was present.
    pub fn remove(&mut self, id: &str, storage: &mut dyn Storage) -> Result<bool> {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);
        if self.ids.len() == before {
            return Ok(false);
        }
        debug!("Deselected {}", id);
        self.persist(storage)?;
        Ok(true)
    }

    pub fn toggle(&mut self, id: &str, storage: &mut dyn Storage) -> Result<Toggled> {
        if self.contains(id) {
            self.remove(id, storage)?;
            Ok(Toggled::Removed)
        } else {
            self.add(id, storage)?;
            Ok(Toggled::Added)
        }
    }

    fn persist(&self, storage: &mut dyn Storage) -> Result<()> {
        save_json(storage, SELECTED_KEY, &self.ids)
    }
}
