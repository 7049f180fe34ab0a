//! JSON document store on disk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{CachedPlan, InventoryStore};
use crate::error::{Result, SlitError};
use crate::model::{Arrangement, BottomSize, FanSize, Reel};

/// Everything the store keeps, as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryDocument {
    #[serde(default)]
    pub reels: Vec<Reel>,
    #[serde(default)]
    pub fan_sizes: Vec<FanSize>,
    #[serde(default)]
    pub bottom_sizes: Vec<BottomSize>,
    /// Cached plan rows, kept raw so rows from older layouts can be skipped.
    #[serde(default)]
    pub slit_results: Vec<serde_json::Value>,
    /// Reel the cached rows were generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slit_results_reel: Option<String>,
}

/// Inventory stored in a single JSON file.
///
/// Writes go to a sibling temporary file which is then renamed over the
/// document, so a failed write never leaves a partial document behind.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole document. A missing file is an empty inventory.
    pub fn read(&self) -> Result<InventoryDocument> {
        if !self.path.exists() {
            debug!("No inventory at {}, starting empty", self.path.display());
            return Ok(InventoryDocument::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(InventoryDocument::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            SlitError::persistence(format!("{} is not a valid inventory: {}", self.path.display(), e))
        })
    }

    /// Replace the whole document.
    pub fn write(&self, doc: &InventoryDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Err(e) = fs::write(&tmp, json).and_then(|_| fs::rename(&tmp, &self.path)) {
            let _ = fs::remove_file(&tmp);
            return Err(SlitError::persistence(format!(
                "Failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        Ok(())
    }

    fn update(&self, apply: impl FnOnce(&mut InventoryDocument)) -> Result<()> {
        let mut doc = self.read()?;
        apply(&mut doc);
        self.write(&doc)
    }
}

impl InventoryStore for JsonStore {
    fn list_reels(&self) -> Result<Vec<Reel>> {
        Ok(self.read()?.reels)
    }

    fn list_fan_sizes(&self) -> Result<Vec<FanSize>> {
        Ok(self.read()?.fan_sizes)
    }

    fn list_bottom_sizes(&self) -> Result<Vec<BottomSize>> {
        Ok(self.read()?.bottom_sizes)
    }

    fn replace_reels(&mut self, reels: &[Reel]) -> Result<()> {
        self.update(|doc| doc.reels = reels.to_vec())
    }

    fn load_plan(&self) -> Result<CachedPlan> {
        let doc = self.read()?;
        let total = doc.slit_results.len();

        let rows: Vec<Arrangement> = doc
            .slit_results
            .into_iter()
            .filter_map(|row| serde_json::from_value(row).ok())
            .collect();

        if rows.len() < total {
            warn!(
                "Dropped {} cached plan row(s) without a strip breakdown",
                total - rows.len()
            );
        }

        Ok(CachedPlan {
            reel_id: doc.slit_results_reel,
            rows,
        })
    }

    fn save_plan(&mut self, reel_id: Option<&str>, rows: &[Arrangement]) -> Result<()> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        self.update(|doc| {
            doc.slit_results = values;
            doc.slit_results_reel = reel_id.map(str::to_string);
        })
    }
}
