//! In-process inventory store.

use super::{CachedPlan, InventoryStore};
use crate::error::{Result, SlitError};
use crate::model::{Arrangement, BottomSize, FanSize, Reel};

/// Inventory held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub reels: Vec<Reel>,
    pub fan_sizes: Vec<FanSize>,
    pub bottom_sizes: Vec<BottomSize>,
    pub plan: CachedPlan,
    /// When set, every write fails with this message and changes nothing.
    pub fail_writes: Option<String>,
}

impl MemoryStore {
    pub fn new(reels: Vec<Reel>, fan_sizes: Vec<FanSize>, bottom_sizes: Vec<BottomSize>) -> Self {
        Self {
            reels,
            fan_sizes,
            bottom_sizes,
            ..Default::default()
        }
    }

    fn check_writable(&self) -> Result<()> {
        match &self.fail_writes {
            Some(message) => Err(SlitError::persistence(message.clone())),
            None => Ok(()),
        }
    }
}

impl InventoryStore for MemoryStore {
    fn list_reels(&self) -> Result<Vec<Reel>> {
        Ok(self.reels.clone())
    }

    fn list_fan_sizes(&self) -> Result<Vec<FanSize>> {
        Ok(self.fan_sizes.clone())
    }

    fn list_bottom_sizes(&self) -> Result<Vec<BottomSize>> {
        Ok(self.bottom_sizes.clone())
    }

    fn replace_reels(&mut self, reels: &[Reel]) -> Result<()> {
        self.check_writable()?;
        self.reels = reels.to_vec();
        Ok(())
    }

    fn load_plan(&self) -> Result<CachedPlan> {
        Ok(self.plan.clone())
    }

    fn save_plan(&mut self, reel_id: Option<&str>, rows: &[Arrangement]) -> Result<()> {
        self.check_writable()?;
        self.plan = CachedPlan {
            reel_id: reel_id.map(str::to_string),
            rows: rows.to_vec(),
        };
        Ok(())
    }
}
