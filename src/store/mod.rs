//! Inventory storage collaborators.
//!
//! The engine never holds inventory state itself; it reads catalogs and
//! writes the replacement reel set through an [`InventoryStore`].

mod json;
mod memory;

pub use json::{InventoryDocument, JsonStore};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{Arrangement, BottomSize, FanSize, Reel};

/// The last presented plan and the reel it was generated for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CachedPlan {
    /// `None` when the cache predates recording the reel, or is empty.
    pub reel_id: Option<String>,
    pub rows: Vec<Arrangement>,
}

/// Read catalogs and replace the reel set.
///
/// `replace_reels` must be all-or-nothing: on error the previous set is
/// left as it was.
pub trait InventoryStore {
    fn list_reels(&self) -> Result<Vec<Reel>>;

    fn list_fan_sizes(&self) -> Result<Vec<FanSize>>;

    fn list_bottom_sizes(&self) -> Result<Vec<BottomSize>>;

    fn replace_reels(&mut self, reels: &[Reel]) -> Result<()>;

    /// Last presented plan, for re-display.
    fn load_plan(&self) -> Result<CachedPlan>;

    fn save_plan(&mut self, reel_id: Option<&str>, rows: &[Arrangement]) -> Result<()>;
}
