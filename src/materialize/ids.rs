//! Reel id allocation.

use crate::config::{ID_PREFIX, ID_WIDTH};
use crate::model::Reel;

/// Allocates ids for new reels from a snapshot of the active set.
pub trait IdAllocator {
    /// Next id given the reels currently in the set.
    ///
    /// Ids in `retired` belong to reels that were just removed and must not
    /// be handed out again.
    fn next_id(&mut self, active: &[Reel], retired: &[&str]) -> String;
}

/// Format a sequence number as a reel id (`R007`).
pub fn format_reel_id(n: usize) -> String {
    format!("{}{:0width$}", ID_PREFIX, n, width = ID_WIDTH)
}

/// Position-based ids: `R<count + 1>`, advancing past ids already taken
/// or retired.
///
/// The result depends only on the snapshot passed in, so callers must
/// insert each allocated reel before asking for the next id.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl IdAllocator for SequentialIds {
    fn next_id(&mut self, active: &[Reel], retired: &[&str]) -> String {
        let mut n = active.len() + 1;
        loop {
            let id = format_reel_id(n);
            if !active.iter().any(|r| r.id == id) && !retired.contains(&id.as_str()) {
                return id;
            }
            n += 1;
        }
    }
}
