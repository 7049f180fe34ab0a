//! Slit planning: generate, score, deduplicate and rank arrangements.

mod generate;
mod rank;
mod score;

pub use generate::{bottom_label, generate, side_label};
pub use rank::{best_efficiency, dedup, mark_best, rank, sort_by_efficiency};
pub use score::{fits, score, Score};

use serde::Serialize;

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::model::{Arrangement, BottomSize, CutMode, Reel, SideStrip};

/// Ranked arrangements for one reel.
pub fn plan_reel(
    reel: &Reel,
    side: &SideStrip,
    bottoms: &[BottomSize],
    mode: CutMode,
    config: &PlannerConfig,
) -> Result<Vec<Arrangement>> {
    let generated = generate(reel.width, side, bottoms, mode, config)?;
    Ok(rank(generated))
}

/// Headline numbers for a presented plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total: usize,
    /// 0 when the plan is empty.
    pub best_efficiency: f64,
}

impl PlanSummary {
    pub fn of(arrangements: &[Arrangement]) -> Self {
        Self {
            total: arrangements.len(),
            best_efficiency: best_efficiency(arrangements).unwrap_or(0.0),
        }
    }
}
