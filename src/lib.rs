//! slit-plan - Slit planning engine for paper reels.
//!
//! Given a parent reel, a fan size at a chosen UPS tier and the bottom size
//! catalog, the planner enumerates every way to cut the reel's width into
//! side and/or bottom strips, scores each by width efficiency, and ranks the
//! result. Accepting an arrangement replaces the parent reel with child
//! reels whose weights are proportional to their widths.
//!
//! # Example
//!
//! ```no_run
//! use slit_plan::{plan_slits, CutMode, JsonStore, PlanRequest, PlannerConfig, UpsTier};
//!
//! let mut store = JsonStore::new("inventory.json");
//! let request = PlanRequest::new("R001", "F001", UpsTier::Two, CutMode::Both);
//! let plan = plan_slits(&mut store, &request, &PlannerConfig::default()).unwrap();
//! for row in &plan.arrangements {
//!     println!("{} {}%", row.combination_label, row.efficiency_pct);
//! }
//! ```

pub mod config;
pub mod error;
pub mod materialize;
pub mod model;
pub mod planner;
pub mod store;
pub mod validation;

// Re-exports for convenience
pub use config::PlannerConfig;
pub use error::{ErrorCode, Result, SlitError};
pub use materialize::{materialize, IdAllocator, Materialized, SequentialIds};
pub use model::{Arrangement, BottomSize, CutMode, FanSize, Reel, SideStrip, Strip, UpsTier};
pub use planner::{plan_reel, PlanSummary};
pub use store::{CachedPlan, InventoryStore, JsonStore, MemoryStore};
pub use validation::{validate_inventory, validate_request, PlanRequest, ValidationResult};

use chrono::NaiveDate;
use tracing::{info, warn};

/// A ranked plan for one parent reel.
#[derive(Debug, Clone)]
pub struct Plan {
    pub reel: Reel,
    pub arrangements: Vec<Arrangement>,
    pub summary: PlanSummary,
}

/// Run a full planning pass against a store.
///
/// 1. Check the request has every selection
/// 2. Resolve the reel, fan size and side strip width
/// 3. Generate, score, deduplicate and rank
/// 4. Save the ranked rows as the store's cached plan, tagged with the reel
pub fn plan_slits<S: InventoryStore>(
    store: &mut S,
    request: &PlanRequest,
    config: &PlannerConfig,
) -> Result<Plan> {
    let (ups, mode) = validate_request(request)?;

    let reel = store
        .list_reels()?
        .into_iter()
        .find(|r| r.id == request.reel_id)
        .ok_or_else(|| SlitError::validation(format!("Unknown reel '{}'", request.reel_id)))?;

    let fan = store
        .list_fan_sizes()?
        .into_iter()
        .find(|f| f.id == request.fan_id)
        .ok_or_else(|| SlitError::validation(format!("Unknown fan size '{}'", request.fan_id)))?;

    let side = fan.side_strip(ups)?;
    let bottoms = store.list_bottom_sizes()?;

    for warning in validate_inventory(std::slice::from_ref(&reel), &bottoms).warnings {
        warn!("{}", warning);
    }

    let arrangements = plan_reel(&reel, &side, &bottoms, mode, config)?;
    store.save_plan(Some(reel.id.as_str()), &arrangements)?;

    let summary = PlanSummary::of(&arrangements);
    info!(
        "Generated {} slit plan combination(s) for {} (best {}%)",
        summary.total, reel.id, summary.best_efficiency
    );

    Ok(Plan {
        reel,
        arrangements,
        summary,
    })
}

/// Replace `parent_id` in the store with the child reels of `arrangement`.
///
/// Nothing is written unless the full replacement set was built.
pub fn apply_arrangement<S: InventoryStore>(
    store: &mut S,
    parent_id: &str,
    arrangement: &Arrangement,
    date: NaiveDate,
) -> Result<Materialized> {
    let reels = store.list_reels()?;
    let materialized = materialize(&reels, parent_id, arrangement, date, &mut SequentialIds)?;
    store.replace_reels(&materialized.reels)?;

    info!(
        "Created {} child reel(s) from {}",
        materialized.children.len(),
        parent_id
    );

    Ok(materialized)
}

/// Apply row `row` (1-based, as presented) of the store's cached plan.
///
/// The cached plan must have been generated for `parent_id`.
pub fn apply_cached_row<S: InventoryStore>(
    store: &mut S,
    parent_id: &str,
    row: usize,
    date: NaiveDate,
) -> Result<Materialized> {
    let plan = store.load_plan()?;
    let arrangement = row
        .checked_sub(1)
        .and_then(|i| plan.rows.get(i))
        .cloned()
        .ok_or_else(|| {
            SlitError::validation(format!(
                "Row {} is not in the cached plan ({} row(s))",
                row,
                plan.rows.len()
            ))
        })?;

    match plan.reel_id.as_deref() {
        Some(id) if id == parent_id => {}
        Some(id) => {
            return Err(SlitError::validation(format!(
                "Cached plan was generated for reel {}, not {}",
                id, parent_id
            )));
        }
        None => {
            return Err(SlitError::validation(format!(
                "Cached plan does not record its reel; plan {} again",
                parent_id
            )));
        }
    }

    apply_arrangement(store, parent_id, &arrangement, date)
}

/// Drop the cached plan.
pub fn clear_plan<S: InventoryStore>(store: &mut S) -> Result<()> {
    store.save_plan(None, &[])
}
