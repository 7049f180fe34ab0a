//! Child-reel materialization: replace a parent reel with the strips cut from it.

mod ids;

pub use ids::{format_reel_id, IdAllocator, SequentialIds};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{rounding::round_to, DISPLAY_DECIMALS, WEIGHT_DECIMALS};
use crate::error::{Result, SlitError};
use crate::model::{Arrangement, Reel, StripKind};
use crate::planner::fits;

/// Outcome of materializing one arrangement.
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized {
    /// Full replacement reel set: parent removed, children appended.
    pub reels: Vec<Reel>,
    /// The newly created child reels, in cut order.
    pub children: Vec<Reel>,
}

/// Weight of a child strip, proportional to width and rounded to 3 decimals.
pub fn child_weight(parent: &Reel, child_width: f64) -> f64 {
    round_to(parent.proportional_weight(child_width), WEIGHT_DECIMALS)
}

/// Provenance note stamped on a child reel.
pub fn child_note(kind: StripKind, strip_name: &str) -> String {
    match kind {
        StripKind::Side => format!("Slit child {}", strip_name),
        StripKind::Bottom => format!("Slit bottom {}", strip_name),
    }
}

/// Build the replacement reel set for cutting `arrangement` from `parent_id`.
///
/// Pure: reads only the `active` snapshot. Fails without producing a set
/// when the parent is missing, has no width or a negative weight, or cannot
/// hold the arrangement. Child ids never reuse the parent's id.
pub fn materialize<A: IdAllocator>(
    active: &[Reel],
    parent_id: &str,
    arrangement: &Arrangement,
    date: NaiveDate,
    ids: &mut A,
) -> Result<Materialized> {
    let parent = active
        .iter()
        .find(|r| r.id == parent_id)
        .ok_or_else(|| SlitError::NotFound {
            id: parent_id.to_string(),
        })?;

    if parent.width <= 0.0 || !parent.width.is_finite() {
        return Err(SlitError::validation(format!(
            "Reel {} has non-positive width {}",
            parent.id, parent.width
        )));
    }

    if parent.weight < 0.0 || !parent.weight.is_finite() {
        return Err(SlitError::validation(format!(
            "Reel {} has negative weight {}",
            parent.id, parent.weight
        )));
    }

    let strips = arrangement.strips();
    if strips.is_empty() {
        return Err(SlitError::validation(format!(
            "Arrangement '{}' has no strips",
            arrangement.combination_label
        )));
    }

    let used = arrangement.raw_used_width();
    if !fits(used, parent.width) {
        return Err(SlitError::validation(format!(
            "Arrangement '{}' needs {}cm but reel {} is {}cm wide",
            arrangement.combination_label,
            round_to(used, DISPLAY_DECIMALS),
            parent.id,
            parent.width
        )));
    }

    let mut reels: Vec<Reel> = active.iter().filter(|r| r.id != parent_id).cloned().collect();
    let mut children = Vec::with_capacity(strips.len());

    for (kind, strip) in strips {
        let child = Reel {
            id: ids.next_id(&reels, &[parent_id]),
            width: strip.width,
            gsm: parent.gsm,
            weight: child_weight(parent, strip.width),
            paper_type: parent.paper_type.clone(),
            date,
            notes: child_note(kind, &strip.name),
        };
        debug!("Child {} ({}cm, {}kg) from {}", child.id, child.width, child.weight, parent.id);
        reels.push(child.clone());
        children.push(child);
    }

    Ok(Materialized { reels, children })
}
