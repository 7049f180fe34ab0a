//! Candidate cutting plan for a single reel width.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::strip::{Strip, StripKind};

/// Which strip families an arrangement may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutMode {
    SideOnly,
    BottomOnly,
    Both,
}

impl FromStr for CutMode {
    type Err = String;

    /// Accepts the operator labels (`Side only`, `Bottom only`, `Both`) and short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "side only" | "side" | "sideonly" => Ok(CutMode::SideOnly),
            "bottom only" | "bottom" | "bottomonly" => Ok(CutMode::BottomOnly),
            "both" | "mixed" => Ok(CutMode::Both),
            _ => Err(format!("Unknown cut mode '{}'", s)),
        }
    }
}

impl fmt::Display for CutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutMode::SideOnly => write!(f, "Side only"),
            CutMode::BottomOnly => write!(f, "Bottom only"),
            CutMode::Both => write!(f, "Both"),
        }
    }
}

/// One way to partition a reel's width into side and bottom strips.
///
/// `used_width`, `waste` and `efficiency_pct` are stored rounded to two
/// decimals; ranking compares these stored values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrangement {
    /// Human-readable combination, e.g. `2 × Cup (1UPS) + 1 × Bottom (B1)`.
    pub combination_label: String,
    /// Fan size the side strips are cut for.
    pub side_name: String,
    /// Number of side strips.
    pub side_count: u32,
    /// Width of each side strip in cm.
    pub side_width: f64,
    /// Bottom strips, one entry per physical cut.
    pub bottom_entries: Vec<Strip>,
    pub used_width: f64,
    pub waste: f64,
    pub efficiency_pct: f64,
    /// Set on every row sharing the maximum efficiency of its plan.
    #[serde(default)]
    pub best: bool,
}

impl Arrangement {
    /// Total number of strips cut.
    pub fn strip_count(&self) -> usize {
        self.side_count as usize + self.bottom_entries.len()
    }

    /// Expand into physical strips, side strips first, then bottom strips.
    pub fn strips(&self) -> Vec<(StripKind, Strip)> {
        let sides = (0..self.side_count)
            .map(|_| (StripKind::Side, Strip::new(self.side_name.clone(), self.side_width)));
        let bottoms = self
            .bottom_entries
            .iter()
            .map(|b| (StripKind::Bottom, b.clone()));
        sides.chain(bottoms).collect()
    }

    /// Unrounded sum of all strip widths.
    pub fn raw_used_width(&self) -> f64 {
        self.side_count as f64 * self.side_width
            + self.bottom_entries.iter().map(|b| b.width).sum::<f64>()
    }

    /// Deduplication key: label plus used width in hundredths of a cm.
    pub fn key(&self) -> (String, i64) {
        (
            self.combination_label.clone(),
            (self.used_width * 100.0).round() as i64,
        )
    }
}
