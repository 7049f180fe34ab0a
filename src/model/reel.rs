//! Reel inventory record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A roll of paper stock in the active inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    /// Unique reel identifier (e.g. `R001`).
    pub id: String,
    /// Reel width in cm.
    pub width: f64,
    /// Basis weight in g/m².
    pub gsm: f64,
    /// Total weight in kg.
    pub weight: f64,
    /// Paper grade.
    pub paper_type: String,
    /// Receipt or creation date.
    pub date: NaiveDate,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl Reel {
    /// Create a reel with empty notes.
    pub fn new(
        id: impl Into<String>,
        width: f64,
        gsm: f64,
        weight: f64,
        paper_type: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            width,
            gsm,
            weight,
            paper_type: paper_type.into(),
            date,
            notes: String::new(),
        }
    }

    /// Weight carried by a strip of `strip_width` cut from this reel.
    ///
    /// Callers must reject reels with zero width before calling.
    pub fn proportional_weight(&self, strip_width: f64) -> f64 {
        if self.weight == 0.0 {
            return 0.0;
        }
        self.weight * (strip_width / self.width)
    }
}
