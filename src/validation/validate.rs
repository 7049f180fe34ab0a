//! Input validation for planning requests and inventory catalogs.

use std::collections::HashSet;

use crate::error::{Result, SlitError};
use crate::model::{BottomSize, CutMode, Reel, UpsTier};

/// Operator selections for one planning pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanRequest {
    pub reel_id: String,
    pub fan_id: String,
    pub ups: Option<UpsTier>,
    pub mode: Option<CutMode>,
}

impl PlanRequest {
    pub fn new(
        reel_id: impl Into<String>,
        fan_id: impl Into<String>,
        ups: UpsTier,
        mode: CutMode,
    ) -> Self {
        Self {
            reel_id: reel_id.into(),
            fan_id: fan_id.into(),
            ups: Some(ups),
            mode: Some(mode),
        }
    }
}

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Convert into a validation error when any error was recorded.
    pub fn into_result(self) -> Result<Vec<String>> {
        if self.passed {
            Ok(self.warnings)
        } else {
            Err(SlitError::validation(self.errors.join("; ")))
        }
    }
}

/// Check every required selection is present. Runs before any lookup.
pub fn validate_request(request: &PlanRequest) -> Result<(UpsTier, CutMode)> {
    let mut result = ValidationResult::ok();

    if request.reel_id.trim().is_empty() {
        result.add_error("No parent reel selected");
    }
    if request.fan_id.trim().is_empty() {
        result.add_error("No fan size selected");
    }
    if request.ups.is_none() {
        result.add_error("No UPS tier selected");
    }
    if request.mode.is_none() {
        result.add_error("No cut mode selected");
    }

    result.into_result()?;

    match (request.ups, request.mode) {
        (Some(ups), Some(mode)) => Ok((ups, mode)),
        _ => Err(SlitError::validation("Please select all required fields")),
    }
}

/// Inspect the reel set and bottom catalog for records the planner cannot use.
///
/// Only warnings are produced; the planner skips or rejects such records itself.
pub fn validate_inventory(reels: &[Reel], bottoms: &[BottomSize]) -> ValidationResult {
    let mut result = ValidationResult::ok();
    let mut seen = HashSet::new();

    for reel in reels {
        if reel.width <= 0.0 {
            result.add_warning(format!("Reel {}: non-positive width {}", reel.id, reel.width));
        }
        if reel.weight < 0.0 {
            result.add_warning(format!("Reel {}: negative weight {}", reel.id, reel.weight));
        }
        if !seen.insert(reel.id.as_str()) {
            result.add_warning(format!("Reel {}: duplicate id", reel.id));
        }
    }

    for bottom in bottoms {
        if !bottom.is_usable() {
            result.add_warning(format!(
                "Bottom size {}: non-positive width {}, skipped",
                bottom.name, bottom.width
            ));
        }
    }

    result
}
