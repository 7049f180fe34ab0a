//! Configuration constants and settings for the planner.

/// Maximum side strips per arrangement.
pub const MAX_SIDE: u32 = 3;

/// Maximum repeats of a single bottom size per arrangement.
pub const MAX_BOTTOM: u32 = 4;

/// Decimal places kept on used width, waste and efficiency.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Decimal places kept on child reel weights.
pub const WEIGHT_DECIMALS: u32 = 3;

/// Prefix of allocated reel ids.
pub const ID_PREFIX: &str = "R";

/// Zero-padded digit count of allocated reel ids.
pub const ID_WIDTH: usize = 3;

/// Default inventory document path for the CLI.
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// Enumeration bounds for the arrangement generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Side strip repeats tried per arrangement.
    pub max_side: u32,
    /// Repeats tried per bottom size.
    pub max_bottom: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_side: MAX_SIDE,
            max_bottom: MAX_BOTTOM,
        }
    }
}

impl PlannerConfig {
    /// Upper bound on the number of arrangements one pass can emit.
    pub fn search_space(&self, bottom_sizes: usize) -> usize {
        (self.max_side as usize + 1) * bottom_sizes.max(1) * (self.max_bottom as usize + 1)
    }
}

/// Rounding helpers for stored quantities.
pub mod rounding {
    /// Round half away from zero to `decimals` places.
    #[inline]
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }
}
