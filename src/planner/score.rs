//! Material efficiency scoring.

use crate::config::{rounding::round_to, DISPLAY_DECIMALS};

/// Width usage of one arrangement against its reel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub used_width: f64,
    pub waste: f64,
    pub efficiency_pct: f64,
}

/// Whether `used` fits within `reel_width` once rounded as it is stored.
///
/// Binary noise below the display precision (`3 × 33.3` on a 99.9cm reel)
/// still fits, while a stored used width never exceeds the reel width.
#[inline]
pub fn fits(used: f64, reel_width: f64) -> bool {
    round_to(used, DISPLAY_DECIMALS) <= reel_width
}

/// Score a used width against a reel width.
///
/// All three values are rounded to two decimals and the rounded values are
/// what ranking compares. `reel_width` must be positive.
pub fn score(reel_width: f64, used_width: f64) -> Score {
    let waste = (reel_width - used_width).max(0.0);
    let efficiency = (used_width / reel_width * 100.0).min(100.0);

    Score {
        used_width: round_to(used_width, DISPLAY_DECIMALS),
        waste: round_to(waste, DISPLAY_DECIMALS),
        efficiency_pct: round_to(efficiency, DISPLAY_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_exact() {
        let s = score(100.0, 90.0);
        assert_eq!(s.used_width, 90.0);
        assert_eq!(s.waste, 10.0);
        assert_eq!(s.efficiency_pct, 90.0);
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let s = score(75.0, 50.0);
        assert_eq!(s.efficiency_pct, 66.67);
        let s = score(30.0, 10.0);
        assert_eq!(s.efficiency_pct, 33.33);
    }

    #[test]
    fn test_score_full_width() {
        let s = score(50.0, 50.0);
        assert_eq!(s.waste, 0.0);
        assert_eq!(s.efficiency_pct, 100.0);
    }

    #[test]
    fn test_fits_compares_stored_width() {
        assert!(fits(3.0 * 33.3, 99.9));
        assert!(fits(50.0, 50.0));
        assert!(!fits(50.01, 50.0));
        // Rounds up to 50.0, which is wider than the reel
        assert!(!fits(49.99905, 49.999));
    }

    #[test]
    fn test_score_absorbs_float_noise() {
        // 3 × 33.3 is 99.89999999999999 in binary
        let s = score(99.9, 3.0 * 33.3);
        assert_eq!(s.used_width, 99.9);
        assert_eq!(s.waste, 0.0);
        assert_eq!(s.efficiency_pct, 100.0);
    }
}
