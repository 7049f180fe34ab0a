//! Arrangement enumeration over side and bottom strip counts.

use tracing::{debug, warn};

use super::score::{fits, score};
use crate::config::PlannerConfig;
use crate::error::{Result, SlitError};
use crate::model::{Arrangement, BottomSize, CutMode, SideStrip, Strip};

/// Label for `count` side strips.
pub fn side_label(count: u32, side: &SideStrip) -> String {
    format!("{} × {} ({})", count, side.name, side.ups)
}

/// Label for `count` strips of one bottom size.
pub fn bottom_label(count: u32, bottom: &BottomSize) -> String {
    format!("{} × Bottom ({})", count, bottom.name)
}

/// Build a scored arrangement for one (side count, bottom, bottom count) triple.
fn build(
    reel_width: f64,
    side: &SideStrip,
    side_count: u32,
    bottom: Option<(&BottomSize, u32)>,
) -> Arrangement {
    let bottom_count = bottom.map(|(_, n)| n).unwrap_or(0);

    let combination_label = match bottom {
        Some((b, n)) if n > 0 && side_count > 0 => {
            format!("{} + {}", side_label(side_count, side), bottom_label(n, b))
        }
        Some((b, n)) if n > 0 => bottom_label(n, b),
        _ => side_label(side_count, side),
    };

    let bottom_entries: Vec<Strip> = match bottom {
        Some((b, n)) => (0..n).map(|_| Strip::new(b.name.clone(), b.width)).collect(),
        None => Vec::new(),
    };

    let used = side_count as f64 * side.width
        + bottom.map(|(b, _)| b.width * bottom_count as f64).unwrap_or(0.0);
    let s = score(reel_width, used);

    Arrangement {
        combination_label,
        side_name: side.name.clone(),
        side_count,
        side_width: side.width,
        bottom_entries,
        used_width: s.used_width,
        waste: s.waste,
        efficiency_pct: s.efficiency_pct,
        best: false,
    }
}

/// Enumerate every feasible arrangement for a reel width.
///
/// The search is exhaustive over the bounded space given by `config`;
/// the only cutoff is width feasibility. Bottom sizes with a non-positive
/// width are skipped.
pub fn generate(
    reel_width: f64,
    side: &SideStrip,
    bottoms: &[BottomSize],
    mode: CutMode,
    config: &PlannerConfig,
) -> Result<Vec<Arrangement>> {
    if reel_width <= 0.0 || !reel_width.is_finite() {
        return Err(SlitError::validation(format!(
            "Reel width must be positive, got {}",
            reel_width
        )));
    }
    if side.width <= 0.0 || !side.width.is_finite() {
        return Err(SlitError::Configuration {
            fan: side.name.clone(),
            ups: side.ups,
        });
    }

    let usable: Vec<&BottomSize> = bottoms
        .iter()
        .filter(|b| {
            if !b.is_usable() {
                warn!("Skipping bottom size '{}' with width {}", b.name, b.width);
            }
            b.is_usable()
        })
        .collect();

    let mut out = Vec::with_capacity(config.search_space(usable.len()));

    match mode {
        CutMode::SideOnly => {
            for n in 1..=config.max_side {
                if !fits(n as f64 * side.width, reel_width) {
                    break;
                }
                out.push(build(reel_width, side, n, None));
            }
        }
        CutMode::BottomOnly => {
            for bottom in &usable {
                for n in 1..=config.max_bottom {
                    if !fits(n as f64 * bottom.width, reel_width) {
                        break;
                    }
                    out.push(build(reel_width, side, 0, Some((*bottom, n))));
                }
            }
        }
        CutMode::Both => {
            for si in 0..=config.max_side {
                let side_used = si as f64 * side.width;

                for bottom in &usable {
                    for bi in 0..=config.max_bottom {
                        if si == 0 && bi == 0 {
                            continue;
                        }
                        if !fits(side_used + bi as f64 * bottom.width, reel_width) {
                            continue;
                        }
                        out.push(build(reel_width, side, si, Some((*bottom, bi))));
                    }
                }
            }
        }
    }

    debug!(
        "Generated {} arrangement(s) for {}cm reel in {} mode",
        out.len(),
        reel_width,
        mode
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UpsTier;

    fn side(width: f64) -> SideStrip {
        SideStrip {
            name: "Cup".to_string(),
            ups: UpsTier::One,
            width,
        }
    }

    fn config() -> PlannerConfig {
        PlannerConfig::default()
    }

    // ==================== SideOnly tests ====================

    #[test]
    fn test_side_only_counts() {
        let out = generate(100.0, &side(30.0), &[], CutMode::SideOnly, &config()).unwrap();
        assert_eq!(out.len(), 3);
        let used: Vec<f64> = out.iter().map(|a| a.used_width).collect();
        assert_eq!(used, vec![30.0, 60.0, 90.0]);
        let waste: Vec<f64> = out.iter().map(|a| a.waste).collect();
        assert_eq!(waste, vec![70.0, 40.0, 10.0]);
        assert_eq!(out[2].combination_label, "3 × Cup (1UPS)");
        assert!(out.iter().all(|a| a.bottom_entries.is_empty()));
    }

    #[test]
    fn test_side_only_stops_at_width() {
        let out = generate(100.0, &side(40.0), &[], CutMode::SideOnly, &config()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].side_count, 2);
    }

    #[test]
    fn test_side_only_strip_wider_than_reel() {
        let out = generate(20.0, &side(30.0), &[], CutMode::SideOnly, &config()).unwrap();
        assert!(out.is_empty());
    }

    // ==================== BottomOnly tests ====================

    #[test]
    fn test_bottom_only_per_size() {
        let bottoms = vec![
            BottomSize::new("B001", "B1", 15.0),
            BottomSize::new("B002", "B2", 40.0),
        ];
        let out = generate(50.0, &side(20.0), &bottoms, CutMode::BottomOnly, &config()).unwrap();
        // B1: 15, 30, 45 (60 > 50); B2: 40 (80 > 50)
        let labels: Vec<&str> = out.iter().map(|a| a.combination_label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "1 × Bottom (B1)",
                "2 × Bottom (B1)",
                "3 × Bottom (B1)",
                "1 × Bottom (B2)"
            ]
        );
        assert!(out.iter().all(|a| a.side_count == 0));
        assert_eq!(out[2].bottom_entries.len(), 3);
    }

    #[test]
    fn test_bottom_only_caps_repeats() {
        let bottoms = vec![BottomSize::new("B001", "Narrow", 5.0)];
        let out = generate(100.0, &side(20.0), &bottoms, CutMode::BottomOnly, &config()).unwrap();
        assert_eq!(out.len(), 4);
    }

    #[test]
    fn test_bottom_only_empty_catalog() {
        let out = generate(100.0, &side(20.0), &[], CutMode::BottomOnly, &config()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_unusable_bottom_skipped() {
        let bottoms = vec![BottomSize::new("B001", "Zero", 0.0)];
        let out = generate(100.0, &side(20.0), &bottoms, CutMode::BottomOnly, &config()).unwrap();
        assert!(out.is_empty());
    }

    // ==================== Both tests ====================

    #[test]
    fn test_both_mixed_feasibility() {
        let bottoms = vec![BottomSize::new("B001", "B1", 15.0)];
        let out = generate(50.0, &side(20.0), &bottoms, CutMode::Both, &config()).unwrap();

        // 2 sides + 1 bottom = 55 > 50
        assert!(!out
            .iter()
            .any(|a| a.side_count == 2 && a.bottom_entries.len() == 1));

        let full = out
            .iter()
            .find(|a| a.side_count == 1 && a.bottom_entries.len() == 2)
            .expect("1 side + 2 bottoms fits exactly");
        assert_eq!(full.used_width, 50.0);
        assert_eq!(full.efficiency_pct, 100.0);
        assert_eq!(full.combination_label, "1 × Cup (1UPS) + 2 × Bottom (B1)");
    }

    #[test]
    fn test_both_is_exhaustive() {
        let bottoms = vec![BottomSize::new("B001", "B1", 15.0)];
        let out = generate(50.0, &side(20.0), &bottoms, CutMode::Both, &config()).unwrap();

        let mut expected = Vec::new();
        for si in 0..=3u32 {
            for bi in 0..=4u32 {
                if (si, bi) != (0, 0) && si as f64 * 20.0 + bi as f64 * 15.0 <= 50.0 {
                    expected.push((si, bi));
                }
            }
        }
        let got: Vec<(u32, u32)> = out
            .iter()
            .map(|a| (a.side_count, a.bottom_entries.len() as u32))
            .collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_both_zero_count_labels() {
        let bottoms = vec![BottomSize::new("B001", "B1", 15.0)];
        let out = generate(50.0, &side(20.0), &bottoms, CutMode::Both, &config()).unwrap();
        let side_only = out.iter().find(|a| a.bottom_entries.is_empty()).unwrap();
        assert_eq!(side_only.combination_label, "1 × Cup (1UPS)");
        let bottom_only = out.iter().find(|a| a.side_count == 0).unwrap();
        assert_eq!(bottom_only.combination_label, "1 × Bottom (B1)");
    }

    #[test]
    fn test_both_empty_catalog_is_empty() {
        let out = generate(100.0, &side(30.0), &[], CutMode::Both, &config()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_exact_fit_survives_float_noise() {
        let out = generate(99.9, &side(33.3), &[], CutMode::SideOnly, &config()).unwrap();
        assert_eq!(out.len(), 3);
        assert_eq!(out[2].used_width, 99.9);
        assert_eq!(out[2].efficiency_pct, 100.0);
    }

    #[test]
    fn test_stored_width_never_exceeds_reel() {
        // 49.99905 would be stored as 50.0 on a 49.999cm reel
        let out = generate(49.999, &side(49.99905), &[], CutMode::SideOnly, &config()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_arrangement_fits() {
        let bottoms = vec![
            BottomSize::new("B001", "B1", 12.5),
            BottomSize::new("B002", "B2", 33.3),
            BottomSize::new("B003", "B3", 7.0),
        ];
        for mode in [CutMode::SideOnly, CutMode::BottomOnly, CutMode::Both] {
            let out = generate(97.0, &side(21.5), &bottoms, mode, &config()).unwrap();
            for a in &out {
                assert!(a.used_width <= 97.0, "{:?}", a);
                assert!((a.waste - (97.0 - a.used_width)).abs() < 0.011);
                assert!(a.efficiency_pct >= 0.0 && a.efficiency_pct <= 100.0);
            }
        }
    }

    // ==================== Input checks ====================

    #[test]
    fn test_zero_side_width_is_configuration_error() {
        let err = generate(100.0, &side(0.0), &[], CutMode::BottomOnly, &config()).unwrap_err();
        assert!(matches!(err, SlitError::Configuration { .. }));
    }

    #[test]
    fn test_zero_reel_width_is_validation_error() {
        let err = generate(0.0, &side(20.0), &[], CutMode::SideOnly, &config()).unwrap_err();
        assert!(matches!(err, SlitError::Validation { .. }));
    }
}
