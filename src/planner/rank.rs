//! Deduplication, ranking and best-row flagging.

use std::collections::HashSet;

use crate::model::Arrangement;

/// Drop arrangements whose `(label, used width)` key was already seen.
///
/// Keeps the first occurrence and preserves insertion order.
pub fn dedup(arrangements: Vec<Arrangement>) -> Vec<Arrangement> {
    let mut seen = HashSet::with_capacity(arrangements.len());
    arrangements
        .into_iter()
        .filter(|a| seen.insert(a.key()))
        .collect()
}

/// Stable sort: efficiency descending, then waste ascending.
pub fn sort_by_efficiency(arrangements: &mut [Arrangement]) {
    arrangements.sort_by(|a, b| {
        b.efficiency_pct
            .total_cmp(&a.efficiency_pct)
            .then(a.waste.total_cmp(&b.waste))
    });
}

/// Flag every arrangement sharing the maximum efficiency.
pub fn mark_best(arrangements: &mut [Arrangement]) {
    let best = best_efficiency(arrangements);
    for a in arrangements.iter_mut() {
        a.best = best.is_some_and(|max| a.efficiency_pct == max);
    }
}

/// Maximum efficiency in a plan, if any.
pub fn best_efficiency(arrangements: &[Arrangement]) -> Option<f64> {
    arrangements
        .iter()
        .map(|a| a.efficiency_pct)
        .max_by(|a, b| a.total_cmp(b))
}

/// Dedup, sort and flag a generated set.
pub fn rank(arrangements: Vec<Arrangement>) -> Vec<Arrangement> {
    let mut ranked = dedup(arrangements);
    sort_by_efficiency(&mut ranked);
    mark_best(&mut ranked);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(label: &str, used: f64, width: f64) -> Arrangement {
        let waste = width - used;
        Arrangement {
            combination_label: label.to_string(),
            side_name: "Cup".to_string(),
            side_count: 1,
            side_width: used,
            bottom_entries: Vec::new(),
            used_width: used,
            waste,
            efficiency_pct: (used / width * 10000.0).round() / 100.0,
            best: false,
        }
    }

    #[test]
    fn test_dedup_keeps_first() {
        let mut first = row("1 × Cup (1UPS)", 30.0, 100.0);
        first.side_name = "first".to_string();
        let mut second = row("1 × Cup (1UPS)", 30.0, 100.0);
        second.side_name = "second".to_string();
        let other = row("1 × Cup (1UPS)", 31.0, 100.0);

        let out = dedup(vec![first, second, other]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].side_name, "first");
        assert_eq!(out[1].used_width, 31.0);
    }

    #[test]
    fn test_sort_efficiency_then_waste() {
        let mut rows = vec![
            row("a", 30.0, 100.0),
            row("b", 90.0, 100.0),
            row("c", 60.0, 100.0),
        ];
        // Same efficiency as "c" but less waste
        let mut d = row("d", 60.0, 100.0);
        d.waste = 39.0;
        rows.push(d);

        sort_by_efficiency(&mut rows);
        let labels: Vec<&str> = rows.iter().map(|r| r.combination_label.as_str()).collect();
        assert_eq!(labels, vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn test_mark_best_flags_all_ties() {
        let mut rows = rank(vec![
            row("a", 50.0, 50.0),
            row("b", 20.0, 50.0),
            row("c", 50.0, 50.0),
        ]);
        mark_best(&mut rows);
        let best: Vec<&str> = rows
            .iter()
            .filter(|r| r.best)
            .map(|r| r.combination_label.as_str())
            .collect();
        assert_eq!(best, vec!["a", "c"]);
        assert!(!rows[2].best);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
        assert_eq!(best_efficiency(&[]), None);
    }

    #[test]
    fn test_rank_is_non_increasing() {
        let rows = rank(vec![
            row("a", 10.0, 70.0),
            row("b", 70.0, 70.0),
            row("c", 35.0, 70.0),
            row("b", 70.0, 70.0),
        ]);
        assert_eq!(rows.len(), 3);
        for pair in rows.windows(2) {
            assert!(pair[0].efficiency_pct >= pair[1].efficiency_pct);
            if pair[0].efficiency_pct == pair[1].efficiency_pct {
                assert!(pair[0].waste <= pair[1].waste);
            }
        }
    }
}
