//! Category-by-year summary table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// One row of the summary: all events of one (category, year) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryYearRow {
    pub category: String,
    pub year: i32,
    pub launched: u64,
    /// Mean destroyed ratio, rounded to 2 decimal places; `None` when no
    /// event of the group carried a ratio.
    pub destroyed_ratio: Option<f64>,
}

/// Group events by (category, year), summing `launched` and averaging
/// `destroyed_ratio` rounded to 2 decimal places.
///
/// No group key is ever dropped: uncategorized events arrive here already
/// normalized to the "Unknown" category by the loader, so they stay visible
/// in the summary. Rows are ordered by (category, year).
pub fn compute_category_year_summary(events: &[AttackEvent]) -> Vec<CategoryYearRow> {
    struct GroupAccumulator {
        launched: u64,
        ratio_sum: f64,
        ratio_count: usize,
    }

    let mut groups: BTreeMap<(String, i32), GroupAccumulator> = BTreeMap::new();

    for event in events {
        let group = groups
            .entry((event.category.clone(), event.year))
            .or_insert(GroupAccumulator {
                launched: 0,
                ratio_sum: 0.0,
                ratio_count: 0,
            });
        group.launched += event.launched;
        if let Some(ratio) = event.destroyed_ratio {
            group.ratio_sum += ratio;
            group.ratio_count += 1;
        }
    }

    groups
        .into_iter()
        .map(|((category, year), acc)| CategoryYearRow {
            category,
            year,
            launched: acc.launched,
            destroyed_ratio: (acc.ratio_count > 0)
                .then(|| round2(acc.ratio_sum / acc.ratio_count as f64)),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(year: i32, category: Option<&str>, launched: u64, ratio: Option<f64>) -> AttackEvent {
        let time_start = NaiveDate::from_ymd_opt(year, 6, 15)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        AttackEvent {
            time_start,
            year,
            launched,
            destroyed: 0,
            destroyed_ratio: ratio,
            category: category.unwrap_or(crate::models::UNKNOWN_CATEGORY).to_string(),
            launch_place: None,
            latitude: None,
            longitude: None,
            target: None,
        }
    }

    #[test]
    fn test_one_row_per_category_year_pair() {
        let events = vec![
            event(2022, Some("UAV"), 5, Some(0.5)),
            event(2022, Some("UAV"), 3, Some(0.7)),
            event(2023, Some("UAV"), 2, None),
            event(2022, Some("cruise missile"), 8, Some(0.25)),
        ];
        let summary = compute_category_year_summary(&events);

        assert_eq!(summary.len(), 3);
        let uav_2022 = summary
            .iter()
            .find(|r| r.category == "UAV" && r.year == 2022)
            .unwrap();
        assert_eq!(uav_2022.launched, 8);
        assert_eq!(uav_2022.destroyed_ratio, Some(0.6));
    }

    #[test]
    fn test_ratio_is_rounded_to_two_decimals() {
        let events = vec![
            event(2022, Some("UAV"), 1, Some(1.0)),
            event(2022, Some("UAV"), 1, Some(0.0)),
            event(2022, Some("UAV"), 1, Some(0.0)),
        ];
        let summary = compute_category_year_summary(&events);
        // 1/3 rounds to 0.33 exactly
        assert_eq!(summary[0].destroyed_ratio, Some(0.33));
    }

    #[test]
    fn test_unknown_category_is_retained() {
        // A row with a null source category lands under "Unknown" with its
        // launched count intact.
        let events = vec![event(2023, None, 7, None)];
        let summary = compute_category_year_summary(&events);

        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].category, crate::models::UNKNOWN_CATEGORY);
        assert_eq!(summary[0].year, 2023);
        assert_eq!(summary[0].launched, 7);
    }

    #[test]
    fn test_rows_ordered_by_category_then_year() {
        let events = vec![
            event(2023, Some("UAV"), 1, None),
            event(2022, Some("UAV"), 1, None),
            event(2022, Some("ballistic missile"), 1, None),
        ];
        let summary = compute_category_year_summary(&events);

        let keys: Vec<(&str, i32)> = summary
            .iter()
            .map(|r| (r.category.as_str(), r.year))
            .collect();
        // Lexicographic (byte-order) on category, then year
        assert_eq!(
            keys,
            vec![
                ("UAV", 2022),
                ("UAV", 2023),
                ("ballistic missile", 2022),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_category_year_summary(&[]).is_empty());
    }
}
