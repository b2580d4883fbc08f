//! Daily time series of launched/destroyed counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// One row of the daily series: all events of one calendar date folded
/// together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRow {
    pub date: NaiveDate,
    pub launched: u64,
    pub destroyed: u64,
    /// Mean of the destroyed ratios supplied that day; `None` when no event
    /// of the day carried a ratio.
    pub destroyed_ratio: Option<f64>,
}

/// Group events by calendar date, summing `launched` and `destroyed` and
/// averaging `destroyed_ratio` across the events of each day.
///
/// The result holds exactly the distinct dates present in the input, in
/// ascending order; days without events are not gap-filled.
pub fn compute_daily_series(events: &[AttackEvent]) -> Vec<DailyRow> {
    struct DayAccumulator {
        launched: u64,
        destroyed: u64,
        ratio_sum: f64,
        ratio_count: usize,
    }

    let mut days: BTreeMap<NaiveDate, DayAccumulator> = BTreeMap::new();

    for event in events {
        let day = days.entry(event.date()).or_insert(DayAccumulator {
            launched: 0,
            destroyed: 0,
            ratio_sum: 0.0,
            ratio_count: 0,
        });
        day.launched += event.launched;
        day.destroyed += event.destroyed;
        if let Some(ratio) = event.destroyed_ratio {
            day.ratio_sum += ratio;
            day.ratio_count += 1;
        }
    }

    days.into_iter()
        .map(|(date, acc)| DailyRow {
            date,
            launched: acc.launched,
            destroyed: acc.destroyed,
            destroyed_ratio: (acc.ratio_count > 0)
                .then(|| acc.ratio_sum / acc.ratio_count as f64),
        })
        .collect()
}

/// Restrict the daily series to rows whose date falls within
/// `[start, end]`, both bounds inclusive.
///
/// Pure and idempotent; an empty intersection yields an empty vector which
/// the caller must surface as "no data" rather than feed into rendering.
pub fn filter_daily_series(series: &[DailyRow], start: NaiveDate, end: NaiveDate) -> Vec<DailyRow> {
    series
        .iter()
        .filter(|row| row.date >= start && row.date <= end)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn event(date: (i32, u32, u32), launched: u64, ratio: Option<f64>) -> AttackEvent {
        let time_start = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(3, 0, 0)
            .unwrap();
        AttackEvent {
            time_start,
            year: time_start.year(),
            launched,
            destroyed: launched / 2,
            destroyed_ratio: ratio,
            category: "UAV".to_string(),
            launch_place: None,
            latitude: None,
            longitude: None,
            target: Some("Kyiv".to_string()),
        }
    }

    #[test]
    fn test_daily_series_sums_and_averages_per_day() {
        // Three events on 2022-03-01 with launched 5, 3, 2 and ratios
        // 0.2, 0.4, 0.6 must fold into launched=10, ratio=0.4.
        let events = vec![
            event((2022, 3, 1), 5, Some(0.2)),
            event((2022, 3, 1), 3, Some(0.4)),
            event((2022, 3, 1), 2, Some(0.6)),
        ];
        let series = compute_daily_series(&events);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2022, 3, 1).unwrap());
        assert_eq!(series[0].launched, 10);
        assert!((series[0].destroyed_ratio.unwrap() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_daily_series_preserves_total_launched() {
        let events = vec![
            event((2022, 3, 1), 5, None),
            event((2022, 3, 3), 7, Some(0.5)),
            event((2022, 3, 3), 1, None),
            event((2022, 4, 10), 12, Some(1.0)),
        ];
        let series = compute_daily_series(&events);

        let series_total: u64 = series.iter().map(|r| r.launched).sum();
        let events_total: u64 = events.iter().map(|e| e.launched).sum();
        assert_eq!(series_total, events_total);
    }

    #[test]
    fn test_daily_series_dates_are_distinct_and_ascending() {
        let events = vec![
            event((2022, 5, 2), 1, None),
            event((2022, 3, 1), 2, None),
            event((2022, 5, 2), 3, None),
        ];
        let series = compute_daily_series(&events);

        let dates: Vec<NaiveDate> = series.iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2022, 5, 2).unwrap(),
            ]
        );
    }

    #[test]
    fn test_daily_series_ratio_none_when_no_event_has_one() {
        let events = vec![event((2022, 3, 1), 5, None)];
        let series = compute_daily_series(&events);
        assert_eq!(series[0].destroyed_ratio, None);
    }

    #[test]
    fn test_daily_series_empty_input() {
        assert!(compute_daily_series(&[]).is_empty());
    }

    #[test]
    fn test_filter_is_inclusive_restriction() {
        let events = vec![
            event((2022, 3, 1), 1, None),
            event((2022, 3, 5), 2, None),
            event((2022, 3, 9), 3, None),
        ];
        let series = compute_daily_series(&events);

        let start = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 5).unwrap();
        let filtered = filter_daily_series(&series, start, end);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].date, start);
        assert_eq!(filtered[1].date, end);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = vec![
            event((2022, 3, 1), 1, None),
            event((2022, 3, 5), 2, None),
        ];
        let series = compute_daily_series(&events);

        let start = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 3, 3).unwrap();
        let once = filter_daily_series(&series, start, end);
        let twice = filter_daily_series(&once, start, end);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_empty_intersection_is_empty_not_error() {
        let events = vec![event((2022, 3, 1), 1, None)];
        let series = compute_daily_series(&events);

        let filtered = filter_daily_series(
            &series,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        );
        assert!(filtered.is_empty());
    }
}
