//! Whole-dataset overview: totals and per-category breakdown.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// Launched total of one weapon category across the whole dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub launched: u64,
}

/// Dataset-wide headline numbers for the overview tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_events: usize,
    pub total_launched: u64,
    pub total_destroyed: u64,
    /// First and last event dates; `None` on an empty dataset.
    pub first_event: Option<NaiveDate>,
    pub last_event: Option<NaiveDate>,
    /// Per-category launched totals, ordered by category; also the input of
    /// the category pie chart.
    pub category_totals: Vec<CategoryTotal>,
}

/// Fold the whole dataset into its overview numbers.
pub fn compute_overview(events: &[AttackEvent]) -> Overview {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    let mut total_launched = 0u64;
    let mut total_destroyed = 0u64;
    let mut first_event: Option<NaiveDate> = None;
    let mut last_event: Option<NaiveDate> = None;

    for event in events {
        total_launched += event.launched;
        total_destroyed += event.destroyed;
        *totals.entry(event.category.as_str()).or_insert(0) += event.launched;

        let date = event.date();
        first_event = Some(first_event.map_or(date, |d| d.min(date)));
        last_event = Some(last_event.map_or(date, |d| d.max(date)));
    }

    Overview {
        total_events: events.len(),
        total_launched,
        total_destroyed,
        first_event,
        last_event,
        category_totals: totals
            .into_iter()
            .map(|(category, launched)| CategoryTotal {
                category: category.to_string(),
                launched,
            })
            .collect(),
    }
}
