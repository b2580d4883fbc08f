//! Date-by-target pivot of launched counts per category.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// Presentation format for the pivot's date key.
const PIVOT_DATE_FORMAT: &str = "%d-%m-%Y";

/// One pivot row: the launched counts of a single (date, target) pair,
/// spread across the category columns of the parent [`AttackPivot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PivotRow {
    /// Calendar date formatted `DD-MM-YYYY`
    pub date: String,
    pub target: String,
    /// Summed launched count per category, aligned with
    /// [`AttackPivot::categories`]; cells without events hold 0
    pub launched: Vec<u64>,
    /// Row-wise sum of the category cells
    pub total: u64,
}

/// Wide table keyed by (date, target) with one column per observed weapon
/// category, reduced to the top rows by total launched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPivot {
    /// Distinct category values observed among the pivoted events, sorted.
    /// This is the explicit set of summed columns; `total` never picks up
    /// stray columns the schema might gain later.
    pub categories: Vec<String>,
    pub rows: Vec<PivotRow>,
}

impl AttackPivot {
    /// Pivot with no rows and no category columns ("no data").
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// Pivot events by (date, target) against category, summing `launched`
/// into each cell, and keep the `n` rows with the highest per-row total.
///
/// Events without a target form no pivot key and are skipped. Missing cells
/// count as 0 in the row total rather than propagating as null. The sort by
/// total is stable over the (date, target) key order, and the date key is
/// formatted `DD-MM-YYYY` for presentation.
pub fn compute_attack_pivot(events: &[AttackEvent], n: usize) -> AttackPivot {
    let mut categories: BTreeSet<&str> = BTreeSet::new();
    let mut cells: BTreeMap<(NaiveDate, &str), BTreeMap<&str, u64>> = BTreeMap::new();

    for event in events {
        let Some(target) = event.target.as_deref() else {
            continue;
        };
        categories.insert(event.category.as_str());
        *cells
            .entry((event.date(), target))
            .or_default()
            .entry(event.category.as_str())
            .or_insert(0) += event.launched;
    }

    let categories: Vec<String> = categories.into_iter().map(|c| c.to_string()).collect();

    let mut rows: Vec<PivotRow> = cells
        .into_iter()
        .map(|((date, target), row_cells)| {
            let launched: Vec<u64> = categories
                .iter()
                .map(|c| row_cells.get(c.as_str()).copied().unwrap_or(0))
                .collect();
            let total = launched.iter().sum();
            PivotRow {
                date: date.format(PIVOT_DATE_FORMAT).to_string(),
                target: target.to_string(),
                launched,
                total,
            }
        })
        .collect();

    // Stable sort: equal totals keep the ascending (date, target) key order.
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows.truncate(n);

    AttackPivot { categories, rows }
}
