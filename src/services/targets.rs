//! Top-N ranking of targeted locations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// Default truncation depth for the target ranking.
pub const DEFAULT_TOP_N: usize = 10;

/// One row of the target ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRow {
    pub target: String,
    pub launched: u64,
}

/// Group events by target, sum `launched`, sort descending by the sum and
/// keep the top `n` rows.
///
/// Events without a target are skipped (an absent group key forms no
/// group). The sort is stable, so targets with equal sums keep the order in
/// which they first appear in the input; re-running on the same input
/// yields the same rows in the same order.
pub fn compute_top_targets(events: &[AttackEvent], n: usize) -> Vec<TargetRow> {
    let mut rows: Vec<TargetRow> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for event in events {
        let Some(target) = event.target.as_deref() else {
            continue;
        };
        match index.get(target) {
            Some(&i) => rows[i].launched += event.launched,
            None => {
                index.insert(target, rows.len());
                rows.push(TargetRow {
                    target: target.to_string(),
                    launched: event.launched,
                });
            }
        }
    }

    rows.sort_by(|a, b| b.launched.cmp(&a.launched));
    rows.truncate(n);
    rows
}
