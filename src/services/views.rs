//! Process-wide container of the precomputed dashboard views.

use crate::models::AttackEvent;

use super::daily::{compute_daily_series, DailyRow};
use super::overview::{compute_overview, Overview};
use super::pivot::{compute_attack_pivot, AttackPivot};
use super::sites::{compute_launch_sites, LaunchSite};
use super::summary::{compute_category_year_summary, CategoryYearRow};
use super::targets::{compute_top_targets, TargetRow, DEFAULT_TOP_N};

/// Every derived view of the dataset, computed once at startup from the
/// normalized event records and never mutated afterwards.
///
/// Handlers share this structure read-only behind an `Arc`; the only thing
/// recomputed per request is the date-filtered slice of `daily`, which is
/// request-scoped.
#[derive(Debug, Clone)]
pub struct DashboardViews {
    /// The normalized records the views were derived from, kept for
    /// re-deriving the top-N views at a non-default depth
    pub events: Vec<AttackEvent>,
    pub overview: Overview,
    pub daily: Vec<DailyRow>,
    pub summary: Vec<CategoryYearRow>,
    pub top_targets: Vec<TargetRow>,
    pub pivot: AttackPivot,
    pub launch_sites: Vec<LaunchSite>,
}

impl DashboardViews {
    /// Derive all views from the normalized table.
    ///
    /// An empty table produces empty views across the board; downstream
    /// rendering treats that as "no data", never as an error.
    pub fn build(events: Vec<AttackEvent>) -> Self {
        Self {
            overview: compute_overview(&events),
            daily: compute_daily_series(&events),
            summary: compute_category_year_summary(&events),
            top_targets: compute_top_targets(&events, DEFAULT_TOP_N),
            pivot: compute_attack_pivot(&events, DEFAULT_TOP_N),
            launch_sites: compute_launch_sites(&events),
            events,
        }
    }
}
