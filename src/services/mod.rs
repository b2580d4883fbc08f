//! Aggregation pipeline deriving the dashboard views.
//!
//! Every derivation in this module is a pure function over the normalized
//! event records: no shared mutable state, empty input produces an empty
//! result rather than an error. All views are computed once at startup by
//! [`views::DashboardViews::build`] and held immutable for the life of the
//! process; only the date-range restriction of the daily series is
//! recomputed per request.

pub mod daily;
pub mod overview;
pub mod pivot;
pub mod sites;
pub mod summary;
pub mod targets;
pub mod views;

pub use daily::{compute_daily_series, filter_daily_series, DailyRow};
pub use overview::{compute_overview, CategoryTotal, Overview};
pub use pivot::{compute_attack_pivot, AttackPivot, PivotRow};
pub use sites::{compute_launch_sites, LaunchSite};
pub use summary::{compute_category_year_summary, CategoryYearRow};
pub use targets::{compute_top_targets, TargetRow, DEFAULT_TOP_N};
pub use views::DashboardViews;
