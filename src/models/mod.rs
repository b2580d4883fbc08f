//! Domain model for normalized attack event records.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sentinel category assigned to events whose source category is missing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One normalized attack event record.
///
/// Produced by the loader from a raw CSV row; rows without a `launched`
/// count never become events. `time_start` is always parseable (the loader
/// fails the whole load otherwise) and `category` is never empty (missing
/// categories are replaced with [`UNKNOWN_CATEGORY`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackEvent {
    /// Launch timestamp of the event
    pub time_start: NaiveDateTime,
    /// Calendar year of `time_start`, derived at load time
    pub year: i32,
    /// Count of objects launched in this event
    pub launched: u64,
    /// Count of objects intercepted/destroyed (missing values read as 0)
    pub destroyed: u64,
    /// Fraction destroyed, independently supplied by the source
    pub destroyed_ratio: Option<f64>,
    /// Weapon category
    pub category: String,
    /// Human-readable launch site name
    pub launch_place: Option<String>,
    /// Launch site latitude, possibly patched from the override table
    pub latitude: Option<f64>,
    /// Launch site longitude, possibly patched from the override table
    pub longitude: Option<f64>,
    /// Human-readable target location
    pub target: Option<String>,
}

impl AttackEvent {
    /// Calendar date of the launch.
    pub fn date(&self) -> NaiveDate {
        self.time_start.date()
    }

    /// Whether both launch coordinates are known.
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }
}
