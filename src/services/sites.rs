//! Geographic launch-site points for the map view.

use serde::{Deserialize, Serialize};

use crate::models::AttackEvent;

/// One plottable launch point: an event with known coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchSite {
    pub launch_place: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub launched: u64,
}

/// Project events onto geo points, keeping only events whose launch
/// coordinates are known (after the loader's override patching).
pub fn compute_launch_sites(events: &[AttackEvent]) -> Vec<LaunchSite> {
    events
        .iter()
        .filter_map(|event| {
            let (Some(latitude), Some(longitude)) = (event.latitude, event.longitude) else {
                return None;
            };
            Some(LaunchSite {
                launch_place: event.launch_place.clone(),
                latitude,
                longitude,
                category: event.category.clone(),
                launched: event.launched,
            })
        })
        .collect()
}
