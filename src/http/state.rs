//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::DashboardViews;

/// Shared application state passed to all handlers.
///
/// The views are computed once before the server starts and are read-only
/// for the life of the process.
#[derive(Clone)]
pub struct AppState {
    pub views: Arc<DashboardViews>,
}

impl AppState {
    /// Create a new application state around the precomputed views.
    pub fn new(views: Arc<DashboardViews>) -> Self {
        Self { views }
    }
}
