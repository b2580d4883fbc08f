//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The view row types are re-exported from the services module since they
//! already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export view types that are already serializable
pub use crate::services::{
    // Pivot
    AttackPivot,
    PivotRow,
    // Overview
    CategoryTotal,
    Overview,
    // Summary
    CategoryYearRow,
    // Daily series
    DailyRow,
    // Geography
    LaunchSite,
    // Target ranking
    TargetRow,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Number of normalized events backing the views
    pub events: usize,
}

/// Query parameters for the daily series endpoint.
///
/// Both bounds are optional and inclusive; an absent bound defaults to the
/// corresponding end of the series.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DailySeriesQuery {
    #[serde(default)]
    pub start: Option<NaiveDate>,
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Daily series response, possibly restricted to a date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySeriesResponse {
    pub rows: Vec<DailyRow>,
    pub total: usize,
    /// Explicit "no data" marker for an empty slice, so the frontend renders
    /// a neutral placeholder instead of an empty chart.
    pub no_data: bool,
}

/// Query parameters for the top-N endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TopQuery {
    /// Truncation depth (default: 10)
    #[serde(default)]
    pub n: Option<usize>,
}

/// Category-year summary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub rows: Vec<CategoryYearRow>,
    pub total: usize,
}

/// Target ranking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetRankingResponse {
    pub targets: Vec<TargetRow>,
    pub total: usize,
}

/// Launch sites response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSitesResponse {
    pub sites: Vec<LaunchSite>,
    pub total: usize,
}
