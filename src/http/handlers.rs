//! HTTP handlers for the REST API.
//!
//! Each handler is a read of the precomputed views. The daily series
//! handler is the only one that recomputes per request by default (the
//! date-range restriction), and that slice is request-scoped; the top-N
//! endpoints re-derive their ranking only when a non-default depth is
//! requested.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::services::{compute_attack_pivot, compute_top_targets, filter_daily_series};

use super::dto::{
    AttackPivot, DailySeriesQuery, DailySeriesResponse, HealthResponse, LaunchSitesResponse,
    Overview, SummaryResponse, TargetRankingResponse, TopQuery,
};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and serving data.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        events: state.views.overview.total_events,
    }))
}

/// GET /v1/overview
///
/// Dataset-wide totals and per-category breakdown.
pub async fn get_overview(State(state): State<AppState>) -> HandlerResult<Overview> {
    Ok(Json(state.views.overview.clone()))
}

/// GET /v1/daily?start=YYYY-MM-DD&end=YYYY-MM-DD
///
/// The daily time series, restricted to the inclusive `[start, end]` range
/// when bounds are given. An empty slice is reported as `no_data`, never as
/// an error.
pub async fn get_daily_series(
    State(state): State<AppState>,
    Query(query): Query<DailySeriesQuery>,
) -> HandlerResult<DailySeriesResponse> {
    if let (Some(start), Some(end)) = (query.start, query.end) {
        if start > end {
            return Err(AppError::BadRequest(format!(
                "start {} is after end {}",
                start, end
            )));
        }
    }

    let series = &state.views.daily;
    let rows = match (query.start, query.end) {
        (None, None) => series.clone(),
        (start, end) => {
            // An absent bound defaults to the matching end of the series.
            let first = series.first().map(|r| r.date);
            let last = series.last().map(|r| r.date);
            match (start.or(first), end.or(last)) {
                (Some(start), Some(end)) => filter_daily_series(series, start, end),
                // Empty series: nothing to restrict.
                _ => Vec::new(),
            }
        }
    };

    let total = rows.len();
    Ok(Json(DailySeriesResponse {
        rows,
        total,
        no_data: total == 0,
    }))
}

/// GET /v1/summary
///
/// Category-by-year summary table.
pub async fn get_summary(State(state): State<AppState>) -> HandlerResult<SummaryResponse> {
    let rows = state.views.summary.clone();
    let total = rows.len();
    Ok(Json(SummaryResponse { rows, total }))
}

/// GET /v1/targets/top?n=
///
/// Top-N most targeted locations. The default depth is served from the
/// precomputed ranking; other depths are re-derived from the records.
pub async fn get_top_targets(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> HandlerResult<TargetRankingResponse> {
    let targets = match query.n {
        None => state.views.top_targets.clone(),
        Some(n) => compute_top_targets(&state.views.events, n),
    };
    let total = targets.len();
    Ok(Json(TargetRankingResponse { targets, total }))
}

/// GET /v1/pivot/top?n=
///
/// Date-by-target pivot of launched counts per category, reduced to the
/// top-N rows by total.
pub async fn get_attack_pivot(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> HandlerResult<AttackPivot> {
    let pivot = match query.n {
        None => state.views.pivot.clone(),
        Some(n) => compute_attack_pivot(&state.views.events, n),
    };
    Ok(Json(pivot))
}

/// GET /v1/launch-sites
///
/// Geographic launch points for the map view.
pub async fn get_launch_sites(State(state): State<AppState>) -> HandlerResult<LaunchSitesResponse> {
    let sites = state.views.launch_sites.clone();
    let total = sites.len();
    Ok(Json(LaunchSitesResponse { sites, total }))
}
