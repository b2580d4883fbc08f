//! HTTP server module for the raidwatch backend.
//!
//! This module provides an axum-based HTTP server that exposes the
//! precomputed dashboard views as a REST API. The frontend owns tab
//! navigation and chart rendering; this layer only serializes the derived
//! tables and re-runs the date-range filter of the daily series on request.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
