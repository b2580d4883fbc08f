//! # Raidwatch Backend
//!
//! Analytics backend for a missile/drone attack-records dashboard.
//!
//! The service loads a CSV of attack event records once at startup,
//! normalizes it, derives a fixed set of read-only aggregate views, and
//! exposes them over a REST API via Axum for the dashboard frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: The normalized attack event record type
//! - [`parsing`]: CSV loading, type normalization, and coordinate overrides
//! - [`services`]: Pure aggregation pipeline producing the derived views
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`config`]: Environment-driven server configuration
//!
//! All derived views are computed synchronously before the server becomes
//! interactive and are shared immutably across requests; the only
//! per-request computation is a date-range restriction of the daily series.

pub mod config;
pub mod http;
pub mod models;
pub mod parsing;
pub mod services;
