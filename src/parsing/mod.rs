//! Loading and normalization of raw attack event records.
//!
//! The loader reads the delimited source file into a Polars DataFrame,
//! validates the schema, and converts rows into typed [`AttackEvent`]
//! records. Every error in this module is fatal at startup: the service
//! has nothing useful to serve with partial data.
//!
//! [`AttackEvent`]: crate::models::AttackEvent

pub mod csv_parser;
pub mod error;
pub mod overrides;

pub use csv_parser::{dataframe_to_events, load_attacks, parse_attacks_csv, REQUIRED_COLUMNS};
pub use error::LoadError;
pub use overrides::CoordinateOverrides;
