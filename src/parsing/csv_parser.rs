//! CSV parsing and normalization of the attack-records source table.

use std::collections::BTreeSet;
use std::path::Path;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

use crate::models::{AttackEvent, UNKNOWN_CATEGORY};

use super::error::LoadError;
use super::overrides::CoordinateOverrides;

/// Columns the source table must carry, by fixed name.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "time_start",
    "launched",
    "destroyed",
    "destroyed_ratio",
    "category",
    "launch_place",
    "target",
    "latitude",
    "longitude",
];

/// Timestamp formats accepted for `time_start`, tried in order.
const TIME_START_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse the attacks CSV file into a Polars DataFrame.
///
/// Validates that every required column is present and casts columns to the
/// expected types in case they were inferred incorrectly (e.g. a count
/// column read as i64, or a timestamp column read as datetime).
pub fn parse_attacks_csv(csv_path: &Path) -> Result<DataFrame, LoadError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()?;

    // Get existing column names
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut lazy_df = df.lazy();

    // Numeric columns that should be Float64 (may be inferred as i64 if no decimal point)
    let float_columns = [
        "launched",
        "destroyed",
        "destroyed_ratio",
        "latitude",
        "longitude",
    ];

    for col_name in float_columns {
        lazy_df = lazy_df.with_column(
            when(col(col_name).is_not_null())
                .then(col(col_name).cast(DataType::Float64))
                .otherwise(lit(NULL).cast(DataType::Float64))
                .alias(col_name),
        );
    }

    // Text columns that should be String (time_start may be inferred as datetime)
    let string_columns = ["time_start", "category", "launch_place", "target"];

    for col_name in string_columns {
        lazy_df = lazy_df.with_column(col(col_name).cast(DataType::String));
    }

    let df = lazy_df.collect()?;

    Ok(df)
}

/// Convert the validated DataFrame into normalized [`AttackEvent`] records.
///
/// Normalization rules:
/// - rows with a null `launched` count are dropped entirely;
/// - `time_start` must parse for every retained row, otherwise the whole
///   load fails;
/// - a null `category` becomes [`UNKNOWN_CATEGORY`];
/// - a null `destroyed` count is read as 0;
/// - coordinates are patched from the override table when the launch site
///   name has an entry.
pub fn dataframe_to_events(
    df: &DataFrame,
    overrides: &CoordinateOverrides,
) -> Result<Vec<AttackEvent>, LoadError> {
    let height = df.height();

    let time_starts = df.column("time_start")?.str()?;
    let launched = df.column("launched")?.f64()?;
    let destroyed = df.column("destroyed")?.f64()?;
    let destroyed_ratios = df.column("destroyed_ratio")?.f64()?;
    let categories = df.column("category")?.str()?;
    let launch_places = df.column("launch_place")?.str()?;
    let targets = df.column("target")?.str()?;
    let latitudes = df.column("latitude")?.f64()?;
    let longitudes = df.column("longitude")?.f64()?;

    let mut events = Vec::with_capacity(height);

    for i in 0..height {
        // Partial records are not partially trusted: no launched count, no event.
        let Some(launched_count) = launched.get(i) else {
            continue;
        };

        let time_start = match time_starts.get(i) {
            Some(raw) => {
                parse_time_start(raw).ok_or_else(|| LoadError::UnparsableDate {
                    row: i,
                    value: raw.to_string(),
                })?
            }
            None => return Err(LoadError::MissingDate { row: i }),
        };

        let category = categories
            .get(i)
            .map(|s| s.to_string())
            .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());

        let launch_place = launch_places.get(i).map(|s| s.to_string());
        let mut latitude = latitudes.get(i);
        let mut longitude = longitudes.get(i);

        if let Some(place) = launch_place.as_deref() {
            if let Some((lat, lon)) = overrides.get(place) {
                latitude = Some(lat);
                longitude = Some(lon);
            }
        }

        events.push(AttackEvent {
            time_start,
            year: time_start.year(),
            launched: launched_count.round() as u64,
            destroyed: destroyed.get(i).map(|d| d.round() as u64).unwrap_or(0),
            destroyed_ratio: destroyed_ratios.get(i),
            category,
            launch_place,
            latitude,
            longitude,
            target: targets.get(i).map(|s| s.to_string()),
        });
    }

    Ok(events)
}

/// Load and normalize the full attack-records table from a CSV file.
pub fn load_attacks(
    csv_path: &Path,
    overrides: &CoordinateOverrides,
) -> Result<Vec<AttackEvent>, LoadError> {
    let df = parse_attacks_csv(csv_path)?;
    let events = dataframe_to_events(&df, overrides)?;

    // Operator diagnostic only; not part of the data contract.
    let launch_places: BTreeSet<&str> = events
        .iter()
        .filter_map(|e| e.launch_place.as_deref())
        .collect();
    tracing::debug!(
        distinct = launch_places.len(),
        sites = ?launch_places,
        "distinct launch_place values in source"
    );
    tracing::info!(
        rows = df.height(),
        events = events.len(),
        "loaded attack records"
    );

    Ok(events)
}

fn parse_time_start(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    for format in TIME_START_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    // Date-only values are midnight timestamps.
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "time_start,launched,destroyed,destroyed_ratio,category,launch_place,target,latitude,longitude";

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_attacks_csv_schema() {
        let file = write_csv(&[
            "2022-03-01 04:00:00,5,3,0.6,cruise missile,Black Sea,Kyiv,43.5,33.0",
        ]);
        let df = parse_attacks_csv(file.path()).unwrap();

        assert_eq!(df.height(), 1);
        let col_names = df.get_column_names();
        for required in REQUIRED_COLUMNS {
            assert!(col_names.iter().any(|s| s.as_str() == required));
        }
        // Integral counts still land as Float64
        let launched = df.column("launched").unwrap().f64().unwrap();
        assert_eq!(launched.get(0), Some(5.0));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(file, "time_start,launched,destroyed").unwrap();
        writeln!(file, "2022-03-01 04:00:00,5,3").unwrap();
        file.flush().unwrap();

        let err = parse_attacks_csv(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn test_rows_without_launched_are_dropped() {
        let file = write_csv(&[
            "2022-03-01 04:00:00,5,3,0.6,cruise missile,Black Sea,Kyiv,43.5,33.0",
            "not even a date,,,,,,,,",
            "2022-03-02 10:00:00,2,0,0.0,UAV,Bryansk,Chernihiv,52.4,34.3",
        ]);
        let events = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap();

        // The malformed row has no launched count, so its date is never parsed.
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].launched, 5);
        assert_eq!(events[1].launched, 2);
    }

    #[test]
    fn test_unparsable_date_on_retained_row_is_fatal() {
        let file = write_csv(&[
            "garbage,5,3,0.6,cruise missile,Black Sea,Kyiv,43.5,33.0",
        ]);
        let err = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap_err();
        assert!(matches!(err, LoadError::UnparsableDate { row: 0, .. }));
    }

    #[test]
    fn test_null_category_becomes_unknown() {
        let file = write_csv(&[
            "2023-05-01 02:00:00,7,4,0.57,,Kursk,Sumy,51.7,36.2",
        ]);
        let events = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].category, UNKNOWN_CATEGORY);
        assert_eq!(events[0].year, 2023);
    }

    #[test]
    fn test_missing_destroyed_reads_as_zero() {
        let file = write_csv(&[
            "2022-03-01 04:00:00,5,,,cruise missile,Black Sea,Kyiv,43.5,33.0",
        ]);
        let events = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap();

        assert_eq!(events[0].destroyed, 0);
        assert_eq!(events[0].destroyed_ratio, None);
    }

    #[test]
    fn test_coordinate_override_applied_by_site_name() {
        let file = write_csv(&[
            "2022-03-01 04:00:00,5,3,0.6,ballistic missile,Moscow,Kyiv,,",
            "2022-03-01 05:00:00,1,0,0.0,UAV,Black Sea,Odesa,43.5,33.0",
        ]);
        let events = load_attacks(file.path(), &CoordinateOverrides::default()).unwrap();

        assert_eq!(events[0].latitude, Some(55.7558));
        assert_eq!(events[0].longitude, Some(37.6173));
        // Sites without an override keep their source coordinates.
        assert_eq!(events[1].latitude, Some(43.5));
    }

    #[test]
    fn test_date_only_time_start_parses_to_midnight() {
        let file = write_csv(&[
            "2022-03-01,5,3,0.6,cruise missile,Black Sea,Kyiv,43.5,33.0",
        ]);
        let events = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap();
        assert_eq!(
            events[0].time_start,
            NaiveDate::from_ymd_opt(2022, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_table_yields_no_events() {
        let file = write_csv(&[]);
        let events = load_attacks(file.path(), &CoordinateOverrides::empty()).unwrap();
        assert!(events.is_empty());
    }
}
