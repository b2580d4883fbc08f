//! Manual coordinate overrides for launch sites with known-bad geocoding.
//!
//! The source data carries latitude/longitude per event, but a handful of
//! launch sites are missing or wrong in the upstream geocoding. Rather than
//! performing live geocoding, the loader patches coordinates from a small
//! explicit table keyed by site name. The table ships with the sites that
//! were hand-fixed upstream and can be extended from a TOML file without
//! code changes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use super::error::LoadError;

/// Coordinates hand-fixed upstream for the Moscow launch site.
const MOSCOW: (f64, f64) = (55.7558, 37.6173);

/// Override table mapping launch site name to (latitude, longitude).
#[derive(Debug, Clone)]
pub struct CoordinateOverrides {
    sites: BTreeMap<String, (f64, f64)>,
}

/// On-disk representation of the override table.
///
/// ```toml
/// [sites]
/// Moscow = [55.7558, 37.6173]
/// ```
#[derive(Debug, Deserialize)]
struct OverridesFile {
    sites: BTreeMap<String, [f64; 2]>,
}

impl Default for CoordinateOverrides {
    fn default() -> Self {
        let mut sites = BTreeMap::new();
        sites.insert("Moscow".to_string(), MOSCOW);
        Self { sites }
    }
}

impl CoordinateOverrides {
    /// Empty override table (no sites patched).
    pub fn empty() -> Self {
        Self {
            sites: BTreeMap::new(),
        }
    }

    /// Look up the override for a launch site, if one is configured.
    pub fn get(&self, launch_place: &str) -> Option<(f64, f64)> {
        self.sites.get(launch_place).copied()
    }

    /// Add or replace an override.
    pub fn insert(&mut self, launch_place: impl Into<String>, latitude: f64, longitude: f64) {
        self.sites.insert(launch_place.into(), (latitude, longitude));
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Parse a TOML override table, merged on top of the built-in defaults.
    ///
    /// Entries in the file win over defaults for the same site name.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let file: OverridesFile =
            toml::from_str(content).map_err(|e| LoadError::Overrides(e.to_string()))?;

        let mut overrides = Self::default();
        for (site, [lat, lon]) in file.sites {
            overrides.insert(site, lat, lon);
        }
        Ok(overrides)
    }

    /// Load a TOML override table from disk, merged on top of the defaults.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
