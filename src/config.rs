//! Server configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default CSV source when `DATA_PATH` is not set.
const DEFAULT_DATA_PATH: &str = "missiles_attacks_cleaned.csv";

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
    /// Path to the attacks CSV source
    pub data_path: PathBuf,
    /// Optional TOML file extending the coordinate override table
    pub overrides_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read the configuration from the environment, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            overrides_path: env::var("OVERRIDES_PATH").ok().map(PathBuf::from),
        }
    }

    /// Socket address string for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
