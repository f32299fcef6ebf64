use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub overpass: OverpassSettings,
    #[serde(default)]
    pub ingest: IngestSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverpassSettings {
    #[serde(default = "default_overpass_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OverpassSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for OverpassSettings {
    fn default() -> Self {
        Self {
            endpoint: default_overpass_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestSettings {
    /// Center used when the caller supplies no other location
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

impl Default for IngestSettings {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            radius_km: default_radius_km(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_overpass_endpoint() -> String {
    "https://overpass-api.de/api/interpreter".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_latitude() -> f64 {
    40.7128
}
fn default_longitude() -> f64 {
    -74.0060
}
fn default_radius_km() -> f64 {
    5.0
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PARKLAND_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PARKLAND_)
            // e.g., PARKLAND_OVERPASS__TIMEOUT_SECS -> overpass.timeout_secs
            .add_source(
                Environment::with_prefix("PARKLAND")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PARKLAND")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
