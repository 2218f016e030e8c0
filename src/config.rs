//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::dataset::GeneratorSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_data_path")]
    pub output_path: String,

    #[serde(default = "default_record_count")]
    pub record_count: usize,

    #[serde(default = "default_first_id")]
    pub first_id: u64,

    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    #[serde(default = "default_end_date")]
    pub end_date: NaiveDate,

    /// Fixed RNG seed for reproducible datasets
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_data_path() -> String {
    "internship_data.csv".to_string()
}

fn default_record_count() -> usize {
    5000
}

fn default_first_id() -> u64 {
    10000
}

fn default_start_date() -> NaiveDate {
    GeneratorSettings::default().start_date
}

fn default_end_date() -> NaiveDate {
    GeneratorSettings::default().end_date
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: default_data_path(),
            record_count: default_record_count(),
            first_id: default_first_id(),
            start_date: default_start_date(),
            end_date: default_end_date(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Generator settings with the configured count, ids and date range
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            record_count: self.record_count,
            first_id: self.first_id,
            start_date: self.start_date,
            end_date: self.end_date,
            ..Default::default()
        }
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_data_path")]
    pub data_path: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl DashboardConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from an explicit path, else default locations, else environment
    ///
    /// Returns the config together with the file it came from, if any. A
    /// config file that exists but cannot be read or parsed is an error, so a
    /// typo never silently falls back to defaults.
    pub fn load_default(
        explicit: Option<&Path>,
    ) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_with_env(path)?;
            return Ok((config, Some(path.to_path_buf())));
        }

        let candidates: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("internship-insights").join("config.toml")),
            Some(PathBuf::from("./internship.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&candidates)
    }

    /// Load the first candidate file that exists
    fn load_first(candidates: &[PathBuf]) -> Result<(Self, Option<PathBuf>), ConfigError> {
        match candidates.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                Ok((config, Some(path.clone())))
            }
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Generator overrides
        if let Some(path) = lookup("INTERNSHIP_OUTPUT") {
            self.generator.output_path = path;
        }
        if let Some(count) = lookup("INTERNSHIP_RECORDS").and_then(|s| s.parse().ok()) {
            self.generator.record_count = count;
        }
        if let Some(seed) = lookup("INTERNSHIP_SEED").and_then(|s| s.parse().ok()) {
            self.generator.seed = Some(seed);
        }

        // Dashboard overrides
        if let Some(path) = lookup("INTERNSHIP_DATA") {
            self.dashboard.data_path = path;
        }
        if let Some(host) = lookup("INTERNSHIP_HOST") {
            self.dashboard.host = host;
        }
        // Hosting platforms hand out the port through PORT
        if let Some(port) = lookup("PORT").and_then(|s| s.parse().ok()) {
            self.dashboard.port = port;
        }
        if let Some(port) = lookup("INTERNSHIP_PORT").and_then(|s| s.parse().ok()) {
            self.dashboard.port = port;
        }

        // Logging overrides
        if let Some(level) = lookup("INTERNSHIP_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("INTERNSHIP_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Internship Insights Configuration
#
# Environment variables override these settings:
# - INTERNSHIP_OUTPUT, INTERNSHIP_RECORDS, INTERNSHIP_SEED
# - INTERNSHIP_DATA, INTERNSHIP_HOST, INTERNSHIP_PORT (or PORT)
# - INTERNSHIP_LOG_LEVEL, INTERNSHIP_LOG_FORMAT

[generator]
# File the generator writes (overwritten on every run)
output_path = "internship_data.csv"

# Number of application records to generate
record_count = 5000

# Id of the first record
first_id = 10000

# Application date range (inclusive)
start_date = "2021-01-01"
end_date = "2024-05-31"

# Fixed RNG seed for a reproducible dataset
# seed = 42

[dashboard]
# File the dashboard reads at startup
data_path = "internship_data.csv"

# Dashboard server host and port
host = "127.0.0.1"
port = 8050

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
