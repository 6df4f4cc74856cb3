use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::backup::BACKUP_FORMAT_VERSION;
use crate::content::{DEFAULT_BASE_CONTENT_HEADER, DEFAULT_CATEGORY};
use crate::errors::ConfigError;

/// Application configuration module
/// This module handles loading, validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// How parsed terms are printed
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Header line placed before base content in a combined payload
    #[serde(default = "default_base_content_header")]
    pub base_content_header: String,

    /// Version string written into new backups
    #[serde(default = "default_backup_version")]
    pub backup_version: String,

    /// Category used for entries restored without one
    #[serde(default = "default_category")]
    pub default_category: String,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Output format for parsed term lists
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    // @format: Pretty JSON array of records
    #[default]
    Json,
    // @format: One tab-separated record per line
    Tsv,
    // @format: Aligned two-column text
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OutputFormat::Json => "json",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Table => "table",
        };
        write!(f, "{}", name)
    }
}

fn default_base_content_header() -> String {
    DEFAULT_BASE_CONTENT_HEADER.to_string()
}

fn default_backup_version() -> String {
    BACKUP_FORMAT_VERSION.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;

        Ok(())
    }

    /// Load the config at `path`, or write and return the default if it does not exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        log::warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        config.save(path)?;
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_content_header.trim().is_empty() {
            return Err(ConfigError::EmptyField("base_content_header"));
        }

        if self.default_category.trim().is_empty() {
            return Err(ConfigError::EmptyField("default_category"));
        }

        let major = self.backup_version.split('.').next().unwrap_or_default();
        if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                field: "backup_version",
                value: self.backup_version.clone(),
            });
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            output_format: OutputFormat::default(),
            base_content_header: default_base_content_header(),
            backup_version: default_backup_version(),
            default_category: default_category(),
        }
    }
}
