//! # Configuration
//!
//! Settings live in `config.json` next to the item collection. A missing file
//! means "all defaults".
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-intervals` | `1, 3, 7, 14, 30` | Schedule for new items added without one |
//! | `date-format` | `%b %-d, %Y` | chrono format used for dates in CLI output |
//!
//! ## CLI Usage
//!
//! - `revisit config`: Show all configuration values.
//! - `revisit config <key>`: Get a specific value.
//! - `revisit config <key> <value>`: Set a value.

use crate::error::{Result, RevisitError};
use crate::model::DEFAULT_INTERVALS;
use crate::schedule::{format_intervals, is_valid_schedule, parse_intervals, MAX_INTERVAL_DAYS};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%b %-d, %Y";

pub const KEYS: [&str; 2] = ["default-intervals", "date-format"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RevisitConfig {
    /// Review gaps (days) for items added without an explicit schedule
    #[serde(default = "default_intervals")]
    pub default_intervals: Vec<u32>,

    /// strftime-style format for dates shown to the user
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_intervals() -> Vec<u32> {
    DEFAULT_INTERVALS.to_vec()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for RevisitConfig {
    fn default() -> Self {
        Self {
            default_intervals: default_intervals(),
            date_format: default_date_format(),
        }
    }
}

impl RevisitConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RevisitError::Io)?;
        let config: RevisitConfig =
            serde_json::from_str(&content).map_err(RevisitError::Serialization)?;

        if !is_valid_schedule(&config.default_intervals) {
            return Err(RevisitError::Config(format!(
                "default_intervals in {} must be a non-empty list of day counts from 1 to {}",
                config_path.display(),
                MAX_INTERVAL_DAYS
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RevisitError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RevisitError::Serialization)?;
        fs::write(config_path, content).map_err(RevisitError::Io)?;
        Ok(())
    }

    /// Get a value by its CLI key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-intervals" => Some(format_intervals(&self.default_intervals)),
            "date-format" => Some(self.date_format.clone()),
            _ => None,
        }
    }

    /// Set a value by its CLI key, validating it first
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-intervals" => {
                let intervals = parse_intervals(value);
                // parse_intervals drops bad tokens; reject rather than store a partial list
                if !is_valid_schedule(&intervals) || intervals.len() != value.split(',').count() {
                    return Err(format!(
                        "Invalid intervals '{}': expected comma-separated day counts from 1 to {}",
                        value, MAX_INTERVAL_DAYS
                    ));
                }
                self.default_intervals = intervals;
                Ok(())
            }
            "date-format" => {
                let parses = StrftimeItems::new(value).all(|item| !matches!(item, Item::Error));
                if value.trim().is_empty() || !parses {
                    return Err(format!("Invalid date format '{}'", value));
                }
                self.date_format = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
