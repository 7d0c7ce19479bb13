//! Configuration for the case filter front end
//!
//! Settings come from, in increasing precedence: built-in defaults, a
//! configuration file, and `CASE_FILTER_*` environment variables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cases::FilterCriteria;

pub mod loader;

pub use loader::{parse_config, ConfigFormat, ConfigLoader, DEFAULT_CONFIG_FILE};

/// Serialization format for command output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Yaml => f.write_str("yaml"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// Criteria applied when no criteria file or flags override them
    pub defaults: FilterCriteria,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored
    pub fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(output) = lookup("CASE_FILTER_OUTPUT") {
            match output.parse::<OutputFormat>() {
                Ok(format) => self.output = format,
                Err(e) => tracing::warn!("Ignoring CASE_FILTER_OUTPUT: {}", e),
            }
        }
    }
}
