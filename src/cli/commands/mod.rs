//! Command implementation modules
//!
//! Each command returns its rendered output; printing is left to the router.

pub mod filter;
pub mod stats;

pub use filter::run_filter_command;
pub use stats::run_stats_command;

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::{Config, OutputFormat};
use crate::error::ErrorExt;

/// State shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub working_dir: PathBuf,
}

impl CommandContext {
    pub fn new(config: Config, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            working_dir: working_dir.into(),
        }
    }

    /// Output format from the flag, falling back to configuration
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.config.output)
    }
}

/// Serialize a command result in the requested format
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).to_output_error("could not encode result as JSON")?
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).to_output_error("could not encode result as YAML")?
        }
    };
    Ok(rendered)
}
