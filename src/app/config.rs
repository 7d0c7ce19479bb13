//! Application configuration
//!
//! Process-level settings derived from the command line, as opposed to the
//! file-based [`crate::config::Config`].

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Directory relative paths are resolved against
    pub working_dir: PathBuf,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
        })
    }

    /// Get the log filter string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
        }
    }
}
