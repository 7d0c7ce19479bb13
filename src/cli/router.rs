//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::Commands;
use crate::cli::commands::{run_filter_command, run_stats_command, CommandContext};
use crate::config::ConfigLoader;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// Execute a CLI command and return its rendered output
pub async fn execute_command(
    command: Commands,
    config_path: Option<&Path>,
    app: &AppConfig,
) -> Result<String> {
    let config = ConfigLoader::new(&app.working_dir).load(config_path).await?;
    debug!("Effective configuration: {:?}", config);

    let ctx = CommandContext::new(config, &app.working_dir);

    match command {
        Commands::Filter { input, criteria } => run_filter_command(&ctx, input, criteria).await,
        Commands::Stats {
            input,
            criteria,
            as_of,
        } => run_stats_command(&ctx, input, criteria, as_of).await,
    }
}
