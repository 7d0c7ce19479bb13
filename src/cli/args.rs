//! CLI argument structures
//!
//! This module defines the command-line interface of `case-filter`: the
//! top-level flags and the criteria flags shared by every subcommand.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Filter case lists exported from the case API
#[derive(Parser)]
#[command(name = "case-filter")]
#[command(about = "case-filter - Filter and summarise case lists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (defaults to ./case-filter.toml when present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the cases matching the given criteria
    Filter {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        criteria: CriteriaArgs,
    },
    /// Print summary statistics for the cases matching the given criteria
    Stats {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Reference time for overdue and monthly counts (defaults to now)
        #[arg(long, value_name = "DATE")]
        as_of: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Case list JSON file, or '-' for stdin
    #[arg(long, value_name = "FILE")]
    pub cases: PathBuf,

    /// Output format (overrides configuration)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CriteriaArgs {
    /// Criteria JSON file replacing the configured defaults
    #[arg(long, value_name = "FILE")]
    pub criteria: Option<PathBuf>,

    /// Case-insensitive text matched against title, case number and beneficiary
    #[arg(short, long)]
    pub search: Option<String>,

    /// Allowed status (repeatable)
    #[arg(long, value_name = "STATUS")]
    pub status: Vec<String>,

    /// Allowed priority (repeatable)
    #[arg(long, value_name = "PRIORITY")]
    pub priority: Vec<String>,

    /// Allowed case type (repeatable)
    #[arg(long, value_name = "TYPE")]
    pub case_type: Vec<String>,

    /// Allowed assignee id (repeatable)
    #[arg(long, value_name = "USER_ID")]
    pub assigned_to: Vec<String>,

    /// Allowed urgency level (repeatable)
    #[arg(long, value_name = "URGENCY")]
    pub urgency: Vec<String>,

    /// Earliest creation time, inclusive
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Latest creation time, inclusive
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_filter_flags() {
        let cli = Cli::try_parse_from([
            "case-filter",
            "-vv",
            "filter",
            "--cases",
            "cases.json",
            "--status",
            "open",
            "--status",
            "pending",
            "--search",
            "visa",
            "--format",
            "yaml",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Filter { input, criteria } => {
                assert_eq!(input.cases, PathBuf::from("cases.json"));
                assert_eq!(input.format, Some(OutputFormat::Yaml));
                assert_eq!(criteria.status, vec!["open", "pending"]);
                assert_eq!(criteria.search.as_deref(), Some("visa"));
            }
            Commands::Stats { .. } => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_cases_flag_is_required() {
        assert!(Cli::try_parse_from(["case-filter", "stats"]).is_err());
    }
}
