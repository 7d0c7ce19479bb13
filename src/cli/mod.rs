//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Case list and criteria loading
//! - Command implementations

pub mod args;
pub mod commands;
pub mod input;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, CriteriaArgs, InputArgs};
pub use router::execute_command;
