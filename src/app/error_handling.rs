//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// - For `CaseFilterError`: shows the user message, plus the code
///   description and cause chain in verbose mode, and exits with the
///   variant's exit code
/// - For other errors: shows the error message (and chain when verbose)
///   and exits with 1
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::{describe_error_code, CaseFilterError};

    error!("Fatal error: {}", error);

    let exit_code = if let Some(err) = error.downcast_ref::<CaseFilterError>() {
        eprintln!("Error: {}", err.user_message());

        if verbose >= 1 {
            eprintln!("\nE{:04}: {}", err.code(), describe_error_code(err.code()));
            eprintln!("\nContext Chain:\n{}", err.developer_message());
        }

        err.exit_code()
    } else {
        eprintln!("Error: {error}");

        if verbose >= 1 {
            eprintln!("\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                eprintln!("  {}: {}", i, cause);
            }
        }

        1
    };

    std::process::exit(exit_code)
}
