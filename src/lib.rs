//! # case-filter
//!
//! In-memory filtering of case-management records.
//!
//! ```
//! use case_filter::cases::{filter_cases, Case, FilterCriteria};
//! use chrono::{TimeZone, Utc};
//!
//! let cases = vec![
//!     Case::new("C-001", "Asylum Claim", "open", Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()),
//!     Case::new("C-002", "Visa Renewal", "closed", Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
//! ];
//!
//! let criteria = FilterCriteria::new().with_search("visa");
//! let matched = filter_cases(Some(cases.as_slice()), &criteria);
//! assert_eq!(matched[0].case_number, "C-002");
//! ```
//!
//! ## Modules
//!
//! - `cases` - Case records, filter criteria, the filter predicates, memoization and statistics
//! - `config` - Configuration file loading for the command-line front end
//! - `cli` - Argument parsing and command implementations
//! - `app` - Logging setup and fatal error reporting
//! - `error` - Error type for the I/O boundary
pub mod app;
pub mod cases;
pub mod cli;
pub mod config;
pub mod error;


pub use cases::{filter_cases, Case, FilterCriteria, MemoizedFilter};
pub use error::{CaseFilterError, Result};
