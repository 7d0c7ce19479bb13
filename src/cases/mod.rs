//! Case records and in-memory case list filtering
//!
//! The filter itself is a conjunction of pure predicates in [`filters`];
//! [`memo`] wraps it with a result cache and [`stats`] summarises a
//! (typically filtered) collection.

pub mod criteria;
pub mod filters;
pub mod memo;
pub mod model;
pub mod stats;
pub mod timestamp;

pub use criteria::FilterCriteria;
pub use filters::{apply_case_filter, filter_cases, matching_cases};
pub use memo::MemoizedFilter;
pub use model::{Assignee, Beneficiary, Case, CaseList, CaseStatus, Priority, UrgencyLevel};
pub use stats::{compute_stats, CaseStats};
