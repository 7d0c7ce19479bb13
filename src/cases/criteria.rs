//! Filter criteria selected in the case list UI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::model::{CaseStatus, Priority, UrgencyLevel};
use super::timestamp;

/// Active filter selections
///
/// Every field is optional in effect: an empty search term, an empty set or
/// an unset bound never excludes a case. Sets are ordered so that two equal
/// criteria always serialize and hash identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
    #[serde(default)]
    pub status: BTreeSet<CaseStatus>,
    #[serde(default)]
    pub priority: BTreeSet<Priority>,
    #[serde(default)]
    pub case_type: BTreeSet<String>,
    #[serde(default)]
    pub assigned_to: BTreeSet<String>,
    #[serde(default)]
    pub urgency_level: BTreeSet<UrgencyLevel>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub date_from: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub date_to: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<CaseStatus>) -> Self {
        self.status.insert(status.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority.insert(priority.into());
        self
    }

    pub fn with_case_type(mut self, case_type: impl Into<String>) -> Self {
        self.case_type.insert(case_type.into());
        self
    }

    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        self.assigned_to.insert(id.into());
        self
    }

    pub fn with_urgency(mut self, urgency: impl Into<UrgencyLevel>) -> Self {
        self.urgency_level.insert(urgency.into());
        self
    }

    pub fn with_date_from(mut self, from: DateTime<Utc>) -> Self {
        self.date_from = Some(from);
        self
    }

    pub fn with_date_to(mut self, to: DateTime<Utc>) -> Self {
        self.date_to = Some(to);
        self
    }

    /// True when no criterion is active, so every case matches
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.status.is_empty()
            && self.priority.is_empty()
            && self.case_type.is_empty()
            && self.assigned_to.is_empty()
            && self.urgency_level.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// True when both bounds are set and the lower one is after the upper one
    pub fn has_inverted_range(&self) -> bool {
        matches!((self.date_from, self.date_to), (Some(from), Some(to)) if from > to)
    }

    /// Overlay the active fields of `other` onto `self`
    ///
    /// Fields left empty in `other` keep their current value.
    pub fn merge(mut self, other: FilterCriteria) -> Self {
        if !other.search_term.is_empty() {
            self.search_term = other.search_term;
        }
        if !other.status.is_empty() {
            self.status = other.status;
        }
        if !other.priority.is_empty() {
            self.priority = other.priority;
        }
        if !other.case_type.is_empty() {
            self.case_type = other.case_type;
        }
        if !other.assigned_to.is_empty() {
            self.assigned_to = other.assigned_to;
        }
        if !other.urgency_level.is_empty() {
            self.urgency_level = other.urgency_level;
        }
        if other.date_from.is_some() {
            self.date_from = other.date_from;
        }
        if other.date_to.is_some() {
            self.date_to = other.date_to;
        }
        self
    }
}
