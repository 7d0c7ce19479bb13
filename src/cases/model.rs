//! Case record definitions
//!
//! These mirror the case list payload served by the case API. The filter
//! only reads a handful of fields; everything else is carried through
//! verbatim so filtered output can be handed straight back to a renderer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::timestamp;

/// Declare a categorical value that keeps its wire string verbatim
///
/// Equality, ordering and hashing are those of the raw string, so a filter
/// on `open` matches `open` and nothing else.
macro_rules! categorical {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this value names `token`, ignoring ASCII case
            pub fn is(&self, token: &str) -> bool {
                self.0.eq_ignore_ascii_case(token)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

categorical! {
    /// Lifecycle state of a case
    CaseStatus
}

impl CaseStatus {
    pub const OPEN: &'static str = "OPEN";
    pub const PENDING: &'static str = "PENDING";
    pub const IN_PROGRESS: &'static str = "IN_PROGRESS";
    pub const ON_HOLD: &'static str = "ON_HOLD";
    pub const CLOSED: &'static str = "CLOSED";
    pub const CANCELLED: &'static str = "CANCELLED";
}

categorical! {
    /// How important a case is relative to others
    Priority
}

impl Priority {
    pub const LOW: &'static str = "LOW";
    pub const MEDIUM: &'static str = "MEDIUM";
    pub const HIGH: &'static str = "HIGH";
    pub const URGENT: &'static str = "URGENT";
}

categorical! {
    /// How soon a case needs attention
    UrgencyLevel
}

impl UrgencyLevel {
    pub const IMMEDIATE: &'static str = "IMMEDIATE";
    pub const WITHIN_WEEK: &'static str = "WITHIN_WEEK";
    pub const WITHIN_MONTH: &'static str = "WITHIN_MONTH";
    pub const FLEXIBLE: &'static str = "FLEXIBLE";
}

/// Fields of a record the filter does not model, kept as received
pub type ExtraFields = Map<String, Value>;

/// Person a case is opened for
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Beneficiary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// User responsible for a case
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Assignee {
    /// The assignee id, if it is non-empty
    pub fn id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }
}

/// A tracked case
///
/// Only the fields read by filtering and statistics are typed. Any other
/// field (description, tags, counters, budget, ...) lands in `extra` and is
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub id: String,
    pub case_number: String,
    pub title: String,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub case_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(default)]
    pub beneficiary: Option<Beneficiary>,
    #[serde(default)]
    pub assigned_to: Option<Assignee>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Case {
    /// Create a case with the fields the filter reads; everything else is empty
    pub fn new(
        case_number: impl Into<String>,
        title: impl Into<String>,
        status: impl Into<CaseStatus>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            case_number: case_number.into(),
            title: title.into(),
            status: status.into(),
            priority: Priority::default(),
            case_type: String::new(),
            urgency_level: None,
            beneficiary: None,
            assigned_to: None,
            due_date: None,
            created_at,
            updated_at: None,
            extra: ExtraFields::new(),
        }
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_case_type(mut self, case_type: impl Into<String>) -> Self {
        self.case_type = case_type.into();
        self
    }

    pub fn with_urgency(mut self, urgency: impl Into<UrgencyLevel>) -> Self {
        self.urgency_level = Some(urgency.into());
        self
    }

    pub fn with_beneficiary(mut self, full_name: impl Into<String>) -> Self {
        self.beneficiary = Some(Beneficiary {
            full_name: full_name.into(),
            ..Default::default()
        });
        self
    }

    pub fn with_assignee(mut self, id: impl Into<String>) -> Self {
        self.assigned_to = Some(Assignee {
            id: id.into(),
            ..Default::default()
        });
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Id of the assignee, when one is set with a non-empty id
    pub fn assignee_id(&self) -> Option<&str> {
        self.assigned_to.as_ref().and_then(Assignee::id)
    }
}

/// List envelope returned by the case API
///
/// `data` may be absent or `null`, which reads as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseList {
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub data: Option<Vec<Case>>,
}

impl CaseList {
    pub fn new(cases: Vec<Case>) -> Self {
        Self {
            count: cases.len(),
            data: Some(cases),
        }
    }

    /// Borrow the cases, if any were delivered
    pub fn cases(&self) -> Option<&[Case]> {
        self.data.as_deref()
    }
}
