//! Pure predicate functions for case filtering

use super::criteria::FilterCriteria;
use super::model::Case;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Check if case matches search term (pure predicate)
///
/// `needle` must already be lowercased; an empty needle matches everything.
pub fn matches_search(case: &Case, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    case.title.to_lowercase().contains(needle)
        || case.case_number.to_lowercase().contains(needle)
        || case
            .beneficiary
            .as_ref()
            .is_some_and(|b| b.full_name.to_lowercase().contains(needle))
}

/// Check a value against an allow-set, where an empty set allows everything
///
/// Membership is exact equality on the value as received.
pub fn matches_set<T: Ord>(value: &T, allowed: &BTreeSet<T>) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

/// Like [`matches_set`], for a field the case may not carry
///
/// An absent value only fails an active filter.
pub fn matches_optional_set<T: Ord>(value: Option<&T>, allowed: &BTreeSet<T>) -> bool {
    allowed.is_empty() || value.is_some_and(|v| allowed.contains(v))
}

/// Check if case matches assignee filter (pure predicate)
///
/// With an active filter, cases without an assignee or with an empty
/// assignee id never match.
pub fn matches_assignee_filter(case: &Case, allowed: &BTreeSet<String>) -> bool {
    if allowed.is_empty() {
        return true;
    }

    case.assignee_id().is_some_and(|id| allowed.contains(id))
}

/// Check if case creation time lies within inclusive bounds (pure predicate)
pub fn matches_date_filter(
    case: &Case,
    from: &Option<DateTime<Utc>>,
    to: &Option<DateTime<Utc>>,
) -> bool {
    let from_check = match from {
        Some(time) => case.created_at >= *time,
        None => true,
    };

    let to_check = match to {
        Some(time) => case.created_at <= *time,
        None => true,
    };

    from_check && to_check
}

/// Apply every criterion to a case (pure predicate combining all filters)
pub fn apply_case_filter(case: &Case, criteria: &FilterCriteria) -> bool {
    let needle = criteria.search_term.to_lowercase();
    matches_with_needle(case, criteria, &needle)
}

fn matches_with_needle(case: &Case, criteria: &FilterCriteria, needle: &str) -> bool {
    let matched = matches_search(case, needle)
        && matches_set(&case.status, &criteria.status)
        && matches_set(&case.priority, &criteria.priority)
        && matches_set(&case.case_type, &criteria.case_type)
        && matches_assignee_filter(case, &criteria.assigned_to)
        && matches_optional_set(case.urgency_level.as_ref(), &criteria.urgency_level)
        && matches_date_filter(case, &criteria.date_from, &criteria.date_to);

    if !matched {
        trace!("Case {} excluded by filter", case.case_number);
    }
    matched
}

/// Iterate over the cases matching `criteria`, in input order
pub fn matching_cases<'a>(
    cases: &'a [Case],
    criteria: &'a FilterCriteria,
) -> impl Iterator<Item = &'a Case> + 'a {
    let needle = criteria.search_term.to_lowercase();
    cases
        .iter()
        .filter(move |case| matches_with_needle(case, criteria, &needle))
}

/// Filter a case collection, keeping the relative order of matches
///
/// An absent collection is treated as empty.
pub fn filter_cases(cases: Option<&[Case]>, criteria: &FilterCriteria) -> Vec<Case> {
    let cases = cases.unwrap_or_default();

    if criteria.has_inverted_range() {
        warn!(
            "Date range is inverted ({:?} > {:?}); no case can match",
            criteria.date_from, criteria.date_to
        );
    }

    let filtered: Vec<Case> = matching_cases(cases, criteria).cloned().collect();

    debug!("Filtered {} of {} cases", filtered.len(), cases.len());
    filtered
}
