//! Summary statistics over a case collection

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::model::{Case, CaseStatus};

/// Dashboard counters for a set of cases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStats {
    pub total_cases: usize,
    pub open_cases: usize,
    pub in_progress_cases: usize,
    pub overdue_cases: usize,
    pub closed_this_month: usize,
    pub avg_resolution_days: i64,
}

fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Compute statistics for `cases` as of `now`
///
/// Statuses are classified against the API vocabulary ignoring ASCII case.
pub fn compute_stats(cases: &[Case], now: DateTime<Utc>) -> CaseStats {
    let month_start = start_of_month(now);
    let mut stats = CaseStats {
        total_cases: cases.len(),
        ..Default::default()
    };
    let mut resolution_days = Vec::new();

    for case in cases {
        let status = &case.status;
        let closed = status.is(CaseStatus::CLOSED);

        if status.is(CaseStatus::OPEN) || status.is(CaseStatus::PENDING) {
            stats.open_cases += 1;
        } else if status.is(CaseStatus::IN_PROGRESS) {
            stats.in_progress_cases += 1;
        } else if closed {
            let closed_at = case.updated_at.unwrap_or(case.created_at);
            if closed_at >= month_start {
                stats.closed_this_month += 1;
            }
            resolution_days.push((closed_at - case.created_at).num_days());
        }

        if !closed && case.due_date.is_some_and(|due| due < now) {
            stats.overdue_cases += 1;
        }
    }

    if !resolution_days.is_empty() {
        stats.avg_resolution_days =
            resolution_days.iter().sum::<i64>() / resolution_days.len() as i64;
    }

    stats
}
