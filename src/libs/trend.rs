//! Completion-rate bucketing for trend reporting.

use crate::libs::session::{DayStatus, SessionStatus};
use chrono::NaiveDate;

/// Per-day completion statistics over a queried range.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub total: usize,
    pub completed: usize,
    /// Completion percentage, 0.0-100.0; days without sessions are 0.0
    pub rate: f64,
}

/// Buckets a range projection into one entry per calendar day.
///
/// Every day of the inclusive range appears in the result, so gaps in the
/// data show up as 0% rather than vanishing from the report.
pub fn completion_by_day(start_date: NaiveDate, end_date: NaiveDate, statuses: &[DayStatus]) -> Vec<DailyCompletion> {
    let mut days = Vec::new();
    let mut date = start_date;

    while date <= end_date {
        let total = statuses.iter().filter(|s| s.date == date).count();
        let completed = statuses.iter().filter(|s| s.date == date && s.status == SessionStatus::Completed).count();

        let rate = if total > 0 {
            (completed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        days.push(DailyCompletion { date, total, completed, rate });

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    days
}

/// Overall completion percentage across the whole range.
pub fn overall_rate(statuses: &[DayStatus]) -> f64 {
    if statuses.is_empty() {
        return 0.0;
    }
    let completed = statuses.iter().filter(|s| s.status == SessionStatus::Completed).count();
    (completed as f64 / statuses.len() as f64) * 100.0
}
