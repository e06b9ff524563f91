//! Pure derivations over task activity logs.
//!
//! The activity log is the single source of truth for when work actually
//! happened. Everything here is a deterministic function over a
//! chronologically ordered activity slice; nothing mutates state.

use super::{Activity, ActivityKind, EffortMinutes};
use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Total worked minutes derived from paired activity intervals.
///
/// Each `Started`/`Resumed` opens an interval; the next `OnHold`/`Completed`
/// closes and accumulates it. An interval left open contributes nothing.
#[must_use]
pub fn actual_effort_minutes(activities: &[Activity]) -> i64 {
    let mut total = 0;
    let mut open_since: Option<DateTime<Utc>> = None;

    for activity in activities {
        if activity.kind().opens_interval() {
            open_since = Some(activity.created_at());
        } else if activity.kind().closes_interval() {
            if let Some(opened_at) = open_since.take() {
                total += (activity.created_at() - opened_at).num_minutes();
            }
        }
    }

    total
}

/// Number of times the task was put on hold.
#[must_use]
pub fn hold_count(activities: &[Activity]) -> usize {
    activities
        .iter()
        .filter(|activity| activity.kind() == ActivityKind::OnHold)
        .count()
}

/// Timestamp of the first `Started` activity, when work has begun.
#[must_use]
pub fn started_at(activities: &[Activity]) -> Option<DateTime<Utc>> {
    activities
        .iter()
        .find(|activity| activity.kind() == ActivityKind::Started)
        .map(Activity::created_at)
}

/// Timestamp of the `Completed` activity, when the task has finished.
#[must_use]
pub fn completed_at(activities: &[Activity]) -> Option<DateTime<Utc>> {
    activities
        .iter()
        .find(|activity| activity.kind() == ActivityKind::Completed)
        .map(Activity::created_at)
}

/// Actual effort as a rounded percentage of the estimate.
///
/// Returns `None` for a zero estimate, where the ratio is undefined.
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "rounded whole-number percentage; no fractional part is reported"
)]
pub fn effort_deviation_percent(actual_minutes: i64, estimate: EffortMinutes) -> Option<i64> {
    let estimate_minutes = i64::from(estimate.minutes());
    if estimate_minutes == 0 {
        return None;
    }
    Some((actual_minutes * 100 + estimate_minutes / 2) / estimate_minutes)
}

/// Whether the task finished on or before its deadline.
///
/// Returns `None` when the log carries no completion.
#[must_use]
pub fn completed_within_deadline(
    deadline: DateTime<Utc>,
    activities: &[Activity],
) -> Option<bool> {
    completed_at(activities).map(|finished_at| finished_at <= deadline)
}

/// Inclusive date window used for throughput reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window, inclusive.
    pub end: NaiveDate,
}

/// Splits an inclusive date range into consecutive windows of `days` days.
///
/// The final window is clipped to `end`. A zero `days` yields no windows.
#[must_use]
pub fn generate_periods(start: NaiveDate, end: NaiveDate, days: u32) -> Vec<Period> {
    if days == 0 {
        return Vec::new();
    }

    let mut periods = Vec::new();
    let mut cursor = start;
    while cursor <= end {
        let window_end = cursor
            .checked_add_days(Days::new(u64::from(days - 1)))
            .unwrap_or(end)
            .min(end);
        periods.push(Period {
            start: cursor,
            end: window_end,
        });
        match cursor.checked_add_days(Days::new(u64::from(days))) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    periods
}

/// Counts activity logs whose completion day falls inside the period.
#[must_use]
pub fn count_completed_in_period<'a, I>(logs: I, period: &Period) -> usize
where
    I: IntoIterator<Item = &'a [Activity]>,
{
    logs.into_iter()
        .filter_map(|activities| completed_at(activities))
        .filter(|finished_at| {
            let day = finished_at.date_naive();
            period.start <= day && day <= period.end
        })
        .count()
}
