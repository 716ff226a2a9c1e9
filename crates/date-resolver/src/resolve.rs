//! Query-to-date resolution under the two weekday policies.
//!
//! The same query can mean different dates depending on who asks. A
//! timetable lookup is about a recurring week, so "friday" means the coming
//! Friday. An attendance lookup is about the record, so "friday" means the
//! Friday that already happened. [`ResolutionMode`] selects the policy.
//!
//! Every function here takes the reference date explicitly and never reads
//! the system clock; [`DateResolver`](crate::DateResolver) supplies it.
//!
//! Resolution is total: unrecognised text, malformed dates and the empty
//! string all resolve to the reference date.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::parse::{find_explicit_date, find_weekday, mentions_last, normalize_query};

/// Which weekday-to-date policy applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionMode {
    /// Recurring weekly timetable: weekday names look forward.
    Schedule,
    /// Attendance records: weekday names look backward.
    Historical,
}

impl ResolutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionMode::Schedule => "schedule",
            ResolutionMode::Historical => "historical",
        }
    }
}

/// A resolved date, described the way the portal shows it to students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDate {
    /// ISO 8601 date (`2026-02-13`).
    pub date: String,
    /// Day-first display form (`13-02-2026`).
    pub display: String,
    /// Full English weekday name (`Friday`).
    pub weekday: String,
    pub mode: ResolutionMode,
}

impl ResolvedDate {
    pub fn new(date: NaiveDate, mode: ResolutionMode) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            display: date.format("%d-%m-%Y").to_string(),
            weekday: date.format("%A").to_string(),
            mode,
        }
    }
}

/// Resolve `query` under `mode` against the reference date `today`.
pub fn resolve(query: &str, mode: ResolutionMode, today: NaiveDate) -> NaiveDate {
    match mode {
        ResolutionMode::Schedule => resolve_date(query, today),
        ResolutionMode::Historical => resolve_date_for_attendance(query, today),
    }
}

/// Resolve a timetable query. Weekday names mean the next occurrence,
/// counting today.
///
/// Rules, first match wins:
///
/// 1. an explicit date token (`dd-MM-yyyy`, `dd/MM/yyyy`, `yyyy-MM-dd`)
/// 2. `"yesterday"` → today − 1
/// 3. `"tomorrow"` → today + 1, or today + 2 with `"day after"` / `"next tomorrow"`
/// 4. `"today"` → today
/// 5. a weekday name → its next occurrence
/// 6. anything else → today
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_resolver::resolve_date;
///
/// // Wednesday, February 11, 2026
/// let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
/// assert_eq!(
///     resolve_date("friday", today),
///     NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
/// );
/// ```
pub fn resolve_date(query: &str, today: NaiveDate) -> NaiveDate {
    let q = normalize_query(query);

    let (date, rule) = if let Some(explicit) = find_explicit_date(&q) {
        (explicit, "explicit")
    } else if q.contains("yesterday") {
        (today - Duration::days(1), "yesterday")
    } else if q.contains("tomorrow") {
        if q.contains("day after") || q.contains("next tomorrow") {
            (today + Duration::days(2), "day after tomorrow")
        } else {
            (today + Duration::days(1), "tomorrow")
        }
    } else if q.contains("today") {
        (today, "today")
    } else if let Some(weekday) = find_weekday(&q) {
        (next_occurrence(today, weekday), "weekday")
    } else {
        (today, "default")
    };

    debug!(
        query = %q,
        rule,
        %date,
        mode = ResolutionMode::Schedule.as_str(),
        "resolved date"
    );
    date
}

/// Resolve an attendance query. Weekday names mean the most recent past
/// occurrence, counting today; with "last" they mean the week before that.
///
/// Rules, first match wins:
///
/// 1. an explicit date token
/// 2. `"day before yesterday"` / `"two days ago"` → today − 2
/// 3. `"yesterday"` → today − 1
/// 4. `"today"` → today
/// 5. a weekday name → [`previous_week_occurrence`] if the query mentions
///    "last", else [`most_recent_occurrence`]
/// 6. anything else → today
///
/// This does not reject future dates. Attendance handlers go through
/// [`guard_historical`](crate::guard_historical) instead.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_resolver::resolve_date_for_attendance;
///
/// // Wednesday, February 11, 2026
/// let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
/// assert_eq!(
///     resolve_date_for_attendance("friday", today),
///     NaiveDate::from_ymd_opt(2026, 2, 6).unwrap()
/// );
/// assert_eq!(
///     resolve_date_for_attendance("last week friday", today),
///     NaiveDate::from_ymd_opt(2026, 1, 30).unwrap()
/// );
/// ```
pub fn resolve_date_for_attendance(query: &str, today: NaiveDate) -> NaiveDate {
    let q = normalize_query(query);

    let (date, rule) = if let Some(explicit) = find_explicit_date(&q) {
        (explicit, "explicit")
    } else if q.contains("day before yesterday") || q.contains("two days ago") {
        (today - Duration::days(2), "day before yesterday")
    } else if q.contains("yesterday") {
        (today - Duration::days(1), "yesterday")
    } else if q.contains("today") {
        (today, "today")
    } else if let Some(weekday) = find_weekday(&q) {
        if mentions_last(&q) {
            (previous_week_occurrence(today, weekday), "last weekday")
        } else {
            (most_recent_occurrence(today, weekday), "weekday")
        }
    } else {
        (today, "default")
    };

    debug!(
        query = %q,
        rule,
        %date,
        mode = ResolutionMode::Historical.as_str(),
        "resolved date"
    );
    date
}

/// The next `target` on or after `today`.
pub fn next_occurrence(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday();
    if current == target {
        return today;
    }
    let days_ahead =
        (target.num_days_from_monday() as i64 - current.num_days_from_monday() as i64 + 7) % 7;
    today + Duration::days(days_ahead)
}

/// The latest `target` on or before `today`.
pub fn most_recent_occurrence(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday();
    if current == target {
        return today;
    }
    let mut days_back =
        (current.num_days_from_monday() as i64 - target.num_days_from_monday() as i64) % 7;
    if days_back <= 0 {
        days_back += 7;
    }
    today - Duration::days(days_back)
}

/// The `target` one week before its most recent occurrence.
///
/// Never returns today, so "last monday" asked on a Monday is a week ago.
pub fn previous_week_occurrence(today: NaiveDate, target: Weekday) -> NaiveDate {
    let recent = most_recent_occurrence(today, target);
    if recent == today || (today - recent).num_days() < 7 {
        recent - Duration::days(7)
    } else {
        recent
    }
}
