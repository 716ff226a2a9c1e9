//! Future-date detection and the attendance guard.
//!
//! Attendance only exists for days that have happened. A query is refused
//! either lexically, when its wording points forward ("tomorrow", "next
//! friday"), or after resolution, when the date it produced is later than
//! today. Schedule lookups never pass through here.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ResolverError, Result};
use crate::parse::{
    contains_any, find_explicit_date, find_weekday, matches_shape, mentions_last,
    normalize_query,
};
use crate::resolve::resolve_date_for_attendance;

/// Phrases that always point forward unless the query also says "last".
const FUTURE_PHRASES: [&str; 5] = [
    "tomorrow",
    "next week",
    "day after tomorrow",
    "overmorrow",
    "two days from now",
];

/// Whether `date` is strictly after `today`.
pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Whether the wording of `query` refers to the future.
///
/// This is a lexical check and does not resolve the query. "last" wins over
/// everything, so `"last week, not next monday"` is not future.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_resolver::is_future_date_query;
///
/// let today = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
/// assert!(is_future_date_query("next monday", today));
/// assert!(!is_future_date_query("last monday", today));
/// ```
pub fn is_future_date_query(query: &str, today: NaiveDate) -> bool {
    let q = normalize_query(query);

    if mentions_last(&q) {
        return false;
    }
    if contains_any(&q, &FUTURE_PHRASES) {
        return true;
    }
    if q.contains("next") && find_weekday(&q).is_some() {
        return true;
    }
    find_explicit_date(&q).is_some_and(|date| is_future_date(date, today))
}

/// Resolve an attendance query, refusing anything that points past today.
///
/// # Errors
///
/// Returns [`ResolverError::FutureDate`] with `date: None` if the wording is
/// future-referring, or with the resolved date if resolution landed after
/// `today`.
pub fn guard_historical(query: &str, today: NaiveDate) -> Result<NaiveDate> {
    if is_future_date_query(query, today) {
        debug!(query, "rejected future-referring attendance query");
        return Err(ResolverError::FutureDate { date: None });
    }

    let date = resolve_date_for_attendance(query, today);
    if is_future_date(date, today) {
        debug!(query, %date, "rejected attendance query resolving after today");
        return Err(ResolverError::FutureDate { date: Some(date) });
    }

    Ok(date)
}

/// Validate an ISO `yyyy-MM-dd` date for an attendance lookup.
///
/// # Errors
///
/// Returns [`ResolverError::InvalidDate`] if `date` is not a strict ISO date,
/// or [`ResolverError::FutureDate`] if it is after `today`.
pub fn guard_historical_date(date: &str, today: NaiveDate) -> Result<NaiveDate> {
    let parsed = parse_iso_date(date)?;
    if is_future_date(parsed, today) {
        debug!(%parsed, "rejected attendance date after today");
        return Err(ResolverError::FutureDate { date: Some(parsed) });
    }
    Ok(parsed)
}

/// Parse a strict `yyyy-MM-dd` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    if !matches_shape(s, "9999-99-99") {
        return Err(ResolverError::InvalidDate(format!(
            "'{s}': expected yyyy-MM-dd"
        )));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| ResolverError::InvalidDate(format!("'{s}': {e}")))
}
