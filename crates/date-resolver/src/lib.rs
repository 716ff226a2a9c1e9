//! # date-resolver
//!
//! Turns the free-form day a student types ("today", "last week tuesday",
//! "15-03-2026") into a calendar date.
//!
//! Two policies exist. Timetable lookups read weekday names forward, since
//! the timetable repeats every week. Attendance lookups read them backward,
//! since attendance is a record, and must refuse anything in the future.
//!
//! ## Modules
//!
//! - [`resolve`] — Schedule and historical resolution, weekday arithmetic
//! - [`future`] — Future-date predicates and the attendance guard
//! - [`parse`] — Explicit-date and weekday scanning over query text
//! - [`clock`] — Reference-date sources (system clock in Asia/Kolkata, fixed)
//! - [`resolver`] — [`DateResolver`], the clock-bound entry point
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod future;
pub mod parse;
pub mod resolve;
pub mod resolver;

pub use clock::{Clock, FixedClock, SystemClock, DEFAULT_TIMEZONE};
pub use error::ResolverError;
pub use future::{
    guard_historical, guard_historical_date, is_future_date, is_future_date_query,
    parse_iso_date,
};
pub use resolve::{
    most_recent_occurrence, next_occurrence, previous_week_occurrence, resolve, resolve_date,
    resolve_date_for_attendance, ResolutionMode, ResolvedDate,
};
pub use resolver::DateResolver;
