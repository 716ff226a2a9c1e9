//! Clock-bound front end over the pure resolution functions.

use chrono::NaiveDate;

use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::future;
use crate::resolve::{self, ResolutionMode, ResolvedDate};

/// Resolves day queries against the reference date of a [`Clock`].
///
/// Each method reads `today()` once, so a long-lived resolver always answers
/// relative to the current day. Holds no other state.
#[derive(Debug, Clone, Default)]
pub struct DateResolver<C = SystemClock> {
    clock: C,
}

impl<C: Clock> DateResolver<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Timetable resolution. See [`resolve::resolve_date`].
    pub fn resolve_date(&self, query: &str) -> NaiveDate {
        resolve::resolve_date(query, self.today())
    }

    /// Attendance resolution without the future guard. See
    /// [`resolve::resolve_date_for_attendance`].
    pub fn resolve_date_for_attendance(&self, query: &str) -> NaiveDate {
        resolve::resolve_date_for_attendance(query, self.today())
    }

    pub fn resolve(&self, query: &str, mode: ResolutionMode) -> NaiveDate {
        resolve::resolve(query, mode, self.today())
    }

    /// Resolve and describe the result.
    pub fn report(&self, query: &str, mode: ResolutionMode) -> ResolvedDate {
        ResolvedDate::new(self.resolve(query, mode), mode)
    }

    pub fn is_future_date(&self, date: NaiveDate) -> bool {
        future::is_future_date(date, self.today())
    }

    pub fn is_future_date_query(&self, query: &str) -> bool {
        future::is_future_date_query(query, self.today())
    }

    /// Attendance resolution with both future checks applied.
    ///
    /// # Errors
    ///
    /// See [`future::guard_historical`].
    pub fn resolve_attendance(&self, query: &str) -> Result<NaiveDate> {
        // One reading of the clock for both the checks and the resolution.
        future::guard_historical(query, self.today())
    }

    /// Validate an explicit ISO date for an attendance lookup.
    ///
    /// # Errors
    ///
    /// See [`future::guard_historical_date`].
    pub fn attendance_on(&self, date: &str) -> Result<NaiveDate> {
        future::guard_historical_date(date, self.today())
    }
}
