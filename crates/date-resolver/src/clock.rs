//! Reference-date sources.
//!
//! Every resolution is anchored on "today" in a fixed civil timezone. The
//! [`Clock`] trait is the only place that date enters the crate, so the
//! resolution functions themselves stay pure.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{ResolverError, Result};

/// IANA name of the zone the portal runs in (UTC+05:30).
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Supplies the reference date for a resolution call.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock "today" in a fixed timezone.
///
/// The date is re-read from `Utc::now()` on every call, never cached, so
/// calls made either side of local midnight see different dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Build a clock from an IANA timezone name.
    ///
    /// # Errors
    ///
    /// Returns [`ResolverError::InvalidTimezone`] if `name` is not a known zone.
    pub fn from_name(name: &str) -> Result<Self> {
        parse_timezone(name).map(Self::new)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(chrono_tz::Asia::Kolkata)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// A reference date pinned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| ResolverError::InvalidTimezone(format!("'{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, TimeZone};

    #[test]
    fn test_default_clock_is_india_standard_time() {
        let clock = SystemClock::default();
        assert_eq!(clock.timezone(), chrono_tz::Asia::Kolkata);

        let instant = Utc.with_ymd_and_hms(2026, 2, 11, 0, 0, 0).unwrap();
        let offset = instant
            .with_timezone(&clock.timezone())
            .offset()
            .fix()
            .local_minus_utc();
        assert_eq!(offset, 5 * 3600 + 30 * 60);
    }

    #[test]
    fn test_default_timezone_name_parses() {
        let clock = SystemClock::from_name(DEFAULT_TIMEZONE).unwrap();
        assert_eq!(clock, SystemClock::default());
    }

    #[test]
    fn test_from_name_rejects_unknown_zone() {
        let err = SystemClock::from_name("Mars/Olympus_Mons").unwrap_err();
        assert!(matches!(err, ResolverError::InvalidTimezone(_)));
    }

    #[test]
    fn test_system_clock_tracks_utc_date_within_a_day() {
        let today = SystemClock::default().today();
        let utc_today = Utc::now().date_naive();
        let diff = (today - utc_today).num_days();
        assert!((-1..=1).contains(&diff));
    }

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 11).unwrap();
        let clock = FixedClock(date);
        assert_eq!(clock.today(), date);
        assert_eq!((&clock).today(), date);
    }
}
