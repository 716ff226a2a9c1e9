//! Command-line argument definitions.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use date_resolver::DEFAULT_TIMEZONE;

/// Resolve the day a student asks about into a concrete date.
///
/// Timetable queries read weekday names forward ("friday" is the coming
/// Friday); attendance queries read them backward and refuse future dates.
#[derive(Debug, Parser)]
#[command(name = "portal-date")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// IANA timezone that defines "today".
    #[arg(long, global = true, env = "PORTAL_DATE_TZ", default_value = DEFAULT_TIMEZONE)]
    pub timezone: String,

    /// Pin the reference date instead of reading the clock (YYYY-MM-DD).
    #[arg(long, global = true, env = "PORTAL_DATE_TODAY", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a timetable query. Future dates are allowed.
    Schedule(QueryArgs),

    /// Resolve an attendance query, rejecting future dates.
    Attendance(QueryArgs),

    /// Check an explicit attendance date (YYYY-MM-DD).
    AttendanceOn {
        /// The date to look up.
        date: String,
    },

    /// Report whether a query's wording refers to the future.
    IsFuture(QueryArgs),
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    /// The day query, e.g. "last week friday". Words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

impl QueryArgs {
    pub fn query(&self) -> String {
        self.words.join(" ")
    }
}

fn parse_today(s: &str) -> Result<NaiveDate, String> {
    date_resolver::parse_iso_date(s).map_err(|e| e.to_string())
}
