//! Subcommand handlers.
//!
//! Each handler plays the part of a portal request handler: it takes the
//! student's raw day text, asks the resolver, and renders the answer.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use date_resolver::{
    Clock, DateResolver, FixedClock, ResolutionMode, ResolvedDate, SystemClock,
};
use serde::Serialize;

use crate::cli::{Commands, GlobalArgs};

/// The reference-date source chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub enum ReferenceClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for ReferenceClock {
    fn today(&self) -> NaiveDate {
        match self {
            ReferenceClock::System(clock) => clock.today(),
            ReferenceClock::Fixed(clock) => clock.today(),
        }
    }
}

impl ReferenceClock {
    pub fn from_args(args: &GlobalArgs) -> Result<Self> {
        let system = SystemClock::from_name(&args.timezone)
            .with_context(|| format!("cannot use timezone '{}'", args.timezone))?;
        Ok(match args.today {
            Some(date) => ReferenceClock::Fixed(FixedClock(date)),
            None => ReferenceClock::System(system),
        })
    }
}

#[derive(Debug, Serialize)]
struct FutureReport<'a> {
    query: &'a str,
    future: bool,
}

/// Run one subcommand and return the text to print on stdout.
pub fn execute(command: &Commands, global: &GlobalArgs) -> Result<String> {
    let resolver = DateResolver::new(ReferenceClock::from_args(global)?);
    tracing::debug!(today = %resolver.today(), "reference date");

    match command {
        Commands::Schedule(args) => {
            let query = args.query();
            render(&resolver.report(&query, ResolutionMode::Schedule), global.json)
        }
        Commands::Attendance(args) => {
            let query = args.query();
            let date = resolver.resolve_attendance(&query)?;
            render(&ResolvedDate::new(date, ResolutionMode::Historical), global.json)
        }
        Commands::AttendanceOn { date } => {
            let date = resolver.attendance_on(date)?;
            render(&ResolvedDate::new(date, ResolutionMode::Historical), global.json)
        }
        Commands::IsFuture(args) => {
            let query = args.query();
            let future = resolver.is_future_date_query(&query);
            if global.json {
                Ok(serde_json::to_string(&FutureReport {
                    query: &query,
                    future,
                })?)
            } else {
                Ok(future.to_string())
            }
        }
    }
}

fn render(report: &ResolvedDate, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(format!("{} ({})", report.display, report.weekday))
    }
}
