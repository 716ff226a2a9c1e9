//! Property tests over every weekday and a wide range of reference dates.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use date_resolver::{
    guard_historical, is_future_date_query, resolve_date, resolve_date_for_attendance,
};
use proptest::prelude::*;

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Mon, "monday"),
    (Weekday::Tue, "tuesday"),
    (Weekday::Wed, "wednesday"),
    (Weekday::Thu, "thursday"),
    (Weekday::Fri, "friday"),
    (Weekday::Sat, "saturday"),
    (Weekday::Sun, "sunday"),
];

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 through roughly 2099
    (0i64..36_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn weekday() -> impl Strategy<Value = (Weekday, &'static str)> {
    prop::sample::select(WEEKDAYS.to_vec())
}

proptest! {
    #[test]
    fn schedule_weekday_is_never_in_the_past(today in reference_date(), (wd, name) in weekday()) {
        for query in [name.to_string(), format!("next {name}")] {
            let resolved = resolve_date(&query, today);
            prop_assert!(resolved >= today);
            prop_assert!((resolved - today).num_days() < 7);
            prop_assert_eq!(resolved.weekday(), wd);
        }
    }

    #[test]
    fn historical_weekday_is_never_in_the_future(today in reference_date(), (wd, name) in weekday()) {
        let resolved = resolve_date_for_attendance(name, today);
        prop_assert!(resolved <= today);
        prop_assert!((today - resolved).num_days() < 7);
        prop_assert_eq!(resolved.weekday(), wd);
    }

    #[test]
    fn todays_weekday_resolves_to_today_in_both_modes(today in reference_date()) {
        let (_, name) = WEEKDAYS
            .iter()
            .find(|(wd, _)| *wd == today.weekday())
            .copied()
            .unwrap();
        prop_assert_eq!(resolve_date(name, today), today);
        prop_assert_eq!(resolve_date_for_attendance(name, today), today);
    }

    #[test]
    fn last_week_is_at_least_seven_days_back(today in reference_date(), (wd, name) in weekday()) {
        let last_week = resolve_date_for_attendance(&format!("last week {name}"), today);
        let recent = resolve_date_for_attendance(name, today);
        prop_assert!((today - last_week).num_days() >= 7);
        prop_assert!(last_week < recent);
        prop_assert_eq!(last_week.weekday(), wd);
    }

    #[test]
    fn explicit_date_takes_precedence(today in reference_date(), target in reference_date(), (_, name) in weekday()) {
        let query = format!("{} ignore {name} tomorrow", target.format("%d-%m-%Y"));
        prop_assert_eq!(resolve_date(&query, today), target);
        prop_assert_eq!(resolve_date_for_attendance(&query, today), target);
    }

    #[test]
    fn explicit_dates_always_have_four_digit_years(today in reference_date(), query in "[0-9+/ -]{0,24}") {
        // No keywords in this alphabet: the result is either today or an
        // explicit date whose year was written as exactly four digits.
        for resolved in [resolve_date(&query, today), resolve_date_for_attendance(&query, today)] {
            prop_assert!(resolved == today || (0..=9999).contains(&resolved.year()));
            if resolved != today {
                let year = format!("{:04}", resolved.year());
                prop_assert!(query.contains(&year));
            }
        }
    }

    #[test]
    fn short_year_tokens_fall_through(today in reference_date(), target in reference_date()) {
        let query = format!("{} tomorrow", target.format("%d-%m-%y"));
        prop_assert_eq!(resolve_date(&query, today), today + Duration::days(1));
    }

    #[test]
    fn last_is_never_future_referring(today in reference_date(), (_, name) in weekday()) {
        let last_query = format!("last {name}");
        let next_query = format!("next {name}");
        prop_assert!(!is_future_date_query(&last_query, today));
        prop_assert!(is_future_date_query(&next_query, today));
    }

    #[test]
    fn guard_never_admits_a_future_date(today in reference_date(), query in "[a-z0-9 /-]{0,24}") {
        if let Ok(date) = guard_historical(&query, today) {
            prop_assert!(date <= today);
        }
    }

    #[test]
    fn resolution_is_total(today in reference_date(), query in "\\PC{0,40}") {
        let _ = resolve_date(&query, today);
        let _ = resolve_date_for_attendance(&query, today);
        let _ = is_future_date_query(&query, today);
    }
}
