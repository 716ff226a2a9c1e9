//! Lexical scanning of free-form day queries.
//!
//! Matching here is deliberately loose: keywords and weekday names are found
//! by substring, so `"monday's class"` and `"mon"` both name Monday. Callers
//! normalize once with [`normalize_query`] and scan the result.

use chrono::{NaiveDate, Weekday};

/// Explicit date formats, tried in this order for every token, each with the
/// exact token shape it accepts (`9` is any ASCII digit).
///
/// A token valid under more than one format takes the first one listed.
/// chrono alone would accept one-digit fields and short or signed years, so
/// the shape is checked before parsing.
pub const EXPLICIT_DATE_FORMATS: [(&str, &str); 3] = [
    ("%d-%m-%Y", "99-99-9999"),
    ("%d/%m/%Y", "99/99/9999"),
    ("%Y-%m-%d", "9999-99-99"),
];

/// Weekday spellings in enumeration order. The first entry whose full name
/// or abbreviation occurs in the query wins.
const WEEKDAY_NAMES: [(Weekday, &str, &str); 7] = [
    (Weekday::Mon, "monday", "mon"),
    (Weekday::Tue, "tuesday", "tue"),
    (Weekday::Wed, "wednesday", "wed"),
    (Weekday::Thu, "thursday", "thu"),
    (Weekday::Fri, "friday", "fri"),
    (Weekday::Sat, "saturday", "sat"),
    (Weekday::Sun, "sunday", "sun"),
];

/// Lowercase and trim a query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Find the first whitespace-separated token that parses as an explicit date.
pub fn find_explicit_date(query: &str) -> Option<NaiveDate> {
    query.split_whitespace().find_map(parse_date_token)
}

/// Parse a single token against [`EXPLICIT_DATE_FORMATS`].
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    EXPLICIT_DATE_FORMATS
        .iter()
        .filter(|(_, shape)| matches_shape(token, shape))
        .find_map(|(fmt, _)| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Whether `token` has exactly the layout of `shape`: `9` stands for an
/// ASCII digit, every other character must match literally.
pub(crate) fn matches_shape(token: &str, shape: &str) -> bool {
    token.len() == shape.len()
        && token.bytes().zip(shape.bytes()).all(|(t, s)| match s {
            b'9' => t.is_ascii_digit(),
            _ => t == s,
        })
}

/// Find the weekday named in `query`, if any.
pub fn find_weekday(query: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .find(|(_, full, short)| query.contains(full) || query.contains(short))
        .map(|(weekday, _, _)| *weekday)
}

/// Whether the query carries a "last" modifier ("last week", "last monday").
///
/// A bare trailing "last" with nothing after it does not count.
pub fn mentions_last(query: &str) -> bool {
    query.contains("last week") || query.contains("last ")
}

/// Whether `query` contains any of `phrases`.
pub(crate) fn contains_any(query: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| query.contains(p))
}
