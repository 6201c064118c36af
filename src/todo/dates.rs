//! Relative due-date resolution.
//!
//! Rewrites an informal `due:` token ("today", "tomorrow", or a full
//! English weekday name) into an absolute `due:YYYY-MM-DD` date. This
//! runs before structured parsing so the due-date pattern can recognize
//! the result.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

static DUE_RELATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)due:(today|tomorrow|monday|tuesday|wednesday|thursday|friday|saturday|sunday)",
    )
    .unwrap()
});

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

fn weekday_for_token(token: &str) -> Option<Weekday> {
    match token {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Replace the first relative `due:` token in `line` with an absolute
/// date, anchored to `today`.
///
/// A weekday token always resolves at least one day ahead: the walk
/// starts at tomorrow, so naming the current weekday yields the date a
/// full week out. Lines without a relative token pass through unchanged,
/// which makes resolution idempotent.
pub fn resolve_relative_due_on(line: &str, today: NaiveDate) -> String {
    let Some(caps) = DUE_RELATIVE.captures(line) else {
        return line.to_string();
    };
    let token = caps[1].to_lowercase();

    let due = match token.as_str() {
        "today" => Some(today),
        "tomorrow" => Some(today + Duration::days(1)),
        weekday => weekday_for_token(weekday).and_then(|target| {
            // Walk forward from tomorrow; the cap guards the loop.
            let mut candidate = today;
            for _ in 0..7 {
                candidate += Duration::days(1);
                if candidate.weekday() == target {
                    return Some(candidate);
                }
            }
            None
        }),
    };

    match due {
        Some(date) => {
            let absolute = format!("due:{}", date.format("%Y-%m-%d"));
            DUE_RELATIVE.replace(line, absolute.as_str()).into_owned()
        }
        None => line.to_string(),
    }
}

/// Resolve relative `due:` tokens against the local calendar date.
pub fn resolve_relative_due(line: &str) -> String {
    resolve_relative_due_on(line, local_date_today())
}
