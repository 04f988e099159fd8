//! Grace period evaluation for clock-in times.
//!
//! This module decides whether a clock-in lands inside the tolerance window
//! around the expected start of the workday.

use chrono::{NaiveTime, Timelike};

/// Default tolerance either side of the expected start, in minutes.
pub const DEFAULT_GRACE_PERIOD_MINUTES: i64 = 15;

/// Format of every clock value in the attendance log.
pub const TIME_OF_DAY_FORMAT: &str = "%H:%M:%S";

/// Parses an `HH:MM:SS` time of day.
///
/// Returns `None` for anything else, including trailing characters.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::parse_time_of_day;
///
/// assert!(parse_time_of_day("08:15:00").is_some());
/// assert!(parse_time_of_day("8am").is_none());
/// ```
pub fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_OF_DAY_FORMAT).ok()
}

/// Determines whether a clock value falls inside the grace period.
///
/// The window is the closed interval
/// `[expected - grace_period_minutes, expected + grace_period_minutes]`.
/// Either string failing to parse yields `false`.
///
/// # Arguments
///
/// * `actual` - The recorded time, `HH:MM:SS`
/// * `expected` - The expected time, `HH:MM:SS`
/// * `grace_period_minutes` - Tolerance either side of `expected`
///
/// # Examples
///
/// ```
/// use attendance_analyzer::analysis::{is_within_grace_period, DEFAULT_GRACE_PERIOD_MINUTES};
///
/// assert!(is_within_grace_period("08:10:00", "08:00:00", DEFAULT_GRACE_PERIOD_MINUTES));
/// assert!(!is_within_grace_period("08:20:00", "08:00:00", DEFAULT_GRACE_PERIOD_MINUTES));
/// assert!(!is_within_grace_period("late", "08:00:00", DEFAULT_GRACE_PERIOD_MINUTES));
/// ```
pub fn is_within_grace_period(actual: &str, expected: &str, grace_period_minutes: i64) -> bool {
    match (parse_time_of_day(actual), parse_time_of_day(expected)) {
        (Some(actual), Some(expected)) => {
            within_grace_period(actual, expected, grace_period_minutes)
        }
        _ => false,
    }
}

/// Same check as [`is_within_grace_period`] on parsed times.
///
/// The window does not wrap around midnight: bounds are computed on a
/// single day, so a window reaching before `00:00:00` or past `23:59:59`
/// simply extends off the clock.
pub fn within_grace_period(
    actual: NaiveTime,
    expected: NaiveTime,
    grace_period_minutes: i64,
) -> bool {
    let actual = seconds_from_midnight(actual);
    let expected = seconds_from_midnight(expected);
    let grace = grace_period_minutes.saturating_mul(60);

    let start = expected.saturating_sub(grace);
    let end = expected.saturating_add(grace);

    start <= actual && actual <= end
}

fn seconds_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.num_seconds_from_midnight())
}
