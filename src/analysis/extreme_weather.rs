//! Extreme weather day detection.
//!
//! Dates with severe weather in an employee's country excuse that day from
//! the absenteeism check.

use std::collections::BTreeSet;

use crate::models::WeatherRecord;

/// Conditions that excuse absence when no other configuration is given.
pub const SEVERE_WEATHER_CONDITIONS: [&str; 5] =
    ["hail", "blizzard", "thunderstorm", "extreme heat", "hurricane"];

/// Collects the dates in `country` and `year` with a severe condition.
///
/// Country and condition must match exactly. The year is matched as a
/// prefix of the date string, so dates are expected to start with the
/// four-digit year (e.g. `"2023-04-01"`).
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::{extreme_weather_days, SEVERE_WEATHER_CONDITIONS};
/// use attendance_analyzer::models::WeatherRecord;
///
/// let weather = vec![WeatherRecord {
///     country: "US".to_string(),
///     date: "2023-03-05".to_string(),
///     condition: "blizzard".to_string(),
/// }];
///
/// let days = extreme_weather_days(&weather, "US", "2023", &SEVERE_WEATHER_CONDITIONS);
/// assert!(days.contains("2023-03-05"));
/// ```
pub fn extreme_weather_days<S: AsRef<str>>(
    weather: &[WeatherRecord],
    country: &str,
    year: &str,
    severe_conditions: &[S],
) -> BTreeSet<String> {
    weather
        .iter()
        .filter(|record| record.country == country)
        .filter(|record| record.date.starts_with(year))
        .filter(|record| {
            severe_conditions
                .iter()
                .any(|condition| condition.as_ref() == record.condition)
        })
        .map(|record| record.date.clone())
        .collect()
}
