//! Configuration types for attendance analysis.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) yields the standard rules.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_GRACE_PERIOD_MINUTES, DEFAULT_WORKDAYS_PER_WEEK,
    SEVERE_WEATHER_CONDITIONS,
};

/// Default year used to select extreme weather days.
pub const DEFAULT_WEATHER_YEAR: &str = "2023";

/// Default event feed endpoint.
pub const DEFAULT_EVENTS_URL: &str = "https://www.pingtt.com/exam/events";

/// Default weather feed endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://www.pingtt.com/exam/weather";

/// How an attendance entry with a missing clock value is treated.
///
/// # Example
///
/// ```
/// use attendance_analyzer::config::MissingClockPolicy;
///
/// let policy: MissingClockPolicy = serde_yaml::from_str("count_as_absence").unwrap();
/// assert_eq!(policy, MissingClockPolicy::CountAsAbsence);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingClockPolicy {
    /// The entry counts toward nothing.
    #[default]
    Skip,
    /// The entry counts as one absence and nothing else.
    CountAsAbsence,
}

/// How hours worked are derived from a clock-in/clock-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursMethod {
    /// Difference of the hour fields only; minutes and seconds are dropped.
    #[default]
    HourComponent,
    /// Elapsed time at minute precision, wrapping past midnight.
    ClockDuration,
}

/// Rules applied by the attendance analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Expected clock-in time for every workday.
    pub expected_start: NaiveTime,
    /// Tolerance either side of `expected_start`, in minutes.
    pub grace_period_minutes: i64,
    /// Clocking out strictly before this time is an early departure.
    pub early_departure_cutoff: NaiveTime,
    /// Combined count that must be exceeded for an employee to be reported.
    pub anomaly_threshold: u32,
    /// Four-digit year whose weather records can excuse absence.
    pub weather_year: String,
    /// Weather conditions that excuse absence.
    pub severe_weather_conditions: Vec<String>,
    /// Treatment of entries missing a clock value.
    pub missing_clock_policy: MissingClockPolicy,
    /// Derivation of hours worked per entry.
    pub hours_method: HoursMethod,
    /// Workdays used to scale the per-entry average to a week.
    pub workdays_per_week: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            expected_start: NaiveTime::from_hms_opt(8, 0, 0).expect("Valid start time"),
            grace_period_minutes: DEFAULT_GRACE_PERIOD_MINUTES,
            early_departure_cutoff: NaiveTime::from_hms_opt(16, 0, 0).expect("Valid cutoff time"),
            anomaly_threshold: DEFAULT_ANOMALY_THRESHOLD,
            weather_year: DEFAULT_WEATHER_YEAR.to_string(),
            severe_weather_conditions: SEVERE_WEATHER_CONDITIONS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            missing_clock_policy: MissingClockPolicy::default(),
            hours_method: HoursMethod::default(),
            workdays_per_week: DEFAULT_WORKDAYS_PER_WEEK,
        }
    }
}

/// Locations of the run's inputs and output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Employee roster JSON file.
    pub employees_path: PathBuf,
    /// Attendance log JSON file.
    pub attendance_path: PathBuf,
    /// Event reference feed URL.
    pub events_url: String,
    /// Weather reference feed URL.
    pub weather_url: String,
    /// Destination of the result document.
    pub output_path: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            employees_path: PathBuf::from("data/employees.json"),
            attendance_path: PathBuf::from("data/attendance.json"),
            events_url: DEFAULT_EVENTS_URL.to_string(),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            output_path: PathBuf::from("results/results.json"),
        }
    }
}

/// The complete configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Analysis rules.
    pub analyzer: AnalyzerConfig,
    /// Input and output locations.
    pub sources: SourcesConfig,
}
