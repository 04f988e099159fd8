//! Attendance analysis logic for the Attendance Analyzer.
//!
//! This module contains the rule evaluation and aggregation that turn raw
//! attendance entries plus event and weather reference data into
//! per-employee anomaly results: grace period evaluation, extreme weather
//! day detection, event matching, per-employee pattern analysis, hour
//! metrics and roster-wide detection.

mod detector;
mod event_matcher;
mod extreme_weather;
mod grace_period;
mod metrics;
mod pattern_analyzer;

pub use detector::detect_anomalies;
pub use event_matcher::{EventIndex, match_events};
pub use extreme_weather::{SEVERE_WEATHER_CONDITIONS, extreme_weather_days};
pub use grace_period::{
    DEFAULT_GRACE_PERIOD_MINUTES, TIME_OF_DAY_FORMAT, is_within_grace_period, parse_time_of_day,
    within_grace_period,
};
pub use metrics::{
    DEFAULT_ANOMALY_THRESHOLD, DEFAULT_WORKDAYS_PER_WEEK, average_hours_per_week,
    build_anomaly_result, clock_duration_hours, entry_hours, hour_component,
    hour_component_delta, total_hours_worked,
};
pub use pattern_analyzer::{
    AttendanceCounts, PatternAnalysis, analyze_attendance_pattern, is_early_departure, is_tardy,
};
