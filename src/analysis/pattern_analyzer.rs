//! Per-employee attendance pattern analysis.
//!
//! This module walks one employee's attendance entries and counts tardy
//! arrivals, early departures and unexcused absences, collecting the events
//! held on the employee's attendance dates along the way.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::{AnalyzerConfig, MissingClockPolicy};
use crate::models::{AttendanceEntry, Employee, EventRecord};

use super::event_matcher::EventIndex;
use super::grace_period::{parse_time_of_day, within_grace_period};

/// Occurrence counts for one employee.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::AttendanceCounts;
///
/// let counts = AttendanceCounts { tardy: 2, early_departure: 1, absenteeism: 1 };
/// assert_eq!(counts.combined(), 4);
/// assert!(counts.exceeds(3));
/// assert!(!counts.exceeds(4));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceCounts {
    /// Clock-ins outside the grace period.
    pub tardy: u32,
    /// Clock-outs before the early departure cutoff.
    pub early_departure: u32,
    /// Workdays with neither extreme weather nor a matching event.
    pub absenteeism: u32,
}

impl AttendanceCounts {
    /// Sum of all three counts.
    pub fn combined(&self) -> u32 {
        self.tardy + self.early_departure + self.absenteeism
    }

    /// Returns true if the combined count is strictly above `threshold`.
    pub fn exceeds(&self, threshold: u32) -> bool {
        self.combined() > threshold
    }
}

/// Outcome of analysing one employee's entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternAnalysis<'a> {
    /// Occurrence counts.
    pub counts: AttendanceCounts,
    /// Events matched on attendance dates, in entry order.
    pub events_attended: Vec<&'a EventRecord>,
}

/// Analyses one employee's attendance entries.
///
/// For each entry, in order:
///
/// 1. An entry missing either clock value is handled by the configured
///    [`MissingClockPolicy`] and takes no further part.
/// 2. A clock-in outside the grace period around `expected_start` is tardy.
///    A clock-in that does not parse is tardy as well.
/// 3. A clock-out strictly before `early_departure_cutoff` is an early
///    departure. A clock-out that does not parse is not.
/// 4. On a date that is not in `extreme_weather_days`, the events for the
///    employee's country are looked up. No events means an absence. Any
///    matched events are appended to the attended list either way.
///
/// Steps 2 to 4 are independent checks.
///
/// # Arguments
///
/// * `employee` - The employee whose entries these are
/// * `entries` - The employee's attendance entries, in log order
/// * `extreme_weather_days` - Dates excused by severe weather
/// * `events` - Indexed event feed
/// * `config` - Analysis rules
pub fn analyze_attendance_pattern<'a>(
    employee: &Employee,
    entries: &[&AttendanceEntry],
    extreme_weather_days: &BTreeSet<String>,
    events: &EventIndex<'a>,
    config: &AnalyzerConfig,
) -> PatternAnalysis<'a> {
    let mut analysis = PatternAnalysis::default();

    for entry in entries {
        let Some((clock_in, clock_out)) = entry.clock_pair() else {
            trace!(
                record_id = %employee.record_id,
                date = %entry.date,
                policy = ?config.missing_clock_policy,
                "Entry is missing a clock value"
            );
            if config.missing_clock_policy == MissingClockPolicy::CountAsAbsence {
                analysis.counts.absenteeism += 1;
            }
            continue;
        };

        if is_tardy(clock_in, config) {
            analysis.counts.tardy += 1;
        }

        if is_early_departure(clock_out, config) {
            analysis.counts.early_departure += 1;
        }

        if !extreme_weather_days.contains(&entry.date) {
            let matched = events.lookup(&entry.date, &employee.country);
            if matched.is_empty() {
                analysis.counts.absenteeism += 1;
            }
            analysis.events_attended.extend_from_slice(matched);
        }
    }

    analysis
}

/// Returns true if `clock_in` is not within the grace period of the
/// expected start.
pub fn is_tardy(clock_in: &str, config: &AnalyzerConfig) -> bool {
    match parse_time_of_day(clock_in) {
        Some(actual) => {
            !within_grace_period(actual, config.expected_start, config.grace_period_minutes)
        }
        None => true,
    }
}

/// Returns true if `clock_out` is strictly earlier than the cutoff.
pub fn is_early_departure(clock_out: &str, config: &AnalyzerConfig) -> bool {
    parse_time_of_day(clock_out).is_some_and(|time| time < config.early_departure_cutoff)
}
