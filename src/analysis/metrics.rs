//! Hour metrics and anomaly result assembly.
//!
//! This module turns a [`PatternAnalysis`] into an [`AnomalyResult`] for
//! employees whose combined count crosses the anomaly threshold, computing
//! the average hours worked per week on the way.

use rust_decimal::Decimal;

use crate::config::{AnalyzerConfig, HoursMethod};
use crate::models::{AnomalyResult, AttendanceEntry, Employee};

use super::grace_period::parse_time_of_day;
use super::pattern_analyzer::PatternAnalysis;

/// Combined count that must be exceeded for an employee to be reported.
pub const DEFAULT_ANOMALY_THRESHOLD: u32 = 3;

/// Workdays used to scale the per-entry average up to a week.
pub const DEFAULT_WORKDAYS_PER_WEEK: u32 = 5;

/// Reads the hour field of a clock value.
///
/// The hour is the integer before the first `:`. A value without a `:` or
/// whose hour field is not an integer yields `0`.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::hour_component;
///
/// assert_eq!(hour_component("17:45:00"), 17);
/// assert_eq!(hour_component("noon"), 0);
/// ```
pub fn hour_component(value: &str) -> i64 {
    value
        .split_once(':')
        .and_then(|(hour, _)| hour.trim().parse().ok())
        .unwrap_or(0)
}

/// Hours worked as the difference of the hour fields.
///
/// Minutes and seconds are discarded and overnight shifts come out
/// negative: `08:50` to `16:10` counts as 8 hours.
pub fn hour_component_delta(clock_in: &str, clock_out: &str) -> Decimal {
    Decimal::from(hour_component(clock_out)) - Decimal::from(hour_component(clock_in))
}

/// Hours worked as elapsed clock time at minute precision.
///
/// A clock-out earlier than the clock-in is taken to be on the next day.
/// If either value does not parse, the entry contributes zero.
pub fn clock_duration_hours(clock_in: &str, clock_out: &str) -> Decimal {
    let (Some(start), Some(end)) = (parse_time_of_day(clock_in), parse_time_of_day(clock_out))
    else {
        return Decimal::ZERO;
    };

    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }

    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Hours contributed by one entry, or `None` if it lacks complete clock
/// data.
pub fn entry_hours(entry: &AttendanceEntry, method: HoursMethod) -> Option<Decimal> {
    if !entry.has_complete_clock_data() {
        return None;
    }
    let (clock_in, clock_out) = entry.clock_pair()?;

    Some(match method {
        HoursMethod::HourComponent => hour_component_delta(clock_in, clock_out),
        HoursMethod::ClockDuration => clock_duration_hours(clock_in, clock_out),
    })
}

/// Sums the hours of every entry with complete clock data.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::total_hours_worked;
/// use attendance_analyzer::config::HoursMethod;
/// use attendance_analyzer::models::AttendanceEntry;
/// use rust_decimal::Decimal;
///
/// let entries: Vec<AttendanceEntry> = serde_json::from_str(r#"[
///     {"employee_record_id": 1, "date": "2023-04-03", "clock_in": "08:00:00", "clock_out": "16:00:00"},
///     {"employee_record_id": 1, "date": "2023-04-04", "clock_in": null, "clock_out": "16:00:00"}
/// ]"#).unwrap();
/// let refs: Vec<&AttendanceEntry> = entries.iter().collect();
///
/// assert_eq!(total_hours_worked(&refs, HoursMethod::HourComponent), Decimal::from(8));
/// ```
pub fn total_hours_worked(entries: &[&AttendanceEntry], method: HoursMethod) -> Decimal {
    entries
        .iter()
        .filter_map(|entry| entry_hours(entry, method))
        .sum()
}

/// Scales total hours to a weekly average.
///
/// The divisor is the number of all entries, complete or not. With no
/// entries the average is zero.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::average_hours_per_week;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let average = average_hours_per_week(Decimal::from(17), 4, 5);
/// assert_eq!(average, Decimal::from_str("21.25").unwrap());
/// assert_eq!(average_hours_per_week(Decimal::from(17), 0, 5), Decimal::ZERO);
/// ```
pub fn average_hours_per_week(
    total_hours: Decimal,
    entry_count: usize,
    workdays_per_week: u32,
) -> Decimal {
    if entry_count == 0 {
        return Decimal::ZERO;
    }

    total_hours / Decimal::from(entry_count) * Decimal::from(workdays_per_week)
}

/// Builds the anomaly result for an employee whose combined count exceeds
/// the configured threshold.
///
/// Returns `None` when the threshold is not exceeded. Matched events are
/// carried over in order, duplicates included.
pub fn build_anomaly_result(
    employee: &Employee,
    entries: &[&AttendanceEntry],
    analysis: &PatternAnalysis<'_>,
    config: &AnalyzerConfig,
) -> Option<AnomalyResult> {
    if !analysis.counts.exceeds(config.anomaly_threshold) {
        return None;
    }

    let total_hours = total_hours_worked(entries, config.hours_method);
    let average = average_hours_per_week(total_hours, entries.len(), config.workdays_per_week);
    let events = analysis.events_attended.iter().map(|&e| e.clone()).collect();

    Some(AnomalyResult::for_employee(employee, average, events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AttendanceCounts;
    use crate::models::{EventRecord, RecordId};
    use serde_json::json;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry(clock_in: Option<&str>, clock_out: Option<&str>) -> AttendanceEntry {
        AttendanceEntry {
            employee_record_id: RecordId::from(1),
            date: "2023-04-03".to_string(),
            clock_in: clock_in.map(str::to_string),
            clock_out: clock_out.map(str::to_string),
        }
    }

    fn employee() -> Employee {
        Employee {
            record_id: RecordId::from(1),
            name: json!("Ada Byron"),
            work_id_number: json!(5001),
            email_address: json!("ada@example.com"),
            country: "US".to_string(),
            phone_number: json!("555-0101"),
        }
    }

    // ==========================================================================
    // MA-001: hour component ignores minutes and seconds
    // ==========================================================================
    #[test]
    fn test_ma_001_hour_component_ignores_minutes() {
        assert_eq!(hour_component_delta("08:50:00", "16:10:00"), dec("8"));
        assert_eq!(hour_component_delta("08:00:00", "17:59:59"), dec("9"));
    }

    // ==========================================================================
    // MA-002: overnight shift yields negative delta
    // ==========================================================================
    #[test]
    fn test_ma_002_overnight_is_negative() {
        assert_eq!(hour_component_delta("22:00:00", "06:00:00"), dec("-16"));
    }

    // ==========================================================================
    // MA-003: malformed side contributes zero
    // ==========================================================================
    #[test]
    fn test_ma_003_malformed_side_is_zero() {
        assert_eq!(hour_component("noon"), 0);
        assert_eq!(hour_component("ab:cd:ef"), 0);
        assert_eq!(hour_component_delta("bad", "16:00:00"), dec("16"));
        assert_eq!(hour_component_delta("08:00:00", "bad"), dec("-8"));
    }

    // ==========================================================================
    // MA-004: seventeen hours averaged over four entries
    // ==========================================================================
    #[test]
    fn test_ma_004_average_over_all_entries() {
        let entries = vec![
            entry(Some("08:00:00"), Some("16:00:00")),
            entry(Some("07:00:00"), Some("16:30:00")),
            entry(None, Some("16:00:00")),
            entry(Some("08:00:00"), None),
        ];
        let refs: Vec<&AttendanceEntry> = entries.iter().collect();

        let total = total_hours_worked(&refs, HoursMethod::HourComponent);
        assert_eq!(total, dec("17"));
        assert_eq!(average_hours_per_week(total, refs.len(), 5), dec("21.25"));
    }

    // ==========================================================================
    // MA-005: empty strings are excluded from totals
    // ==========================================================================
    #[test]
    fn test_ma_005_empty_strings_excluded() {
        let e = entry(Some(""), Some("16:00:00"));
        assert_eq!(entry_hours(&e, HoursMethod::HourComponent), None);
    }

    // ==========================================================================
    // MA-006: clock duration keeps minutes and wraps midnight
    // ==========================================================================
    #[test]
    fn test_ma_006_clock_duration() {
        assert_eq!(clock_duration_hours("08:30:00", "16:00:00"), dec("7.5"));
        assert_eq!(clock_duration_hours("22:00:00", "06:00:00"), dec("8"));
        assert_eq!(clock_duration_hours("bad", "06:00:00"), Decimal::ZERO);
    }

    // ==========================================================================
    // MA-007: zero entries give zero average
    // ==========================================================================
    #[test]
    fn test_ma_007_zero_entries() {
        assert_eq!(average_hours_per_week(dec("10"), 0, 5), Decimal::ZERO);
    }

    // ==========================================================================
    // MA-008: result only built above threshold
    // ==========================================================================
    #[test]
    fn test_ma_008_threshold_gate() {
        let entries = vec![entry(Some("08:00:00"), Some("16:00:00"))];
        let refs: Vec<&AttendanceEntry> = entries.iter().collect();
        let config = AnalyzerConfig::default();

        let at_threshold = PatternAnalysis {
            counts: AttendanceCounts {
                tardy: 1,
                early_departure: 1,
                absenteeism: 1,
            },
            events_attended: vec![],
        };
        assert!(build_anomaly_result(&employee(), &refs, &at_threshold, &config).is_none());

        let over_threshold = PatternAnalysis {
            counts: AttendanceCounts {
                tardy: 2,
                early_departure: 1,
                absenteeism: 1,
            },
            events_attended: vec![],
        };
        let result = build_anomaly_result(&employee(), &refs, &over_threshold, &config).unwrap();
        assert_eq!(result.average_hours_per_week, dec("40"));
        assert_eq!(result.name, "Ada Byron");
    }

    // ==========================================================================
    // MA-009: events carried over with duplicates
    // ==========================================================================
    #[test]
    fn test_ma_009_events_carried_with_duplicates() {
        let parade: EventRecord = serde_json::from_value(json!({
            "country": "US",
            "event_date": "2023-07-04",
            "event_name": "Parade"
        }))
        .unwrap();
        let entries = vec![entry(Some("08:00:00"), Some("16:00:00"))];
        let refs: Vec<&AttendanceEntry> = entries.iter().collect();

        let analysis = PatternAnalysis {
            counts: AttendanceCounts {
                tardy: 4,
                early_departure: 0,
                absenteeism: 0,
            },
            events_attended: vec![&parade, &parade],
        };

        let result =
            build_anomaly_result(&employee(), &refs, &analysis, &AnalyzerConfig::default())
                .unwrap();
        assert_eq!(result.events, vec![parade.clone(), parade.clone()]);
    }

    #[test]
    fn test_clock_duration_method_in_totals() {
        let entries = vec![entry(Some("08:30:00"), Some("16:00:00"))];
        let refs: Vec<&AttendanceEntry> = entries.iter().collect();
        assert_eq!(
            total_hours_worked(&refs, HoursMethod::ClockDuration),
            dec("7.5")
        );
        assert_eq!(
            total_hours_worked(&refs, HoursMethod::HourComponent),
            dec("8")
        );
    }

    // ==========================================================================
    // MA-010: extreme hour fields do not overflow
    // ==========================================================================
    #[test]
    fn test_ma_010_extreme_hour_fields() {
        assert_eq!(
            hour_component_delta("-1:00:00", "9223372036854775807:00:00"),
            dec("9223372036854775808")
        );
        assert_eq!(
            hour_component_delta("9223372036854775807:00:00", "-9223372036854775808:00:00"),
            dec("-18446744073709551615")
        );

        let entries = vec![
            entry(Some("-1:00:00"), Some("9223372036854775807:00:00")),
            entry(Some("-1:00:00"), Some("9223372036854775807:00:00")),
        ];
        let refs: Vec<&AttendanceEntry> = entries.iter().collect();
        assert_eq!(
            total_hours_worked(&refs, HoursMethod::HourComponent),
            dec("18446744073709551616")
        );
    }
}
