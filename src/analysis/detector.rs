//! Roster-wide anomaly detection.
//!
//! This module runs the per-employee analysis over a whole
//! [`AttendanceDataset`], in roster order.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::models::{AnomalyResult, AttendanceDataset, AttendanceEntry, RecordId};

use super::event_matcher::EventIndex;
use super::extreme_weather::extreme_weather_days;
use super::metrics::build_anomaly_result;
use super::pattern_analyzer::analyze_attendance_pattern;

/// Detects employees with anomalous attendance patterns.
///
/// Each employee is analysed independently against their own attendance
/// entries; entries referencing no roster record are never looked at.
/// Results are returned in roster order. The dataset is not modified, so
/// running twice on the same input gives identical output.
///
/// # Example
///
/// ```
/// use attendance_analyzer::analysis::detect_anomalies;
/// use attendance_analyzer::config::AnalyzerConfig;
/// use attendance_analyzer::models::AttendanceDataset;
///
/// let dataset: AttendanceDataset = serde_json::from_str(r#"{
///     "employees": [{
///         "record_id": 1, "name": "Ada Byron", "work_id_number": 5001,
///         "email_address": "ada@example.com", "country": "US", "phone_number": "555-0101"
///     }],
///     "attendance": [
///         {"employee_record_id": 1, "date": "2023-04-03", "clock_in": "09:00:00", "clock_out": "17:00:00"},
///         {"employee_record_id": 1, "date": "2023-04-04", "clock_in": "09:00:00", "clock_out": "17:00:00"}
///     ],
///     "events": [],
///     "weather": []
/// }"#).unwrap();
///
/// let results = detect_anomalies(&dataset, &AnalyzerConfig::default());
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].average_hours_per_week, rust_decimal::Decimal::from(40));
/// ```
pub fn detect_anomalies(
    dataset: &AttendanceDataset,
    config: &AnalyzerConfig,
) -> Vec<AnomalyResult> {
    info!(
        employees = dataset.employees.len(),
        attendance_entries = dataset.attendance.len(),
        events = dataset.events.len(),
        weather_records = dataset.weather.len(),
        "Performing calculations"
    );

    let attendance_by_employee = group_by_employee(&dataset.attendance);
    let event_index = EventIndex::build(&dataset.events);
    let mut weather_days_by_country: HashMap<&str, BTreeSet<String>> = HashMap::new();
    let mut results = Vec::new();

    for employee in &dataset.employees {
        let entries: &[&AttendanceEntry] = attendance_by_employee
            .get(&employee.record_id)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let weather_days = weather_days_by_country
            .entry(employee.country.as_str())
            .or_insert_with(|| {
                extreme_weather_days(
                    &dataset.weather,
                    &employee.country,
                    &config.weather_year,
                    &config.severe_weather_conditions,
                )
            });

        let analysis =
            analyze_attendance_pattern(employee, entries, weather_days, &event_index, config);

        debug!(
            record_id = %employee.record_id,
            entries = entries.len(),
            tardy = analysis.counts.tardy,
            early_departure = analysis.counts.early_departure,
            absenteeism = analysis.counts.absenteeism,
            events_attended = analysis.events_attended.len(),
            "Analysed employee"
        );

        if let Some(result) = build_anomaly_result(employee, entries, &analysis, config) {
            debug!(
                record_id = %result.record_id,
                average_hours_per_week = %result.average_hours_per_week,
                "Appending data"
            );
            results.push(result);
        }
    }

    info!(flagged = results.len(), "Analysis complete");
    results
}

/// Groups entries by employee id, keeping log order within each group.
fn group_by_employee(
    attendance: &[AttendanceEntry],
) -> HashMap<&RecordId, Vec<&AttendanceEntry>> {
    let mut grouped: HashMap<&RecordId, Vec<&AttendanceEntry>> = HashMap::new();
    for entry in attendance {
        grouped
            .entry(&entry.employee_record_id)
            .or_default()
            .push(entry);
    }
    grouped
}
