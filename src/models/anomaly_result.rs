//! Anomaly result models for the Attendance Analyzer.
//!
//! This module contains the [`AnomalyResult`] produced for each flagged
//! employee and the [`AnalysisReport`] envelope returned by the HTTP API.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{Employee, EventRecord, RecordId};

/// Attendance summary for an employee whose combined count crossed the
/// anomaly threshold.
///
/// The identity fields are copied from the roster record. `events` keeps
/// every matched event in attendance order, including repeats when several
/// entries share a date.
///
/// # Example
///
/// ```
/// use attendance_analyzer::models::{AnomalyResult, RecordId};
/// use rust_decimal::Decimal;
/// use serde_json::json;
/// use std::str::FromStr;
///
/// let result = AnomalyResult {
///     record_id: RecordId::from(1),
///     name: json!("Ada Byron"),
///     work_id_number: json!(5001),
///     email_address: json!("ada@example.com"),
///     country: "US".to_string(),
///     phone_number: json!("555-0101"),
///     average_hours_per_week: Decimal::from_str("21.25").unwrap(),
///     events: vec![],
/// };
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["average_hours_per_week"], 21.25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// Roster record identifier.
    pub record_id: RecordId,
    /// Employee name.
    pub name: Value,
    /// Employee work ID number.
    pub work_id_number: Value,
    /// Employee email address.
    pub email_address: Value,
    /// Employee country code.
    pub country: String,
    /// Employee phone number.
    pub phone_number: Value,
    /// Average hours worked per week, written as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_hours_per_week: Decimal,
    /// Events matched on the employee's attendance dates.
    pub events: Vec<EventRecord>,
}

impl AnomalyResult {
    /// Builds a result carrying the employee's identity fields.
    pub fn for_employee(
        employee: &Employee,
        average_hours_per_week: Decimal,
        events: Vec<EventRecord>,
    ) -> Self {
        Self {
            record_id: employee.record_id.clone(),
            name: employee.name.clone(),
            work_id_number: employee.work_id_number.clone(),
            email_address: employee.email_address.clone(),
            country: employee.country.clone(),
            phone_number: employee.phone_number.clone(),
            average_hours_per_week,
            events,
        }
    }
}

/// The envelope returned by the `/analyze` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique identifier for this analysis run.
    pub run_id: Uuid,
    /// When the analysis was performed.
    pub generated_at: DateTime<Utc>,
    /// Number of roster records examined.
    pub employees_analyzed: usize,
    /// Flagged employees, in roster order.
    pub results: Vec<AnomalyResult>,
}

impl AnalysisReport {
    /// Wraps results in a new report stamped with a fresh run id.
    pub fn new(employees_analyzed: usize, results: Vec<AnomalyResult>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            employees_analyzed,
            results,
        }
    }
}
