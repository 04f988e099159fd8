//! Attendance entry model.

use serde::{Deserialize, Serialize};

use super::RecordId;

/// A single day's clock-in/clock-out record for one employee.
///
/// Clock values are kept as the raw `HH:MM:SS` strings supplied by the
/// attendance log. `None` marks an absent value. Malformed strings are not
/// rejected here; the analysis decides how each rule treats them.
///
/// # Example
///
/// ```
/// use attendance_analyzer::models::AttendanceEntry;
///
/// let entry: AttendanceEntry = serde_json::from_str(r#"{
///     "employee_record_id": 1,
///     "date": "2023-04-03",
///     "clock_in": "08:05:00",
///     "clock_out": null
/// }"#).unwrap();
/// assert!(!entry.has_complete_clock_data());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The roster record this entry belongs to.
    pub employee_record_id: RecordId,
    /// The calendar date (e.g., "2023-04-03").
    pub date: String,
    /// Clock-in time of day, if recorded.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out time of day, if recorded.
    #[serde(default)]
    pub clock_out: Option<String>,
}

impl AttendanceEntry {
    /// Returns both clock values when both are present.
    pub fn clock_pair(&self) -> Option<(&str, &str)> {
        match (self.clock_in.as_deref(), self.clock_out.as_deref()) {
            (Some(clock_in), Some(clock_out)) => Some((clock_in, clock_out)),
            _ => None,
        }
    }

    /// Returns true if both clock values are present and non-empty.
    ///
    /// Empty strings count as missing for hour totals.
    pub fn has_complete_clock_data(&self) -> bool {
        self.clock_pair()
            .is_some_and(|(clock_in, clock_out)| !clock_in.is_empty() && !clock_out.is_empty())
    }
}
