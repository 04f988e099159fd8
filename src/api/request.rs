//! Request types for the Attendance Analyzer API.
//!
//! This module defines the JSON request structure for the `/analyze`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{AttendanceDataset, AttendanceEntry, Employee, EventRecord, WeatherRecord};

/// Request body for the `/analyze` endpoint.
///
/// The roster and attendance log are required. Reference feeds default to
/// empty, which means no day is excused by weather and every complete
/// entry counts as an absence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// The employee roster.
    pub employees: Vec<Employee>,
    /// The attendance log.
    pub attendance: Vec<AttendanceEntry>,
    /// Event reference records.
    #[serde(default)]
    pub events: Vec<EventRecord>,
    /// Weather reference records.
    #[serde(default)]
    pub weather: Vec<WeatherRecord>,
}

impl From<AnalyzeRequest> for AttendanceDataset {
    fn from(req: AnalyzeRequest) -> Self {
        AttendanceDataset {
            employees: req.employees,
            attendance: req.attendance,
            events: req.events,
            weather: req.weather,
        }
    }
}
