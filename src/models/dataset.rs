//! The four input collections of one analysis run.

use serde::{Deserialize, Serialize};

use super::{AttendanceEntry, Employee, EventRecord, WeatherRecord};

/// Materialized inputs for one run.
///
/// All collections are read-only snapshots; order is significant for the
/// roster (result order), attendance (event order) and events (match order).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDataset {
    /// The employee roster.
    pub employees: Vec<Employee>,
    /// The attendance log.
    pub attendance: Vec<AttendanceEntry>,
    /// Event reference feed.
    pub events: Vec<EventRecord>,
    /// Weather reference feed.
    pub weather: Vec<WeatherRecord>,
}
