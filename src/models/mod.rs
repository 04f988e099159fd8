//! Core data models for the Attendance Analyzer.
//!
//! This module contains all the domain models used throughout the analyzer.

mod anomaly_result;
mod attendance;
mod dataset;
mod employee;
mod reference;

pub use anomaly_result::{AnalysisReport, AnomalyResult};
pub use attendance::AttendanceEntry;
pub use dataset::AttendanceDataset;
pub use employee::{Employee, RecordId};
pub use reference::{EventRecord, WeatherRecord};
