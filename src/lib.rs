//! Attendance Analyzer
//!
//! This crate flags employees whose attendance shows a pattern of tardiness,
//! early departures or absences. Attendance entries are evaluated against a
//! grace period, an early departure cutoff, severe weather days and public
//! events, and each employee whose combined count exceeds the anomaly
//! threshold is reported with their average weekly hours and the events
//! they attended.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod sources;
