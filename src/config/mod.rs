//! Configuration loading and management for the Attendance Analyzer.
//!
//! This module provides functionality to load the analysis rules and the
//! input/output locations from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_analyzer::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/analyzer.yaml").unwrap();
//! println!("Expected start: {}", config.analyzer().expected_start);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use types::{
    AnalyzerConfig, DEFAULT_EVENTS_URL, DEFAULT_WEATHER_URL, DEFAULT_WEATHER_YEAR, HoursMethod,
    MissingClockPolicy, RunConfig, SourcesConfig,
};
