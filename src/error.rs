//! Error types for the Attendance Analyzer.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Every variant describes a condition that is fatal to a whole run: missing
//! or unreadable inputs, failed reference feeds, unwritable output and bad
//! configuration. Per-entry problems such as malformed clock times are
//! absorbed by the analysis itself and never surface here.

use thiserror::Error;

/// The main error type for the Attendance Analyzer.
///
/// # Example
///
/// ```
/// use attendance_analyzer::error::AnalyzerError;
///
/// let error = AnalyzerError::InputNotFound {
///     path: "data/employees.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: data/employees.json");
/// ```
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What was wrong with it.
        message: String,
    },

    /// A roster or attendance file could not be read.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that could not be read.
        path: String,
    },

    /// A roster or attendance file was not valid JSON for its record type.
    #[error("Failed to parse input file '{path}': {message}")]
    InputParseError {
        /// The path of the file.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A reference feed request failed before a response arrived.
    #[error("Request to '{url}' failed: {message}")]
    FeedRequestFailed {
        /// The feed URL.
        url: String,
        /// A description of the transport failure.
        message: String,
    },

    /// A reference feed answered with a non-success status.
    #[error("Failed to fetch data from {url}. Status code {status}")]
    FeedStatus {
        /// The feed URL.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// A reference feed body could not be decoded.
    #[error("Failed to decode response from '{url}': {message}")]
    FeedParseError {
        /// The feed URL.
        url: String,
        /// A description of the decode error.
        message: String,
    },

    /// The result document could not be written.
    #[error("Failed to write results to '{path}': {message}")]
    OutputWriteError {
        /// The destination path.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

/// A type alias for Results that return AnalyzerError.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
