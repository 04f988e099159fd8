//! HTTP API module for the Attendance Analyzer.
//!
//! This module exposes anomaly detection as a REST endpoint so callers can
//! submit a dataset directly instead of going through files and feeds.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalyzeRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
