//! HTTP request handlers for the Attendance Analyzer API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::detect_anomalies;
use crate::models::{AnalysisReport, AttendanceDataset};

use super::request::AnalyzeRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .with_state(state)
}

/// Handler for POST /analyze endpoint.
///
/// Accepts a complete dataset and returns the flagged employees, evaluated
/// against the server's analysis rules.
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analysis request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return ApiErrorResponse::bad_request(rejection_to_error(correlation_id, rejection))
                .into_response();
        }
    };

    let dataset: AttendanceDataset = request.into();

    let start_time = Instant::now();
    let results = detect_anomalies(&dataset, state.config());
    let report = AnalysisReport::new(dataset.employees.len(), results);

    info!(
        correlation_id = %correlation_id,
        run_id = %report.run_id,
        employees_analyzed = report.employees_analyzed,
        flagged = report.results.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Analysis completed successfully"
    );

    (StatusCode::OK, Json(report)).into_response()
}

/// Maps a body extraction failure onto the API error vocabulary.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the failure
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::missing_content_type(),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}
