//! Input and output for analysis runs.
//!
//! The roster and attendance log are read from JSON files, the event and
//! weather reference data are fetched over HTTP, and flagged employees are
//! written back out as a single JSON document. Every failure here is fatal
//! to the run.

mod feeds;
mod files;

pub use feeds::FeedClient;
pub use files::{load_json_file, write_results};

use crate::config::SourcesConfig;
use crate::error::AnalyzerResult;
use crate::models::AttendanceDataset;

/// Loads all four inputs of a run.
///
/// Both files are read first; the two feeds are then fetched concurrently.
/// The first error aborts the load.
pub async fn load_dataset(
    sources: &SourcesConfig,
    client: &FeedClient,
) -> AnalyzerResult<AttendanceDataset> {
    let employees = load_json_file(&sources.employees_path)?;
    let attendance = load_json_file(&sources.attendance_path)?;

    let (events, weather) = tokio::try_join!(
        client.fetch(&sources.events_url),
        client.fetch(&sources.weather_url)
    )?;

    Ok(AttendanceDataset {
        employees,
        attendance,
        events,
        weather,
    })
}
