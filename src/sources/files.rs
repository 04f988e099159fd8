//! JSON file input and output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::AnomalyResult;

/// Loads a JSON array of records from a file.
///
/// # Returns
///
/// The records in file order, or:
/// - `InputNotFound` if the file cannot be read
/// - `InputParseError` if it is not a JSON array of `T`
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> AnalyzerResult<Vec<T>> {
    let path_str = path.display().to_string();
    info!(path = %path_str, "Loading data");

    let content = fs::read_to_string(path).map_err(|_| AnalyzerError::InputNotFound {
        path: path_str.clone(),
    })?;

    serde_json::from_str(&content).map_err(|e| AnalyzerError::InputParseError {
        path: path_str,
        message: e.to_string(),
    })
}

/// Writes the result document.
///
/// The array is pretty-printed to a sibling temporary file which is then
/// renamed over `path`, so readers never see a partial document. Missing
/// parent directories are created.
pub fn write_results(path: &Path, results: &[AnomalyResult]) -> AnalyzerResult<()> {
    let path_str = path.display().to_string();
    let write_error = |e: std::io::Error| AnalyzerError::OutputWriteError {
        path: path_str.clone(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }

    let document =
        serde_json::to_string_pretty(results).map_err(|e| AnalyzerError::OutputWriteError {
            path: path_str.clone(),
            message: e.to_string(),
        })?;

    let staging = staging_path(path);
    fs::write(&staging, document).map_err(write_error)?;
    fs::rename(&staging, path).map_err(|e| {
        let _ = fs::remove_file(&staging);
        write_error(e)
    })?;

    info!(path = %path_str, results = results.len(), "Saved results");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
