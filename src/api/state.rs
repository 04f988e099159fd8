//! Application state for the Attendance Analyzer API.

use std::sync::Arc;

use crate::config::AnalyzerConfig;

/// Shared application state.
///
/// Holds the analysis rules every request is evaluated against.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AnalyzerConfig>,
}

impl AppState {
    /// Creates a new application state with the given rules.
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the analysis rules.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }
}
