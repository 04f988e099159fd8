//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the analyzer
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AnalyzerError, AnalyzerResult};

use super::types::{AnalyzerConfig, RunConfig, SourcesConfig};

/// Path tried when no configuration file is given explicitly.
pub const DEFAULT_CONFIG_PATH: &str = "config/analyzer.yaml";

/// Loads, validates and provides access to the run configuration.
///
/// # File Structure
///
/// ```text
/// analyzer:
///   expected_start: "08:00:00"
///   grace_period_minutes: 15
///   ...
/// sources:
///   employees_path: data/employees.json
///   ...
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_analyzer::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analyzer.yaml").unwrap();
/// println!("Threshold: {}", loader.analyzer().anomaly_threshold);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: RunConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - A value fails validation
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyzerResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyzerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content).map_err(|err| match err {
            AnalyzerError::ConfigParseError { message, .. } => AnalyzerError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, "Loaded configuration");
        Ok(loader)
    }

    /// Loads the given file, or falls back to [`DEFAULT_CONFIG_PATH`] and
    /// then to built-in defaults when no file is given.
    pub fn load_or_default(path: Option<&Path>) -> AnalyzerResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses and validates configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> AnalyzerResult<Self> {
        let config: RunConfig =
            serde_yaml::from_str(content).map_err(|e| AnalyzerError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Validates an already-built configuration.
    pub fn from_config(config: RunConfig) -> AnalyzerResult<Self> {
        validate(&config.analyzer)?;
        Ok(Self { config })
    }

    /// Returns the complete configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Returns the analysis rules.
    pub fn analyzer(&self) -> &AnalyzerConfig {
        &self.config.analyzer
    }

    /// Returns the input and output locations.
    pub fn sources(&self) -> &SourcesConfig {
        &self.config.sources
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> RunConfig {
        self.config
    }
}

/// Checks value ranges that serde cannot express.
fn validate(config: &AnalyzerConfig) -> AnalyzerResult<()> {
    if !is_four_digit_year(&config.weather_year) {
        return Err(AnalyzerError::InvalidConfig {
            field: "weather_year".to_string(),
            message: format!("expected four digits, got '{}'", config.weather_year),
        });
    }

    if config.grace_period_minutes < 0 {
        return Err(AnalyzerError::InvalidConfig {
            field: "grace_period_minutes".to_string(),
            message: format!("must not be negative, got {}", config.grace_period_minutes),
        });
    }

    if config.workdays_per_week == 0 {
        return Err(AnalyzerError::InvalidConfig {
            field: "workdays_per_week".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    Ok(())
}

/// Returns true for exactly four ASCII digits.
fn is_four_digit_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HoursMethod, MissingClockPolicy};

    fn config_path() -> &'static str {
        "./config/analyzer.yaml"
    }

    #[test]
    fn test_load_shipped_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.analyzer(), &AnalyzerConfig::default());
        assert_eq!(loader.sources(), &SourcesConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/analyzer.yaml");

        match result {
            Err(AnalyzerError::ConfigNotFound { path }) => {
                assert!(path.contains("analyzer.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("analyzer: [unclosed");
        assert!(matches!(result, Err(AnalyzerError::ConfigParseError { .. })));
    }

    #[test]
    fn test_unknown_policy_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("analyzer:\n  missing_clock_policy: guess\n");
        assert!(matches!(result, Err(AnalyzerError::ConfigParseError { .. })));
    }

    #[test]
    fn test_overrides_are_applied() {
        let yaml = r#"
analyzer:
  grace_period_minutes: 5
  missing_clock_policy: count_as_absence
  hours_method: clock_duration
sources:
  output_path: out/flagged.json
"#;
        let loader = ConfigLoader::from_yaml_str(yaml).unwrap();
        assert_eq!(loader.analyzer().grace_period_minutes, 5);
        assert_eq!(
            loader.analyzer().missing_clock_policy,
            MissingClockPolicy::CountAsAbsence
        );
        assert_eq!(loader.analyzer().hours_method, HoursMethod::ClockDuration);
        assert_eq!(
            loader.sources().output_path,
            std::path::PathBuf::from("out/flagged.json")
        );
    }

    #[test]
    fn test_bad_year_is_rejected() {
        let result = ConfigLoader::from_yaml_str("analyzer:\n  weather_year: \"23\"\n");
        match result {
            Err(AnalyzerError::InvalidConfig { field, .. }) => assert_eq!(field, "weather_year"),
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_grace_period_is_rejected() {
        let result = ConfigLoader::from_yaml_str("analyzer:\n  grace_period_minutes: -1\n");
        assert!(matches!(result, Err(AnalyzerError::InvalidConfig { .. })));
    }

    #[test]
    fn test_zero_workdays_is_rejected() {
        let result = ConfigLoader::from_yaml_str("analyzer:\n  workdays_per_week: 0\n");
        assert!(matches!(result, Err(AnalyzerError::InvalidConfig { .. })));
    }

    #[test]
    fn test_is_four_digit_year() {
        assert!(is_four_digit_year("2023"));
        assert!(!is_four_digit_year("202"));
        assert!(!is_four_digit_year("20a3"));
        assert!(!is_four_digit_year("20234"));
    }
}
