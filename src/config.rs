//! Configuration management for the travel recommendation search
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelRecError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelRecConfig {
    /// Where the recommendation dataset lives
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// How results are shown
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset resource settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// `http(s)://` URL or filesystem path of the JSON document
    #[serde(default = "default_dataset_source")]
    pub source: String,
    /// Request timeout in seconds, HTTP sources only
    #[serde(default = "default_dataset_timeout")]
    pub timeout_seconds: u32,
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Image shown in place of a recommendation image that fails to load
    #[serde(default = "default_fallback_image")]
    pub fallback_image: String,
    /// Fewer selected items than this produce a message instead of cards
    #[serde(default = "default_min_results")]
    pub min_results: usize,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_dataset_source() -> String {
    "travel_recommendation_api.json".to_string()
}

fn default_dataset_timeout() -> u32 {
    30
}

fn default_fallback_image() -> String {
    "nueva-york.jpg".to_string()
}

fn default_min_results() -> usize {
    crate::error::DEFAULT_MIN_RESULTS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            source: default_dataset_source(),
            timeout_seconds: default_dataset_timeout(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fallback_image: default_fallback_image(),
            min_results: default_min_results(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TravelRecConfig {
    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> crate::Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path()
                .filter(|path| path.exists())
                .unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVELREC_DATASET__SOURCE
        builder = builder.add_source(
            Environment::with_prefix("TRAVELREC")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| {
            TravelRecError::config(format!("Failed to build configuration: {e}"))
        })?;

        let mut config: TravelRecConfig = settings.try_deserialize().map_err(|e| {
            TravelRecError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelrec").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.dataset.source.trim().is_empty() {
            self.dataset.source = default_dataset_source();
        }
        if self.dataset.timeout_seconds == 0 {
            self.dataset.timeout_seconds = default_dataset_timeout();
        }
        if self.display.fallback_image.trim().is_empty() {
            self.display.fallback_image = default_fallback_image();
        }
        if self.display.min_results == 0 {
            self.display.min_results = default_min_results();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> crate::Result<()> {
        if self.dataset.timeout_seconds > 300 {
            return Err(TravelRecError::config(
                "Dataset timeout cannot exceed 300 seconds",
            ));
        }

        if self.display.min_results < crate::error::DEFAULT_MIN_RESULTS {
            return Err(TravelRecError::config(format!(
                "Minimum results cannot be less than {}",
                crate::error::DEFAULT_MIN_RESULTS
            )));
        }

        if self.display.min_results > 100 {
            return Err(TravelRecError::config(
                "Minimum results cannot exceed 100",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> crate::Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelRecError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelRecError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}

/// True for `http://` and `https://` dataset locations
#[must_use]
pub fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = TravelRecConfig::default();
        assert_eq!(config.dataset.source, "travel_recommendation_api.json");
        assert_eq!(config.dataset.timeout_seconds, 30);
        assert_eq!(config.display.fallback_image, "nueva-york.jpg");
        assert_eq!(config.display.min_results, 2);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case("https://example.com/data.json", true)]
    #[case("http://localhost:8080/api.json", true)]
    #[case("data/travel_recommendation_api.json", false)]
    #[case("httpdata.json", false)]
    fn test_is_http_source(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(is_http_source(source), expected);
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelRecConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelRecConfig::default();
        config.dataset.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[rstest]
    #[case(1, Some("cannot be less than 2"))]
    #[case(2, None)]
    #[case(3, None)]
    #[case(100, None)]
    #[case(101, Some("cannot exceed 100"))]
    fn test_config_validation_min_results(#[case] min_results: usize, #[case] error: Option<&str>) {
        let mut config = TravelRecConfig::default();
        config.display.min_results = min_results;
        let result = config.validate();
        match error {
            Some(expected) => assert!(result.unwrap_err().to_string().contains(expected)),
            None => assert!(result.is_ok()),
        }
    }

    #[test]
    fn test_single_result_minimum_in_file_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[display]\nmin_results = 1").unwrap();

        let result = TravelRecConfig::load_from_path(Some(file.path().to_path_buf()));
        assert!(matches!(result, Err(TravelRecError::Config { .. })));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TravelRecConfig::default();
        config.dataset.source = "  ".to_string();
        config.display.min_results = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.dataset.source, "travel_recommendation_api.json");
        assert_eq!(config.display.min_results, 2);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[dataset]\nsource = \"https://example.com/api.json\"\n\n[display]\nmin_results = 3"
        )
        .unwrap();

        let config = TravelRecConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.dataset.source, "https://example.com/api.json");
        assert!(is_http_source(&config.dataset.source));
        assert_eq!(config.display.min_results, 3);
        assert_eq!(config.display.fallback_image, "nueva-york.jpg");
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelRecConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelrec"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
