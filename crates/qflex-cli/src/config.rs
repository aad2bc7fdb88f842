//! Configuration for the `qflex` CLI.
//!
//! Supports loading configuration from:
//! 1. A YAML file (`--config`, or `~/.qflex/config.yaml` when present)
//! 2. Environment variables (with QFLEX_ prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use qflex_analysis::DEFAULT_TOLERANCE;

/// Complete CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "table" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

/// Analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Relative singular-value threshold for Schmidt ranks
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_format() -> String {
    "table".to_string()
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: default_format(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            tolerance: default_tolerance(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;

        let config: Config = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from `config_file` if given, else from the default location
    ///    if a file exists there
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => match default_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => Config::default(),
            },
        };

        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge `QFLEX_*` environment variables into this configuration.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Merge overrides from a variable lookup.
    ///
    /// Only variables that are set override the current values. A tolerance
    /// that does not parse as a number is ignored.
    pub fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("QFLEX_OUTPUT_FORMAT") {
            self.output.format = v;
        }
        if let Some(v) = var("QFLEX_TOLERANCE") {
            if let Ok(val) = v.parse() {
                self.analysis.tolerance = val;
            }
        }
        if let Some(v) = var("QFLEX_LOG_LEVEL") {
            self.logging.level = v;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.output.format.as_str() {
            "table" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid output format: {other}"
                )));
            }
        }

        let tol = self.analysis.tolerance;
        if !tol.is_finite() || tol < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "tolerance must be a finite non-negative number, got {tol}"
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Default config file location (`~/.qflex/config.yaml`).
pub fn default_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".qflex").join("config.yaml"))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.format, "table");
        assert_eq!(config.analysis.tolerance, 1e-10);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml_ng::from_str("analysis:\n  tolerance: 1.0e-6\n").unwrap();
        assert_eq!(config.analysis.tolerance, 1e-6);
        assert_eq!(config.output.format, "table");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output:\n  format: json\nlogging:\n  level: debug\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.output.format, "json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "output:\n  format: xml\n").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("/nonexistent/qflex/config.yaml"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("QFLEX_OUTPUT_FORMAT", "json"),
            ("QFLEX_TOLERANCE", "1e-4"),
        ]);
        let config = Config::default().merge_vars(|k| vars.get(k).map(ToString::to_string));
        assert_eq!(config.output.format, "json");
        assert_eq!(config.analysis.tolerance, 1e-4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unparseable_tolerance_ignored() {
        let config = Config::default().merge_vars(|k| {
            (k == "QFLEX_TOLERANCE").then(|| "small".to_string())
        });
        assert_eq!(config.analysis.tolerance, DEFAULT_TOLERANCE);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.analysis.tolerance = -1.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.analysis.tolerance = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }
}
