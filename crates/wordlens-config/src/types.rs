//! Engine configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use wordlens_research::ResearcherOptions;
use wordlens_worker::WorkerOptions;

use crate::error::{ConfigError, Result};

/// Log levels accepted by [`LoggingConfig::level`]
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Locale used when a document carries none
    pub default_locale: String,
    /// Attach language morphology to researchers
    pub morphology: bool,
    /// Worker settings
    pub worker: WorkerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Worker channel and timeout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Capacity of the worker request queue
    pub queue_capacity: usize,
    /// Milliseconds a caller waits for a worker response
    pub request_timeout_ms: u64,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    pub level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
            morphology: true,
            worker: WorkerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
            request_timeout_ms: 10_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Check every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.default_locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Default locale must not be empty".to_string(),
            ));
        }
        if self.worker.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Worker queue capacity must be greater than 0".to_string(),
            ));
        }
        if self.worker.request_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Worker request timeout must be greater than 0".to_string(),
            ));
        }
        self.logging.level()?;
        Ok(())
    }

    /// Researcher options derived from this config
    pub fn researcher_options(&self) -> ResearcherOptions {
        ResearcherOptions {
            morphology: self.morphology,
        }
    }

    /// Options for spawning the in-process worker
    pub fn worker_options(&self) -> WorkerOptions {
        WorkerOptions {
            queue_capacity: self.worker.queue_capacity,
            request_timeout: Duration::from_millis(self.worker.request_timeout_ms),
            researcher: self.researcher_options(),
        }
    }
}

impl LoggingConfig {
    /// Parsed maximum log level
    pub fn level(&self) -> Result<tracing::Level> {
        match self.level.to_lowercase().as_str() {
            "trace" => Ok(tracing::Level::TRACE),
            "debug" => Ok(tracing::Level::DEBUG),
            "info" => Ok(tracing::Level::INFO),
            "warn" => Ok(tracing::Level::WARN),
            "error" => Ok(tracing::Level::ERROR),
            other => Err(ConfigError::Validation(format!(
                "Unknown log level '{}', expected one of {}",
                other,
                LOG_LEVELS.join(", ")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_locale, "en_US");
        assert_eq!(config.worker.queue_capacity, 64);
        assert_eq!(config.worker.request_timeout_ms, 10_000);
        assert_eq!(config.logging.level().unwrap(), tracing::Level::INFO);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = EngineConfig::default();
        config.worker.queue_capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        let mut config = EngineConfig::default();
        config.worker.request_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.default_locale = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_worker_options() {
        let mut config = EngineConfig::default();
        config.morphology = false;
        config.worker.request_timeout_ms = 250;

        let options = config.worker_options();
        assert_eq!(options.request_timeout, Duration::from_millis(250));
        assert_eq!(options.queue_capacity, 64);
        assert!(!options.researcher.morphology);
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let logging = LoggingConfig {
            level: "DEBUG".to_string(),
        };
        assert_eq!(logging.level().unwrap(), tracing::Level::DEBUG);
    }
}
