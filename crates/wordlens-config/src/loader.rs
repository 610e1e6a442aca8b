//! Configuration loading from file and environment

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::error::Result;
use crate::types::EngineConfig;

/// Environment variable prefix, e.g. `WORDLENS_WORKER__QUEUE_CAPACITY`
pub const ENV_PREFIX: &str = "WORDLENS";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";

/// Loads and saves [`EngineConfig`]
///
/// Sources in increasing priority: built-in defaults, the TOML file (optional),
/// then `WORDLENS_*` environment variables.
pub struct ConfigLoader {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader for the default config file location
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    /// Loader for a specific config file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Use another environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordlens")
            .join("config.toml")
    }

    /// Load and validate the configuration
    pub fn load(&self) -> Result<EngineConfig> {
        debug!("Loading config from {}", self.config_path.display());
        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            );

        let config: EngineConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as TOML, creating parent directories
    pub fn save(&self, config: &EngineConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
