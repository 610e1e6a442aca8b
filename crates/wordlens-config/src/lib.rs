#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Configuration
//!
//! Loads [`EngineConfig`] from an optional TOML file overlaid with `WORDLENS_*`
//! environment variables, validates it, and installs the tracing subscriber.

pub mod error;
pub mod loader;
pub mod logging;
pub mod types;

pub use error::{ConfigError, Result};
pub use loader::ConfigLoader;
pub use types::{EngineConfig, LoggingConfig, WorkerConfig};
