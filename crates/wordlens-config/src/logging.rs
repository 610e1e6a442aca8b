//! Tracing subscriber setup

use crate::error::Result;
use crate::types::LoggingConfig;

/// Install a fmt subscriber writing to stderr at the configured level
///
/// Returns `Ok(false)` when a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<bool> {
    let level = config.level()?;
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!("Logging initialized at {}", level);
    }
    Ok(installed)
}
