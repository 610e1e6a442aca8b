//! Error types for the research system

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while running researches
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ResearchError {
    /// No research is registered under the requested name
    #[error("Unknown research: {name}")]
    UnknownResearch {
        /// Name that was requested
        name: String,
    },

    /// Attached data can only be written once per key
    #[error("Data already attached for key '{key}'")]
    DataAlreadySet {
        /// Key that was already written
        key: String,
    },

    /// A research result could not be serialized
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Reason for the serialization failure
        reason: String,
    },
}

impl From<serde_json::Error> for ResearchError {
    fn from(err: serde_json::Error) -> Self {
        ResearchError::Serialization {
            reason: err.to_string(),
        }
    }
}
