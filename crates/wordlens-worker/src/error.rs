//! Error types for the worker boundary

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wordlens_research::ResearchError;

/// Errors crossing the worker boundary
///
/// Errors are serializable so a worker can report them inside a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum WorkerError {
    /// No research is registered under the name
    #[error("Unknown research: {name}")]
    UnknownResearch {
        /// Requested research name
        name: String,
    },

    /// The worker cannot accept or answer requests
    #[error("Worker unavailable: {reason}")]
    Unavailable {
        /// Reason the worker is unavailable
        reason: String,
    },

    /// No response arrived in time
    #[error("Worker request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The worker answered with a response of the wrong kind
    #[error("Protocol error: {reason}")]
    Protocol {
        /// Description of the mismatch
        reason: String,
    },

    /// A research failed inside the worker
    #[error("Research failed: {0}")]
    Research(#[from] ResearchError),
}

impl WorkerError {
    /// Whether the error concerns the boundary itself rather than one request's work
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            WorkerError::Unavailable { .. } | WorkerError::Timeout { .. } | WorkerError::Protocol { .. }
        )
    }
}

impl From<serde_json::Error> for WorkerError {
    fn from(err: serde_json::Error) -> Self {
        WorkerError::Protocol {
            reason: err.to_string(),
        }
    }
}

/// Result type for worker operations
pub type Result<T> = std::result::Result<T, WorkerError>;
