//! Error types for the orchestration module

use thiserror::Error;
use wordlens_worker::WorkerError;

/// Errors that reject a whole analysis call
#[derive(Debug, Error)]
pub enum OrchestrationError {
    /// The worker could not complete a dispatched request
    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
}

/// Result type for orchestration operations
pub type Result<T> = std::result::Result<T, OrchestrationError>;
