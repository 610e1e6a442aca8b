#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Worker Boundary
//!
//! Analysis runs behind a message-passing boundary. Callers talk to an
//! [`AnalysisWorker`]; the in-process implementation is a [`WorkerHandle`] that
//! sends serializable request envelopes to a tokio task and correlates the
//! responses by request id.
//!
//! ```ignore
//! let worker = spawn_worker(WorkerOptions::default());
//! let analysis = worker.analyze_related_keyphrases(paper, related).await?;
//! ```

pub mod engine;
pub mod error;
pub mod handle;
pub mod protocol;
pub mod worker;

pub use engine::AnalysisEngine;
pub use error::WorkerError;
pub use handle::{spawn_worker, WorkerHandle, WorkerOptions};
pub use protocol::{
    KeyphraseAnalysis, RequestEnvelope, RequestId, ResponseEnvelope, WorkerRequest,
    WorkerResponse, FOCUS_RESULT_KEY,
};
pub use worker::AnalysisWorker;
