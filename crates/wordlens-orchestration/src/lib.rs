#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Analysis Orchestration
//!
//! The host-facing entry point. [`AnalysisOrchestrator::analyze`] turns document
//! fields and a keyphrase map into one [`wordlens_paper::Paper`], sends a single
//! batched keyphrase analysis to an [`wordlens_worker::AnalysisWorker`], runs any
//! requested ad-hoc researches concurrently and returns the combined
//! [`AnalysisResult`].

pub mod error;
pub mod models;
pub mod orchestrator;
pub mod sequencer;

pub use error::{OrchestrationError, Result};
pub use models::{AnalysisResult, AnalyzeOptions, ResearchOutcome};
pub use orchestrator::AnalysisOrchestrator;
pub use sequencer::{AnalysisSequencer, CallId};
