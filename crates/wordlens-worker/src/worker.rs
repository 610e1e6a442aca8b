//! The worker seam used by the orchestrator

use async_trait::async_trait;
use serde_json::Value;
use wordlens_paper::{Paper, RelatedKeyphrases};

use crate::error::Result;
use crate::protocol::KeyphraseAnalysis;

/// Asynchronous analysis backend
///
/// Implemented by [`crate::WorkerHandle`] and by test doubles.
#[async_trait]
pub trait AnalysisWorker: Send + Sync {
    /// Score the focus keyphrase, the related keyphrases and readability in one call
    async fn analyze_related_keyphrases(
        &self,
        paper: Paper,
        related: RelatedKeyphrases,
    ) -> Result<KeyphraseAnalysis>;

    /// Run one named research
    async fn run_research(&self, name: String, paper: Paper) -> Result<Value>;
}
