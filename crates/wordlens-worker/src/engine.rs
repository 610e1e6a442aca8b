//! Synchronous analysis executed inside the worker

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, info, warn};
use wordlens_paper::{Paper, RelatedKeyphrases};
use wordlens_research::{select_researcher, ResearchError, ResearcherOptions};
use wordlens_scoring::Assessor;

use crate::error::{Result, WorkerError};
use crate::protocol::{KeyphraseAnalysis, WorkerRequest, WorkerResponse, FOCUS_RESULT_KEY};

/// Runs requests against fresh researchers
///
/// Each request builds its own researcher, so no cached data crosses analyses.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine {
    options: ResearcherOptions,
}

impl AnalysisEngine {
    /// Create an engine with researcher options
    pub fn new(options: ResearcherOptions) -> Self {
        AnalysisEngine { options }
    }

    /// Execute one request
    pub fn handle(&self, request: WorkerRequest) -> Result<WorkerResponse> {
        match request {
            WorkerRequest::AnalyzeRelatedKeyphrases { paper, related } => Ok(
                WorkerResponse::Analysis(self.analyze_related_keyphrases(&paper, &related)),
            ),
            WorkerRequest::RunResearch { name, paper } => {
                self.run_research(&name, &paper).map(WorkerResponse::Research)
            }
        }
    }

    /// Score the focus keyphrase, every related keyphrase and readability
    ///
    /// The focus result is keyed by [`FOCUS_RESULT_KEY`]. Related keyphrases reuse
    /// the focus researcher's parsed text.
    pub fn analyze_related_keyphrases(
        &self,
        paper: &Paper,
        related: &RelatedKeyphrases,
    ) -> KeyphraseAnalysis {
        let researcher = select_researcher(paper, self.options);
        let mut seo = BTreeMap::new();

        debug!("Assessing focus keyphrase '{}'", paper.keyword());
        seo.insert(FOCUS_RESULT_KEY.to_string(), Assessor::seo().assess(&researcher));

        let related_assessor = Assessor::related_keyphrase();
        for (id, keyphrase) in related {
            if id == FOCUS_RESULT_KEY {
                warn!("Ignoring related keyphrase with an empty id");
                continue;
            }
            debug!("Assessing related keyphrase '{}' ({})", keyphrase.keyword, id);
            let sibling = researcher.for_keyphrase(&keyphrase.keyword, keyphrase.synonyms.clone());
            seo.insert(id.clone(), related_assessor.assess(&sibling));
        }

        let readability = Assessor::readability().assess(&researcher);
        info!(
            "Analyzed {} keyphrase(s), readability {}",
            seo.len(),
            readability.score
        );
        KeyphraseAnalysis { seo, readability }
    }

    /// Run one named research
    pub fn run_research(&self, name: &str, paper: &Paper) -> Result<Value> {
        let researcher = select_researcher(paper, self.options);
        researcher.run(name).map_err(|err| match err {
            ResearchError::UnknownResearch { name } => {
                warn!("Unknown research requested: {}", name);
                WorkerError::UnknownResearch { name }
            }
            other => WorkerError::Research(other),
        })
    }
}
