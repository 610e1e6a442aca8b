//! The analysis orchestrator

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};
use wordlens_paper::{
    DocumentFields, KeyphraseEntry, KeyphraseMap, Paper, PaperAttributes, RelatedKeyphrase,
    RelatedKeyphrases, DEFAULT_LOCALE, FOCUS_KEYPHRASE_ID,
};
use wordlens_worker::{AnalysisWorker, FOCUS_RESULT_KEY};

use crate::error::Result;
use crate::models::{AnalysisResult, AnalyzeOptions, ResearchOutcome};

/// Coordinates one analysis call against a worker
///
/// The orchestrator keeps no state between calls.
pub struct AnalysisOrchestrator {
    worker: Arc<dyn AnalysisWorker>,
    default_locale: String,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator; `default_locale` applies when the fields carry none
    pub fn new(worker: Arc<dyn AnalysisWorker>, default_locale: impl Into<String>) -> Self {
        let default_locale = default_locale.into();
        AnalysisOrchestrator {
            worker,
            default_locale: if default_locale.trim().is_empty() {
                DEFAULT_LOCALE.to_string()
            } else {
                default_locale
            },
        }
    }

    /// Locale used when the document fields carry none
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Analyze a document against its keyphrases
    ///
    /// One batched request scores every keyphrase; requested researches run
    /// concurrently afterwards. An unknown or failing research is reported in its
    /// own outcome, while a worker transport failure rejects the whole call.
    pub async fn analyze(
        &self,
        fields: &DocumentFields,
        keyphrases: &KeyphraseMap,
        options: &AnalyzeOptions,
    ) -> Result<AnalysisResult> {
        let focus = keyphrases
            .get(FOCUS_KEYPHRASE_ID)
            .cloned()
            .unwrap_or_default();
        let related = related_keyphrases(keyphrases);
        let paper = self.build_paper(fields, &focus);
        debug!(
            "Analyzing '{}' paper with {} related keyphrase(s)",
            paper.locale(),
            related.len()
        );

        let analysis = self
            .worker
            .analyze_related_keyphrases(paper.clone(), related)
            .await?;

        let seo = analysis
            .seo
            .into_iter()
            .map(|(id, scores)| {
                if id == FOCUS_RESULT_KEY {
                    (FOCUS_KEYPHRASE_ID.to_string(), scores)
                } else {
                    (id, scores)
                }
            })
            .collect();

        let research = self.run_researches(&paper, &options.researches).await?;

        info!("Analysis complete ({} research(es))", research.len());
        Ok(AnalysisResult {
            seo,
            readability: analysis.readability,
            research,
        })
    }

    async fn run_researches(
        &self,
        paper: &Paper,
        names: &[String],
    ) -> Result<BTreeMap<String, ResearchOutcome>> {
        if names.is_empty() {
            return Ok(BTreeMap::new());
        }
        debug!("Dispatching researches: {:?}", names);

        let calls = names
            .iter()
            .map(|name| self.worker.run_research(name.clone(), paper.clone()));
        let results = join_all(calls).await;

        let mut outcomes = BTreeMap::new();
        for (name, result) in names.iter().zip(results) {
            let outcome = match result {
                Ok(result) => ResearchOutcome::Ok { result },
                Err(err) if err.is_transport() => return Err(err.into()),
                Err(err) => {
                    warn!("Research '{}' failed: {}", name, err);
                    ResearchOutcome::Failed {
                        error: err.to_string(),
                    }
                }
            };
            outcomes.insert(name.clone(), outcome);
        }
        Ok(outcomes)
    }

    fn build_paper(&self, fields: &DocumentFields, focus: &KeyphraseEntry) -> Paper {
        let locale = fields
            .locale
            .as_deref()
            .filter(|locale| !locale.trim().is_empty())
            .unwrap_or(&self.default_locale);
        Paper::new(
            fields.content.clone(),
            PaperAttributes {
                keyword: focus.keyphrase.clone(),
                synonyms: focus.synonyms.clone(),
                title: fields.seo_title.clone(),
                title_width: fields.seo_title_width,
                description: fields.meta_description.clone(),
                permalink: fields.slug.clone(),
                date: fields.date.clone(),
                locale: locale.to_string(),
            },
        )
    }
}

fn related_keyphrases(keyphrases: &KeyphraseMap) -> RelatedKeyphrases {
    keyphrases
        .iter()
        .filter(|(id, _)| id.as_str() != FOCUS_KEYPHRASE_ID)
        .map(|(id, entry)| (id.clone(), RelatedKeyphrase::from(entry)))
        .collect()
}

impl std::fmt::Debug for AnalysisOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOrchestrator")
            .field("default_locale", &self.default_locale)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_keyphrases_exclude_focus() {
        let mut keyphrases = KeyphraseMap::new();
        keyphrases.insert(
            FOCUS_KEYPHRASE_ID.to_string(),
            KeyphraseEntry::new("cat food", vec![]),
        );
        keyphrases.insert(
            "a".to_string(),
            KeyphraseEntry::new("kibble", vec!["dry food".to_string()]),
        );

        let related = related_keyphrases(&keyphrases);
        assert_eq!(related.len(), 1);
        assert_eq!(related["a"].keyword, "kibble");
        assert_eq!(related["a"].synonyms, vec!["dry food".to_string()]);
    }
}
