//! Property-based tests for keyphrase batching and focus remapping

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use serde_json::Value;
use wordlens_orchestration::{AnalysisOrchestrator, AnalyzeOptions};
use wordlens_paper::{DocumentFields, KeyphraseEntry, KeyphraseMap, Paper, RelatedKeyphrases};
use wordlens_scoring::ScoreSet;
use wordlens_worker::{AnalysisWorker, KeyphraseAnalysis, WorkerError, FOCUS_RESULT_KEY};

// ============================================================================
// Worker double
// ============================================================================

#[derive(Default)]
struct CountingWorker {
    analyses: AtomicUsize,
}

#[async_trait]
impl AnalysisWorker for CountingWorker {
    async fn analyze_related_keyphrases(
        &self,
        _paper: Paper,
        related: RelatedKeyphrases,
    ) -> Result<KeyphraseAnalysis, WorkerError> {
        self.analyses.fetch_add(1, Ordering::SeqCst);
        let mut seo: BTreeMap<String, ScoreSet> = related
            .keys()
            .map(|id| (id.clone(), ScoreSet::default()))
            .collect();
        seo.insert(FOCUS_RESULT_KEY.to_string(), ScoreSet::default());
        Ok(KeyphraseAnalysis {
            seo,
            readability: ScoreSet::default(),
        })
    }

    async fn run_research(&self, _name: String, _paper: Paper) -> Result<Value, WorkerError> {
        Ok(Value::Null)
    }
}

// ============================================================================
// Generators for property testing
// ============================================================================

fn related_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[a-z]{1,6}", 0..8).prop_map(|ids| {
        ids.into_iter()
            .filter(|id| id != "focus")
            .collect()
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Any number of related keyphrases costs exactly one worker analysis, and every
    /// keyphrase id (with the focus keyed `focus`) appears in the result
    #[test]
    fn prop_one_batched_analysis(ids in related_ids(), with_focus in any::<bool>()) {
        let mut keyphrases = KeyphraseMap::new();
        if with_focus {
            keyphrases.insert("focus".to_string(), KeyphraseEntry::new("yoast", vec![]));
        }
        for id in &ids {
            keyphrases.insert(id.clone(), KeyphraseEntry::new(id.clone(), vec![]));
        }

        let worker = Arc::new(CountingWorker::default());
        let orchestrator = AnalysisOrchestrator::new(Arc::clone(&worker) as Arc<dyn AnalysisWorker>, "en_US");
        let result = tokio_test::block_on(orchestrator.analyze(
            &DocumentFields::default(),
            &keyphrases,
            &AnalyzeOptions::default(),
        ))
        .unwrap();

        prop_assert_eq!(worker.analyses.load(Ordering::SeqCst), 1);
        prop_assert_eq!(result.seo.len(), ids.len() + 1);
        prop_assert!(result.seo.contains_key("focus"));
        prop_assert!(!result.seo.contains_key(FOCUS_RESULT_KEY));
        for id in &ids {
            prop_assert!(result.seo.contains_key(id));
        }
    }
}
