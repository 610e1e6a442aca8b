//! Host-facing options and results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wordlens_scoring::ScoreSet;

/// Options for one analysis call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Names of ad-hoc researches to run alongside the keyphrase analysis
    pub researches: Vec<String>,
}

impl AnalyzeOptions {
    /// Options requesting the given researches
    pub fn with_researches<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnalyzeOptions {
            researches: names.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of one ad-hoc research
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResearchOutcome {
    /// The research ran
    Ok {
        /// Research output
        result: Value,
    },
    /// The research could not run
    Failed {
        /// Error description
        error: String,
    },
}

impl ResearchOutcome {
    /// Research output, if the research ran
    pub fn result(&self) -> Option<&Value> {
        match self {
            ResearchOutcome::Ok { result } => Some(result),
            ResearchOutcome::Failed { .. } => None,
        }
    }

    /// Whether the research failed
    pub fn is_failed(&self) -> bool {
        matches!(self, ResearchOutcome::Failed { .. })
    }
}

/// Combined result of one analysis call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// SEO score sets by keyphrase id; the focus keyphrase is keyed `focus`
    pub seo: BTreeMap<String, ScoreSet>,
    /// Readability scores
    pub readability: ScoreSet,
    /// Ad-hoc research outcomes by research name
    pub research: BTreeMap<String, ResearchOutcome>,
}
