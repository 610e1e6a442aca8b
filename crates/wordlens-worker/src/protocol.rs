//! Wire protocol between callers and the analysis worker
//!
//! Every message is wrapped in an envelope carrying a [`RequestId`]. Responses may
//! arrive in any order; the id is the only correlation key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wordlens_paper::{Paper, RelatedKeyphrases};
use wordlens_scoring::ScoreSet;

use crate::error::WorkerError;

/// Request correlation id
pub type RequestId = u64;

/// Key of the focus keyphrase result in [`KeyphraseAnalysis::seo`]
pub const FOCUS_RESULT_KEY: &str = "";

/// Request sent to the worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WorkerRequest {
    /// Score the paper's focus keyphrase, every related keyphrase and readability
    #[serde(rename_all = "camelCase")]
    AnalyzeRelatedKeyphrases {
        /// Paper carrying the focus keyphrase
        paper: Paper,
        /// Related keyphrases by host id
        related: RelatedKeyphrases,
    },
    /// Run one named research
    #[serde(rename_all = "camelCase")]
    RunResearch {
        /// Research name, e.g. `prominentWordsForInsights`
        name: String,
        /// Paper to research
        paper: Paper,
    },
}

impl WorkerRequest {
    /// Short request kind for logging
    pub fn kind(&self) -> &'static str {
        match self {
            WorkerRequest::AnalyzeRelatedKeyphrases { .. } => "analyzeRelatedKeyphrases",
            WorkerRequest::RunResearch { .. } => "runResearch",
        }
    }
}

/// Scores for one batched keyphrase analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyphraseAnalysis {
    /// SEO score sets; the focus keyphrase is keyed by [`FOCUS_RESULT_KEY`]
    pub seo: BTreeMap<String, ScoreSet>,
    /// Readability scores for the shared text
    pub readability: ScoreSet,
}

/// Successful worker response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum WorkerResponse {
    /// Answer to [`WorkerRequest::AnalyzeRelatedKeyphrases`]
    Analysis(KeyphraseAnalysis),
    /// Answer to [`WorkerRequest::RunResearch`]
    Research(Value),
}

/// Request with its correlation id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Correlation id
    pub id: RequestId,
    /// The request
    pub request: WorkerRequest,
}

/// Response with the id of the request it answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Id of the answered request
    pub id: RequestId,
    /// Response or error
    pub result: Result<WorkerResponse, WorkerError>,
}

impl RequestEnvelope {
    /// Encode as JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ResponseEnvelope {
    /// Encode as JSON
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
