//! Keyphrase entries and host-supplied document fields

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reserved keyphrase identifier for the focus keyphrase
///
/// Every other identifier in a [`KeyphraseMap`] denotes a related keyphrase.
pub const FOCUS_KEYPHRASE_ID: &str = "focus";

/// A keyphrase as edited by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyphraseEntry {
    /// The keyphrase text
    pub keyphrase: String,
    /// Ordered synonyms of the keyphrase
    pub synonyms: Vec<String>,
}

impl KeyphraseEntry {
    /// Create a keyphrase entry
    pub fn new(keyphrase: impl Into<String>, synonyms: Vec<String>) -> Self {
        Self {
            keyphrase: keyphrase.into(),
            synonyms,
        }
    }
}

/// Keyphrases keyed by their host identifier
pub type KeyphraseMap = BTreeMap<String, KeyphraseEntry>;

/// The worker-facing shape of a related keyphrase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedKeyphrase {
    /// The keyphrase text
    pub keyword: String,
    /// Synonyms of the keyphrase
    pub synonyms: Vec<String>,
}

impl From<&KeyphraseEntry> for RelatedKeyphrase {
    fn from(entry: &KeyphraseEntry) -> Self {
        RelatedKeyphrase {
            keyword: entry.keyphrase.clone(),
            synonyms: entry.synonyms.clone(),
        }
    }
}

/// Related keyphrases keyed by their host identifier
pub type RelatedKeyphrases = BTreeMap<String, RelatedKeyphrase>;

/// Raw document fields supplied by the host for one analysis call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentFields {
    /// Body content, may contain light markup
    pub content: String,
    /// SEO title
    pub seo_title: String,
    /// Rendered SEO title width in pixels
    pub seo_title_width: u32,
    /// Meta description
    pub meta_description: String,
    /// Slug
    pub slug: String,
    /// Publication date
    pub date: String,
    /// Locale; the orchestrator default applies when absent
    pub locale: Option<String>,
}

/// Split a comma-separated synonym string into trimmed, non-empty synonyms
pub fn parse_synonyms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
