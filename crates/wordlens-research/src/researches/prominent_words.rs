//! Prominent words: frequent body-text stems

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use wordlens_paper::Paper;

use crate::error::ResearchError;
use crate::researcher::Researcher;

/// Minimum occurrences for a prominent word in insights
pub const INSIGHTS_MINIMUM_OCCURRENCES: usize = 5;

/// Minimum occurrences for a prominent word used for internal linking
pub const LINKING_MINIMUM_OCCURRENCES: usize = 2;

/// Words the body text needs before internal-linking suggestions are made
pub const LINKING_MINIMUM_WORD_COUNT: usize = 100;

/// Maximum number of internal-linking prominent words
pub const LINKING_MAXIMUM_WORDS: usize = 100;

/// Weight of a word that occurs in the title, keyphrase or description
const ATTRIBUTE_WEIGHT: usize = 3;

/// A frequent word and its stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProminentWord {
    /// Display form: the stem if it occurred verbatim, else the first surface form seen
    pub word: String,
    /// Canonical stem occurrences were grouped by
    pub stem: String,
    /// Number of occurrences
    pub occurrences: usize,
}

impl ProminentWord {
    /// Create a prominent word
    pub fn new(word: impl Into<String>, stem: impl Into<String>, occurrences: usize) -> Self {
        ProminentWord {
            word: word.into(),
            stem: stem.into(),
            occurrences,
        }
    }
}

/// Prominent words for internal linking, plus which attributes were available
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalLinkingWords {
    /// Prominent words over text and attributes
    pub prominent_words: Vec<ProminentWord>,
    /// Whether the paper has a meta description
    pub has_meta_description: bool,
    /// Whether the paper has a title
    pub has_title: bool,
}

struct Tally {
    stem: String,
    first_surface: String,
    verbatim: bool,
    occurrences: usize,
}

/// Counts occurrences per stem, remembering first-seen order
#[derive(Default)]
struct StemCounter {
    tallies: Vec<Tally>,
    index: HashMap<String, usize>,
}

impl StemCounter {
    fn add(&mut self, surface: &str, stem: String, weight: usize) {
        let verbatim = surface == stem;
        match self.index.get(&stem) {
            Some(&i) => {
                let tally = &mut self.tallies[i];
                tally.occurrences += weight;
                tally.verbatim |= verbatim;
            }
            None => {
                self.index.insert(stem.clone(), self.tallies.len());
                self.tallies.push(Tally {
                    stem,
                    first_surface: surface.to_string(),
                    verbatim,
                    occurrences: weight,
                });
            }
        }
    }

    /// Stems with at least `minimum` occurrences, most frequent first
    ///
    /// The sort is stable, so ties keep first-seen order.
    fn into_prominent(self, minimum: usize) -> Vec<ProminentWord> {
        let mut words: Vec<ProminentWord> = self
            .tallies
            .into_iter()
            .filter(|tally| tally.occurrences >= minimum)
            .map(|tally| {
                let word = if tally.verbatim {
                    tally.stem.clone()
                } else {
                    tally.first_surface
                };
                ProminentWord::new(word, tally.stem, tally.occurrences)
            })
            .collect();
        words.sort_by(|a, b| b.occurrences.cmp(&a.occurrences));
        words
    }
}

fn count_tokens<'a>(
    counter: &mut StemCounter,
    researcher: &Researcher,
    tokens: impl IntoIterator<Item = &'a String>,
    use_morphology: bool,
    weight: usize,
) {
    for token in tokens {
        if researcher.is_function_word(token) {
            continue;
        }
        let stem = if use_morphology {
            researcher.stem(token)
        } else {
            token.clone()
        };
        if !stem.is_empty() {
            counter.add(token, stem, weight);
        }
    }
}

/// Prominent words of the body text
///
/// Title and metadata are ignored. Locales that count characters return nothing
/// until the text reaches the language's minimum length.
pub fn get_prominent_words_for_insights(researcher: &Researcher) -> Vec<ProminentWord> {
    let profile = researcher.profile();
    let text_length = researcher.text_length();
    if text_length < profile.prominent_words_minimum_text_length {
        debug!(
            "Text length {} below prominent words minimum {}",
            text_length, profile.prominent_words_minimum_text_length
        );
        return Vec::new();
    }

    let mut counter = StemCounter::default();
    count_tokens(
        &mut counter,
        researcher,
        researcher.parsed().tokens(),
        researcher.morphology_active(),
        1,
    );
    counter.into_prominent(INSIGHTS_MINIMUM_OCCURRENCES)
}

/// Prominent words over body text and paper attributes, for internal linking
pub fn get_prominent_words_for_internal_linking(
    paper: &Paper,
    researcher: &Researcher,
) -> InternalLinkingWords {
    let has_meta_description = paper.has_description();
    let has_title = paper.has_title();

    if researcher.parsed().word_count() < LINKING_MINIMUM_WORD_COUNT {
        return InternalLinkingWords {
            prominent_words: Vec::new(),
            has_meta_description,
            has_title,
        };
    }

    let use_morphology = researcher.morphology_active();
    let tokenizer = researcher.tokenizer();
    let mut counter = StemCounter::default();
    count_tokens(
        &mut counter,
        researcher,
        researcher.parsed().tokens(),
        use_morphology,
        1,
    );

    let mut attributes = vec![paper.title(), paper.keyword(), paper.description()];
    attributes.extend(paper.synonyms().iter().map(String::as_str));
    for attribute in attributes {
        let tokens = tokenizer.tokenize(attribute);
        count_tokens(&mut counter, researcher, &tokens, use_morphology, ATTRIBUTE_WEIGHT);
    }

    let mut prominent_words = counter.into_prominent(LINKING_MINIMUM_OCCURRENCES);
    prominent_words.truncate(LINKING_MAXIMUM_WORDS);

    InternalLinkingWords {
        prominent_words,
        has_meta_description,
        has_title,
    }
}

/// `prominentWordsForInsights` research
pub fn prominent_words_for_insights(
    _paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_prominent_words_for_insights(researcher))?)
}

/// `prominentWordsForInternalLinking` research
pub fn prominent_words_for_internal_linking(
    paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_prominent_words_for_internal_linking(
        paper, researcher,
    ))?)
}
