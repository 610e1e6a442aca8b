//! Per-analysis researcher: language profile, research registry and attached data

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use wordlens_morphology::{normalize, Morphology, WordForms};
use wordlens_paper::Paper;

use crate::error::ResearchError;
use crate::language::{profile_for, supported_profile, LanguageData, LanguageProfile};
use crate::parsed::ParsedText;
use crate::researches;
use crate::tokenizer::Tokenizer;

/// Signature every research shares
pub type ResearchFn = fn(&Paper, &Researcher) -> Result<Value, ResearchError>;

type AttachedData = HashMap<String, Arc<dyn Any + Send + Sync>>;

/// Options applied when selecting a researcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearcherOptions {
    /// Attach the language's morphology rules; without them every word only matches itself
    pub morphology: bool,
}

impl Default for ResearcherOptions {
    fn default() -> Self {
        ResearcherOptions { morphology: true }
    }
}

/// Select the researcher for a paper's locale
///
/// Unsupported languages get the default profile: Unicode word tokenizer, no
/// function words and no morphology.
pub fn select_researcher(paper: &Paper, options: ResearcherOptions) -> Researcher {
    let language = paper.language();
    let profile = match supported_profile(&language) {
        Some(profile) => profile,
        None => {
            warn!(
                "No language profile for '{}', using the default profile",
                paper.locale()
            );
            profile_for(&language)
        }
    };
    debug!(
        "Selected '{}' researcher (morphology: {})",
        profile.code, options.morphology
    );

    let morphology = if options.morphology {
        profile.morphology()
    } else {
        None
    };
    let parsed = Arc::new(ParsedText::parse(paper.text(), profile.tokenizer));

    Researcher {
        paper: paper.clone(),
        profile,
        morphology,
        parsed,
        attached: Mutex::new(HashMap::new()),
    }
}

/// Locale capability bundle scoped to one paper
///
/// Attached data never outlives the paper the researcher was created for. The
/// parsed body text is shared with sibling researchers from [`Researcher::for_keyphrase`].
#[derive(Debug)]
pub struct Researcher {
    paper: Paper,
    profile: &'static LanguageProfile,
    morphology: Option<&'static dyn Morphology>,
    parsed: Arc<ParsedText>,
    attached: Mutex<AttachedData>,
}

impl Researcher {
    /// Paper this researcher was created for
    pub fn paper(&self) -> &Paper {
        &self.paper
    }

    /// Language profile in use
    pub fn profile(&self) -> &'static LanguageProfile {
        self.profile
    }

    /// Language code of the profile (`default` for unsupported locales)
    pub fn language(&self) -> &'static str {
        self.profile.code
    }

    /// Research registered under `name`
    pub fn get_research(&self, name: &str) -> Option<ResearchFn> {
        researches::get(name)
    }

    /// Whether a research is registered under `name`
    pub fn has_research(&self, name: &str) -> bool {
        researches::get(name).is_some()
    }

    /// Names of every registered research, sorted
    pub fn research_names(&self) -> Vec<&'static str> {
        researches::names()
    }

    /// Run a research against this researcher's paper
    pub fn run(&self, name: &str) -> Result<Value, ResearchError> {
        let research = self
            .get_research(name)
            .ok_or_else(|| ResearchError::UnknownResearch {
                name: name.to_string(),
            })?;
        debug!("Running research '{}'", name);
        research(&self.paper, self)
    }

    /// Static language data such as `functionWords` or `countCharacters`
    pub fn get_data(&self, key: &str) -> Option<LanguageData> {
        self.profile.data(key)
    }

    /// Attach data under `key`; each key can be written once
    pub fn set_data<T: Any + Send + Sync>(&self, key: &str, value: T) -> Result<(), ResearchError> {
        let mut attached = self.attached.lock();
        if attached.contains_key(key) {
            return Err(ResearchError::DataAlreadySet {
                key: key.to_string(),
            });
        }
        attached.insert(key.to_string(), Arc::new(value));
        Ok(())
    }

    /// Attached data under `key`, if present and of type `T`
    pub fn get_data_as<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        let value = self.attached.lock().get(key).cloned()?;
        value.downcast::<T>().ok()
    }

    /// Attached data under `key`, computing and attaching it on first use
    ///
    /// `compute` runs without the cache lock held, so it may itself use the researcher.
    pub fn get_or_compute<T, F>(&self, key: &str, compute: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get_data_as::<T>(key) {
            return value;
        }

        let computed = Arc::new(compute());
        let stored = self
            .attached
            .lock()
            .entry(key.to_string())
            .or_insert_with(|| computed.clone() as Arc<dyn Any + Send + Sync>)
            .clone();
        stored.downcast::<T>().unwrap_or(computed)
    }

    /// Morphology rules, when attached
    pub fn morphology(&self) -> Option<&dyn Morphology> {
        self.morphology
    }

    /// Whether morphology applies to prominent words for this text
    pub fn morphology_active(&self) -> bool {
        self.morphology.is_some() && self.text_length() >= self.profile.morphology_minimum_text_length
    }

    /// Tokenizer of the language
    pub fn tokenizer(&self) -> Tokenizer {
        self.profile.tokenizer
    }

    /// Whether the word is a function word of the language
    pub fn is_function_word(&self, word: &str) -> bool {
        self.profile.is_function_word(word)
    }

    /// Parsed body text
    pub fn parsed(&self) -> &ParsedText {
        &self.parsed
    }

    /// Text length in the language's unit: characters or words
    pub fn text_length(&self) -> usize {
        if self.profile.count_characters {
            self.parsed.character_count()
        } else {
            self.parsed.word_count()
        }
    }

    /// Word form set of a word, generated once per researcher
    pub fn word_forms(&self, word: &str) -> Arc<WordForms> {
        let word = normalize(word);
        self.get_or_compute(&format!("wordForms:{}", word), || match self.morphology {
            Some(morphology) => morphology.generate_forms(&word),
            None if word.is_empty() => WordForms::new(),
            None => WordForms::from([word.clone()]),
        })
    }

    /// Canonical stem of a word
    pub fn stem(&self, word: &str) -> String {
        match self.morphology {
            Some(morphology) => morphology.stem(word),
            None => normalize(word),
        }
    }

    /// Sibling researcher for the same text scored against another keyphrase
    ///
    /// The sibling starts with an empty attached-data cache.
    pub fn for_keyphrase(&self, keyword: &str, synonyms: Vec<String>) -> Researcher {
        Researcher {
            paper: self.paper.with_keyphrase(keyword, synonyms),
            profile: self.profile,
            morphology: self.morphology,
            parsed: Arc::clone(&self.parsed),
            attached: Mutex::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordlens_paper::PaperAttributes;

    fn paper(text: &str, locale: &str) -> Paper {
        Paper::new(
            text,
            PaperAttributes {
                locale: locale.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_select_by_language() {
        let researcher = select_researcher(&paper("Text", "en_US"), ResearcherOptions::default());
        assert_eq!(researcher.language(), "en");
        assert!(researcher.morphology().is_some());

        let researcher = select_researcher(&paper("Texte", "ca"), ResearcherOptions::default());
        assert_eq!(researcher.language(), "ca");
        assert!(researcher.morphology().is_none());

        let researcher = select_researcher(&paper("テキスト", "ja"), ResearcherOptions::default());
        assert_eq!(researcher.tokenizer(), Tokenizer::Japanese);
    }

    #[test]
    fn test_unsupported_locale_uses_default_profile() {
        let researcher = select_researcher(&paper("Tekst", "nl_NL"), ResearcherOptions::default());
        assert_eq!(researcher.language(), "default");
        assert!(researcher.morphology().is_none());
        assert!(!researcher.is_function_word("de"));
    }

    #[test]
    fn test_morphology_can_be_disabled() {
        let researcher =
            select_researcher(&paper("Text", "en"), ResearcherOptions { morphology: false });
        assert!(researcher.morphology().is_none());
        assert_eq!(researcher.stem("Cats"), "cats");
        assert_eq!(*researcher.word_forms("Cats"), WordForms::from(["cats".to_string()]));
    }

    #[test]
    fn test_set_data_is_write_once() {
        let researcher = select_researcher(&paper("Text", "en"), ResearcherOptions::default());
        researcher.set_data("answer", 42u32).unwrap();

        let err = researcher.set_data("answer", 43u32).unwrap_err();
        assert_eq!(
            err,
            ResearchError::DataAlreadySet {
                key: "answer".to_string()
            }
        );
        assert_eq!(researcher.get_data_as::<u32>("answer").as_deref(), Some(&42));
        assert!(researcher.get_data_as::<String>("answer").is_none());
    }

    #[test]
    fn test_get_or_compute_runs_once() {
        let researcher = select_researcher(&paper("Text", "en"), ResearcherOptions::default());
        let mut calls = 0;
        let first = researcher.get_or_compute("key", || {
            calls += 1;
            "value".to_string()
        });
        let second = researcher.get_or_compute("key", || "other".to_string());
        assert_eq!(calls, 1);
        assert_eq!(*first, "value");
        assert_eq!(*second, "value");
    }

    #[test]
    fn test_sibling_shares_text_but_not_attached_data() {
        let researcher = select_researcher(&paper("Cats and dogs", "en"), ResearcherOptions::default());
        researcher.set_data("marker", true).unwrap();

        let sibling = researcher.for_keyphrase("dogs", vec![]);
        assert_eq!(sibling.paper().keyword(), "dogs");
        assert!(sibling.get_data_as::<bool>("marker").is_none());
        assert!(std::ptr::eq(sibling.parsed(), researcher.parsed()));
    }

    #[test]
    fn test_unknown_research() {
        let researcher = select_researcher(&paper("Text", "en"), ResearcherOptions::default());
        assert!(!researcher.has_research("doesNotExist"));
        assert_eq!(
            researcher.run("doesNotExist").unwrap_err(),
            ResearchError::UnknownResearch {
                name: "doesNotExist".to_string()
            }
        );
    }

    #[test]
    fn test_language_data() {
        let researcher = select_researcher(&paper("Text", "en"), ResearcherOptions::default());
        assert_eq!(researcher.get_data("countCharacters"), Some(LanguageData::Flag(false)));
        match researcher.get_data("functionWords") {
            Some(LanguageData::Words(words)) => assert!(words.contains(&"the")),
            other => panic!("unexpected data: {:?}", other),
        }
    }
}
