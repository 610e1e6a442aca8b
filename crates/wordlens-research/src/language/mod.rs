//! Static per-language profiles
//!
//! A profile bundles everything a researcher needs to know about a language:
//! its function words, tokenizer strategy, text-length gates and morphology.
//! Profiles are process-wide immutable data built once on first use.

mod catalan;
mod english;
mod japanese;

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use serde::Serialize;
use wordlens_morphology::{normalize, EnglishMorphology, JapaneseMorphology, Morphology};

use crate::tokenizer::Tokenizer;

pub(crate) use japanese::CASE_PARTICLES;

static ENGLISH_MORPHOLOGY: EnglishMorphology = EnglishMorphology;
static JAPANESE_MORPHOLOGY: JapaneseMorphology = JapaneseMorphology;

/// Language code of the fallback profile
pub const DEFAULT_LANGUAGE: &str = "default";

/// Static language data exposed through [`crate::Researcher::get_data`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LanguageData {
    /// A word list such as `functionWords`
    Words(Vec<&'static str>),
    /// A boolean switch such as `countCharacters`
    Flag(bool),
    /// A length threshold
    Length(usize),
}

/// Everything language-specific a researcher consults
#[derive(Debug)]
pub struct LanguageProfile {
    /// Language code (`en`, `ca`, `ja` or `default`)
    pub code: &'static str,
    /// Tokenization strategy
    pub tokenizer: Tokenizer,
    /// Whether text length is measured in characters instead of words
    pub count_characters: bool,
    /// Minimum text length before prominent words are reported
    pub prominent_words_minimum_text_length: usize,
    /// Minimum text length before morphology is used for prominent words
    pub morphology_minimum_text_length: usize,
    function_words: &'static [&'static str],
    function_word_set: HashSet<&'static str>,
    transition_words: &'static [&'static str],
    morphology: Option<&'static dyn Morphology>,
}

impl LanguageProfile {
    fn new(
        code: &'static str,
        tokenizer: Tokenizer,
        function_words: &'static [&'static str],
        transition_words: &'static [&'static str],
        morphology: Option<&'static dyn Morphology>,
    ) -> Self {
        LanguageProfile {
            code,
            tokenizer,
            count_characters: false,
            prominent_words_minimum_text_length: 0,
            morphology_minimum_text_length: 0,
            function_words,
            function_word_set: function_words.iter().copied().collect(),
            transition_words,
            morphology,
        }
    }

    /// Whether the word is a function word, ignoring case
    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_word_set.contains(normalize(word).as_str())
    }

    /// Function words of the language
    pub fn function_words(&self) -> &'static [&'static str] {
        self.function_words
    }

    /// Transition words of the language
    pub fn transition_words(&self) -> &'static [&'static str] {
        self.transition_words
    }

    /// Morphology rules, if the language has any
    pub fn morphology(&self) -> Option<&'static dyn Morphology> {
        self.morphology
    }

    /// Named static data
    pub fn data(&self, key: &str) -> Option<LanguageData> {
        match key {
            "functionWords" => Some(LanguageData::Words(self.function_words.to_vec())),
            "transitionWords" => Some(LanguageData::Words(self.transition_words.to_vec())),
            "countCharacters" => Some(LanguageData::Flag(self.count_characters)),
            "prominentWordsMinimumTextLength" => {
                Some(LanguageData::Length(self.prominent_words_minimum_text_length))
            }
            "morphologyMinimumTextLength" => {
                Some(LanguageData::Length(self.morphology_minimum_text_length))
            }
            _ => None,
        }
    }
}

lazy_static! {
    static ref PROFILES: HashMap<&'static str, LanguageProfile> = {
        let mut profiles = HashMap::new();

        profiles.insert(
            "en",
            LanguageProfile::new(
                "en",
                Tokenizer::Words,
                english::FUNCTION_WORDS,
                english::TRANSITION_WORDS,
                Some(&ENGLISH_MORPHOLOGY),
            ),
        );

        profiles.insert(
            "ca",
            LanguageProfile::new(
                "ca",
                Tokenizer::Words,
                catalan::FUNCTION_WORDS,
                catalan::TRANSITION_WORDS,
                None,
            ),
        );

        let mut ja = LanguageProfile::new(
            "ja",
            Tokenizer::Japanese,
            japanese::FUNCTION_WORDS,
            japanese::TRANSITION_WORDS,
            Some(&JAPANESE_MORPHOLOGY),
        );
        ja.count_characters = true;
        ja.prominent_words_minimum_text_length = 200;
        ja.morphology_minimum_text_length = 300;
        profiles.insert("ja", ja);

        profiles
    };

    static ref DEFAULT_PROFILE: LanguageProfile =
        LanguageProfile::new(DEFAULT_LANGUAGE, Tokenizer::Words, &[], &[], None);
}

/// Profile for a language subtag, if the language is supported
pub fn supported_profile(language: &str) -> Option<&'static LanguageProfile> {
    PROFILES.get(language.to_lowercase().as_str())
}

/// Profile for a language subtag, falling back to the default profile
pub fn profile_for(language: &str) -> &'static LanguageProfile {
    supported_profile(language).unwrap_or(&DEFAULT_PROFILE)
}

/// Codes of every supported language, sorted
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = PROFILES.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages() {
        assert_eq!(supported_languages(), vec!["ca", "en", "ja"]);
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let profile = profile_for("xx");
        assert_eq!(profile.code, DEFAULT_LANGUAGE);
        assert!(profile.morphology().is_none());
        assert!(profile.function_words().is_empty());
        assert!(!profile.is_function_word("the"));
    }

    #[test]
    fn test_function_words_ignore_case() {
        let english = profile_for("en");
        assert!(english.is_function_word("The"));
        assert!(english.is_function_word("we\u{2019}ll"));
        assert!(!english.is_function_word("syllable"));
    }

    #[test]
    fn test_japanese_gates() {
        let japanese = profile_for("JA");
        assert_eq!(japanese.data("countCharacters"), Some(LanguageData::Flag(true)));
        assert_eq!(
            japanese.data("prominentWordsMinimumTextLength"),
            Some(LanguageData::Length(200))
        );
        assert_eq!(
            japanese.data("morphologyMinimumTextLength"),
            Some(LanguageData::Length(300))
        );
        assert_eq!(japanese.data("unknownKey"), None);
    }

    #[test]
    fn test_catalan_has_no_morphology() {
        let catalan = profile_for("ca");
        assert!(catalan.morphology().is_none());
        assert!(catalan.is_function_word("els"));
    }
}
