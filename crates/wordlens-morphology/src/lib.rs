#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! WordLens Morphology
//!
//! Generates the surface forms of a word (plural, possessive, verb tense, comparative)
//! and maps surface forms back to a canonical stem. Each supported language ships its
//! own rule tables; languages without rules use [`ExactMatch`], which treats every word
//! as its own only form.

pub mod english;
pub mod japanese;

use std::collections::BTreeSet;
use std::fmt::Debug;

pub use english::EnglishMorphology;
pub use japanese::JapaneseMorphology;

/// A set of surface forms for one base word
pub type WordForms = BTreeSet<String>;

/// Language-specific morphology rules
///
/// Implementations are stateless and shared across analyses.
pub trait Morphology: Send + Sync + Debug {
    /// Language code the rules apply to
    fn language(&self) -> &'static str;

    /// All surface forms of `word`, including the word itself, lower-cased
    fn generate_forms(&self, word: &str) -> WordForms;

    /// Canonical stem of `word`
    fn stem(&self, word: &str) -> String;
}

/// Morphology for languages without inflection support
///
/// Every word is its own stem and its only form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl Morphology for ExactMatch {
    fn language(&self) -> &'static str {
        "default"
    }

    fn generate_forms(&self, word: &str) -> WordForms {
        let word = normalize(word);
        if word.is_empty() {
            return WordForms::new();
        }
        WordForms::from([word])
    }

    fn stem(&self, word: &str) -> String {
        normalize(word)
    }
}

/// Lower-case a word, trim it and fold curly apostrophes to `'`
pub fn normalize(word: &str) -> String {
    word.trim()
        .to_lowercase()
        .replace(|c: char| matches!(c, '\u{2019}' | '\u{2018}' | '\u{02bc}'), "'")
}
