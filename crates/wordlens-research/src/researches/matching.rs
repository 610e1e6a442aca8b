//! Keyphrase matching against token sequences

use std::sync::Arc;

use wordlens_morphology::WordForms;

use crate::researcher::Researcher;

const QUOTES: &[char] = &['"', '\u{201c}', '\u{201d}', '\u{201e}', '\u{300c}', '\u{300d}'];

/// A keyphrase prepared for matching
#[derive(Debug, Clone)]
pub struct Keyphrase {
    /// Every token of the keyphrase
    pub tokens: Vec<String>,
    /// Tokens that are not function words (all tokens if every token is one)
    pub content_words: Vec<String>,
    /// Function words found in the keyphrase
    pub function_words: Vec<String>,
    /// Whether the keyphrase was quoted and must match exactly
    pub exact: bool,
    forms: Vec<Arc<WordForms>>,
}

impl Keyphrase {
    /// Prepare a raw keyphrase string
    pub fn new(raw: &str, researcher: &Researcher) -> Self {
        let trimmed = raw.trim();
        let exact = trimmed.chars().count() > 2
            && trimmed.starts_with(QUOTES)
            && trimmed.ends_with(QUOTES);
        let inner = trimmed.trim_matches(QUOTES);

        let tokens = researcher.tokenizer().tokenize(inner);
        let (function_words, mut content_words): (Vec<String>, Vec<String>) = tokens
            .iter()
            .cloned()
            .partition(|token| researcher.is_function_word(token));
        if content_words.is_empty() {
            content_words = tokens.clone();
        }

        let forms = if exact {
            Vec::new()
        } else {
            content_words
                .iter()
                .map(|word| researcher.word_forms(word))
                .collect()
        };

        Keyphrase {
            tokens,
            content_words,
            function_words,
            exact,
            forms,
        }
    }

    /// Whether the keyphrase has no words
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Word form set of each content word
    pub fn forms(&self) -> &[Arc<WordForms>] {
        &self.forms
    }

    /// Number of times the keyphrase occurs in the tokens
    ///
    /// Exact keyphrases count contiguous occurrences. Otherwise the count is the
    /// smallest number of matches of any single content word.
    pub fn count_in(&self, tokens: &[String]) -> usize {
        if self.is_empty() {
            return 0;
        }
        if self.exact {
            return count_phrase(&self.tokens, tokens);
        }
        self.forms
            .iter()
            .map(|forms| tokens.iter().filter(|t| forms.contains(t.as_str())).count())
            .min()
            .unwrap_or(0)
    }

    /// Whether every content word occurs in the tokens
    pub fn found_in(&self, tokens: &[String]) -> bool {
        self.count_in(tokens) > 0
    }

    /// Tokens that matched a keyphrase word, in order
    pub fn matched_tokens(&self, tokens: &[String]) -> Vec<String> {
        if self.exact {
            return if count_phrase(&self.tokens, tokens) > 0 {
                self.tokens.clone()
            } else {
                Vec::new()
            };
        }
        tokens
            .iter()
            .filter(|t| self.forms.iter().any(|forms| forms.contains(t.as_str())))
            .cloned()
            .collect()
    }

    /// Share of content words with at least one form among the tokens, 0 to 1
    pub fn share_found_in(&self, tokens: &[String]) -> f64 {
        if self.content_words.is_empty() {
            return 0.0;
        }
        let found = if self.exact {
            self.content_words
                .iter()
                .filter(|word| tokens.contains(word))
                .count()
        } else {
            self.forms
                .iter()
                .filter(|forms| tokens.iter().any(|t| forms.contains(t.as_str())))
                .count()
        };
        found as f64 / self.content_words.len() as f64
    }
}

/// Contiguous occurrences of `phrase` in `tokens`
pub fn count_phrase(phrase: &[String], tokens: &[String]) -> usize {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return 0;
    }
    tokens.windows(phrase.len()).filter(|w| *w == phrase).count()
}

/// Index of the first contiguous occurrence of `phrase` in `tokens`
pub fn find_phrase(phrase: &[String], tokens: &[String]) -> Option<usize> {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return None;
    }
    tokens.windows(phrase.len()).position(|w| w == phrase)
}
