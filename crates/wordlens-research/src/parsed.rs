//! Parsed body text shared by researchers over the same text

use crate::text::{count_characters, paragraphs, sentences, strip_tags};
use crate::tokenizer::Tokenizer;

/// Body text broken into paragraphs, sentences and tokens
///
/// A pure function of the raw text and tokenizer, so researchers whose papers share
/// the same text may share one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedText {
    clean: String,
    paragraphs: Vec<String>,
    sentences: Vec<String>,
    tokens: Vec<String>,
    sentence_tokens: Vec<Vec<String>>,
    paragraph_tokens: Vec<Vec<String>>,
    character_count: usize,
}

impl ParsedText {
    /// Parse raw text with the given tokenizer
    pub fn parse(raw: &str, tokenizer: Tokenizer) -> Self {
        let clean = strip_tags(raw);
        let paragraphs = paragraphs(&clean);
        let sentences = sentences(&clean);
        ParsedText {
            tokens: tokenizer.tokenize(&clean),
            sentence_tokens: sentences.iter().map(|s| tokenizer.tokenize(s)).collect(),
            paragraph_tokens: paragraphs.iter().map(|p| tokenizer.tokenize(p)).collect(),
            character_count: count_characters(&clean),
            paragraphs,
            sentences,
            clean,
        }
    }

    /// Text with markup removed
    pub fn clean(&self) -> &str {
        &self.clean
    }

    /// Paragraphs in document order
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Sentences in document order
    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Normalized tokens in document order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens of each sentence, parallel to [`ParsedText::sentences`]
    pub fn sentence_tokens(&self) -> &[Vec<String>] {
        &self.sentence_tokens
    }

    /// Tokens of each paragraph, parallel to [`ParsedText::paragraphs`]
    pub fn paragraph_tokens(&self) -> &[Vec<String>] {
        &self.paragraph_tokens
    }

    /// Number of words
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of non-whitespace characters
    pub fn character_count(&self) -> usize {
        self.character_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structures() {
        let parsed = ParsedText::parse(
            "<p>Cats sleep. Cats eat!</p><p>Dogs bark.</p>",
            Tokenizer::Words,
        );
        assert_eq!(parsed.paragraphs().len(), 2);
        assert_eq!(parsed.sentences(), &["Cats sleep.", "Cats eat!", "Dogs bark."]);
        assert_eq!(parsed.sentence_tokens()[1], vec!["cats", "eat"]);
        assert_eq!(parsed.paragraph_tokens()[1], vec!["dogs", "bark"]);
        assert_eq!(parsed.word_count(), 6);
    }

    #[test]
    fn test_empty_text() {
        let parsed = ParsedText::parse("", Tokenizer::Words);
        assert!(parsed.tokens().is_empty());
        assert!(parsed.sentences().is_empty());
        assert!(parsed.paragraphs().is_empty());
        assert_eq!(parsed.character_count(), 0);
    }
}
