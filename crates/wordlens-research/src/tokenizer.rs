//! Word tokenizers
//!
//! Whitespace languages use Unicode word segmentation. Japanese has no spaces, so its
//! tokenizer splits on script changes and peels particles off kanji words.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;
use wordlens_morphology::japanese::{is_hiragana, is_kanji, is_katakana};
use wordlens_morphology::normalize;

use crate::language::CASE_PARTICLES;

/// Tokenization strategy of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tokenizer {
    /// Unicode word boundaries
    Words,
    /// Script-run segmentation for Japanese
    Japanese,
}

impl Tokenizer {
    /// Split text into normalized tokens
    ///
    /// Tokens are lower-cased with curly apostrophes folded to `'`. Purely numeric
    /// tokens are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text: String = text.nfc().collect();
        let raw: Vec<String> = match self {
            Tokenizer::Words => text.unicode_words().map(normalize).collect(),
            Tokenizer::Japanese => segment_japanese(&text),
        };
        raw.into_iter()
            .filter(|token| !token.is_empty() && !is_numeric(token))
            .collect()
    }
}

fn is_numeric(token: &str) -> bool {
    token.chars().any(|c| c.is_numeric())
        && token
            .chars()
            .all(|c| c.is_numeric() || matches!(c, '.' | ',' | '\''))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Hiragana,
    Katakana,
    Other,
    Separator,
}

fn script_of(c: char) -> Script {
    if is_kanji(c) {
        Script::Kanji
    } else if is_hiragana(c) {
        Script::Hiragana
    } else if is_katakana(c) {
        Script::Katakana
    } else if c.is_alphanumeric() || c == '\'' || c == '\u{2019}' {
        Script::Other
    } else {
        Script::Separator
    }
}

/// Consecutive characters of the same script
fn script_runs(text: &str) -> Vec<(Script, String)> {
    let mut runs: Vec<(Script, String)> = Vec::new();
    for c in text.chars() {
        let script = script_of(c);
        match runs.last_mut() {
            Some((last, run)) if *last == script => run.push(c),
            _ => runs.push((script, c.to_string())),
        }
    }
    runs.retain(|(script, _)| *script != Script::Separator);
    runs
}

fn segment_japanese(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut runs = script_runs(text).into_iter().peekable();

    while let Some((script, run)) = runs.next() {
        match script {
            Script::Kanji => {
                let mut word = run;
                match runs.next_if(|(next, _)| *next == Script::Hiragana) {
                    Some((_, kana)) => {
                        let split = okurigana_end(&kana);
                        word.push_str(&kana[..split]);
                        tokens.push(word);
                        tokens.extend(split_kana(&kana[split..]));
                    }
                    None => tokens.push(word),
                }
            }
            Script::Hiragana => tokens.extend(split_kana(&run)),
            _ => tokens.push(normalize(&run)),
        }
    }
    tokens
}

/// Whether a case particle starts the kana (`です` and `でし` are copulas, not `で`)
fn starts_with_particle(kana: &str) -> bool {
    match kana.chars().next() {
        Some(c) => {
            CASE_PARTICLES.contains(&c) && !kana.starts_with("です") && !kana.starts_with("でし")
        }
        None => false,
    }
}

/// Byte offset where a kanji word's okurigana ends
fn okurigana_end(kana: &str) -> usize {
    kana.char_indices()
        .map(|(i, _)| i)
        .find(|&i| starts_with_particle(&kana[i..]))
        .unwrap_or(kana.len())
}

/// Split a hiragana run into leading case particles and the remainder
fn split_kana(kana: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = kana;
    while let Some(c) = rest.chars().next() {
        if starts_with_particle(rest) {
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        } else {
            tokens.push(rest.to_string());
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_keep_apostrophes() {
        let tokens = Tokenizer::Words.tokenize("We\u{2019}re working with Google\u{2019}s indices.");
        assert_eq!(tokens, vec!["we're", "working", "with", "google's", "indices"]);
    }

    #[test]
    fn test_numbers_are_dropped() {
        let tokens = Tokenizer::Words.tokenize("In 2024 we had 3.5 ideas and 10,000 users");
        assert_eq!(tokens, vec!["in", "we", "had", "ideas", "and", "users"]);
    }

    #[test]
    fn test_words_ignore_punctuation() {
        let tokens = Tokenizer::Words.tokenize("Yoast SEO \u{2013} free and premium!");
        assert_eq!(tokens, vec!["yoast", "seo", "free", "and", "premium"]);
    }

    #[test]
    fn test_japanese_script_runs() {
        let tokens = Tokenizer::Japanese.tokenize("猫が好きです。コーヒーを飲む");
        assert_eq!(tokens, vec!["猫", "が", "好きです", "コーヒー", "を", "飲む"]);
    }

    #[test]
    fn test_japanese_okurigana_stays_with_kanji() {
        let tokens = Tokenizer::Japanese.tokenize("食べるのは楽しい");
        assert_eq!(tokens, vec!["食べる", "の", "は", "楽しい"]);
    }

    #[test]
    fn test_japanese_latin_is_lowercased() {
        let tokens = Tokenizer::Japanese.tokenize("WordPressで書く");
        assert_eq!(tokens, vec!["wordpress", "で", "書く"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(Tokenizer::Words.tokenize("").is_empty());
        assert!(Tokenizer::Japanese.tokenize("   ").is_empty());
    }
}
