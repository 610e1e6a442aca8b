//! Markup stripping, paragraph and sentence splitting

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IGNORED_BLOCKS: Regex =
        Regex::new(r"(?is)<(script|style|code|pre)\b[^>]*>.*?</(script|style|code|pre)>").unwrap();
    static ref BLOCK_TAGS: Regex = Regex::new(
        r"(?i)</?(p|div|h[1-6]|li|ul|ol|blockquote|table|tr|td|th|section|article|figure|figcaption)\b[^>]*>|<br\s*/?>"
    )
    .unwrap();
    static ref ANY_TAG: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n\s*\n").unwrap();
    static ref HORIZONTAL_SPACE: Regex = Regex::new(r"[ \t\u{a0}]+").unwrap();
}

/// Remove markup, keeping block boundaries as blank lines
pub fn strip_tags(text: &str) -> String {
    let text = IGNORED_BLOCKS.replace_all(text, " ");
    let text = BLOCK_TAGS.replace_all(&text, "\n\n");
    let text = ANY_TAG.replace_all(&text, " ");
    let text = decode_entities(&text);
    HORIZONTAL_SPACE.replace_all(&text, " ").into_owned()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&rsquo;", "\u{2019}")
        .replace("&amp;", "&")
}

/// Non-empty paragraphs of already stripped text
pub fn paragraphs(clean: &str) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(clean)
        .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|p| !p.is_empty())
        .collect()
}

/// Sentences of already stripped text
///
/// A sentence ends at `.`, `!`, `?` or `…` followed by whitespace, at a
/// full-width terminator, or at a line break.
pub fn sentences(clean: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    for line in clean.lines() {
        let mut current = String::new();
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            current.push(c);
            let ends = match c {
                '。' | '！' | '？' => true,
                '.' | '!' | '?' | '…' => chars.peek().map_or(true, |next| next.is_whitespace()),
                _ => false,
            };
            if ends {
                push_sentence(&mut sentences, &current);
                current.clear();
            }
        }
        push_sentence(&mut sentences, &current);
    }
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let sentence = candidate.split_whitespace().collect::<Vec<_>>().join(" ");
    if sentence.chars().any(|c| c.is_alphanumeric()) {
        sentences.push(sentence);
    }
}

/// Number of characters excluding whitespace
pub fn count_characters(clean: &str) -> usize {
    clean.chars().filter(|c| !c.is_whitespace()).count()
}
