//! Text statistics: word count, sentence lengths, paragraph lengths

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wordlens_paper::Paper;

use crate::error::ResearchError;
use crate::researcher::Researcher;
use crate::text::count_characters;

/// Unit text length is measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Words
    Word,
    /// Non-whitespace characters
    Character,
}

/// Length of the body text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLength {
    /// Length in `unit`
    pub count: usize,
    /// Unit of `count`
    pub unit: LengthUnit,
}

/// A sentence and its length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceLength {
    /// Sentence text
    pub sentence: String,
    /// Length in words, or characters for character-counting locales
    pub sentence_length: usize,
}

/// A paragraph and its length
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphLength {
    /// Paragraph text
    pub text: String,
    /// Length in words, or characters for character-counting locales
    pub count_length: usize,
}

fn length_unit(researcher: &Researcher) -> LengthUnit {
    if researcher.profile().count_characters {
        LengthUnit::Character
    } else {
        LengthUnit::Word
    }
}

/// Body text length in the language's unit
pub fn get_text_length(researcher: &Researcher) -> TextLength {
    TextLength {
        count: researcher.text_length(),
        unit: length_unit(researcher),
    }
}

/// Length of every sentence in the body text
pub fn get_sentence_lengths(researcher: &Researcher) -> Vec<SentenceLength> {
    let parsed = researcher.parsed();
    let unit = length_unit(researcher);
    parsed
        .sentences()
        .iter()
        .zip(parsed.sentence_tokens())
        .map(|(sentence, tokens)| SentenceLength {
            sentence: sentence.clone(),
            sentence_length: match unit {
                LengthUnit::Word => tokens.len(),
                LengthUnit::Character => count_characters(sentence),
            },
        })
        .collect()
}

/// Length of every paragraph in the body text
pub fn get_paragraph_lengths(researcher: &Researcher) -> Vec<ParagraphLength> {
    let parsed = researcher.parsed();
    let unit = length_unit(researcher);
    parsed
        .paragraphs()
        .iter()
        .zip(parsed.paragraph_tokens())
        .map(|(paragraph, tokens)| ParagraphLength {
            text: paragraph.clone(),
            count_length: match unit {
                LengthUnit::Word => tokens.len(),
                LengthUnit::Character => count_characters(paragraph),
            },
        })
        .collect()
}

/// `wordCountInText` research
pub fn word_count_in_text(_paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_text_length(researcher))?)
}

/// `countSentencesFromText` research
pub fn count_sentences_from_text(
    _paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_sentence_lengths(researcher))?)
}

/// `getParagraphLength` research
pub fn get_paragraph_length(_paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_paragraph_lengths(researcher))?)
}
