//! Keyphrase researches: forms, length, density and placement

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wordlens_paper::Paper;

use super::matching::{find_phrase, Keyphrase};
use crate::error::ResearchError;
use crate::researcher::Researcher;
use crate::text::{sentences, strip_tags};

/// Word forms of the keyphrase and each synonym
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyphraseForms {
    /// One form list per keyphrase content word
    pub keyphrase_forms: Vec<Vec<String>>,
    /// One entry per synonym, each with one form list per content word
    pub synonyms_forms: Vec<Vec<Vec<String>>>,
}

/// Keyphrase length in content words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyphraseLength {
    /// Number of content words
    pub keyphrase_length: usize,
    /// Function words found in the keyphrase
    pub function_words: Vec<String>,
}

/// Keyphrase occurrences in the body text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount {
    /// Number of keyphrase occurrences summed over sentences
    pub count: usize,
    /// Tokens that matched a keyphrase word
    pub matches: Vec<String>,
    /// Occurrences per hundred units of text (words or characters)
    pub density: f64,
}

/// Keyphrase placement in the SEO title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleMatch {
    /// Keyphrase occurs verbatim in the title
    pub exact_match_found: bool,
    /// Every content word occurs in some form
    pub all_words_found: bool,
    /// Token position of the exact match after leading function words, `-1` when absent
    pub position: i64,
}

/// Keyphrase placement in the first paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstParagraphMatch {
    /// All words occur within one sentence
    pub found_in_one_sentence: bool,
    /// All words occur within the paragraph
    pub found_in_paragraph: bool,
    /// `keyphrase`, `synonym` or empty when nothing matched
    pub keyphrase_or_synonym: String,
}

/// Keyphrase words in the slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlMatch {
    /// Number of keyphrase content words
    pub keyphrase_length: usize,
    /// Percentage of content words found in the slug
    pub percent_word_matches: u32,
}

fn sorted_forms(keyphrase: &Keyphrase) -> Vec<Vec<String>> {
    if keyphrase.exact {
        return keyphrase.tokens.iter().map(|t| vec![t.clone()]).collect();
    }
    keyphrase
        .forms()
        .iter()
        .map(|forms| forms.iter().cloned().collect())
        .collect()
}

/// Word forms of the keyphrase and synonyms
pub fn get_keyphrase_forms(paper: &Paper, researcher: &Researcher) -> KeyphraseForms {
    let keyphrase = Keyphrase::new(paper.keyword(), researcher);
    KeyphraseForms {
        keyphrase_forms: sorted_forms(&keyphrase),
        synonyms_forms: paper
            .synonyms()
            .iter()
            .map(|synonym| sorted_forms(&Keyphrase::new(synonym, researcher)))
            .collect(),
    }
}

/// Number of content words in the keyphrase
pub fn get_keyphrase_length(paper: &Paper, researcher: &Researcher) -> KeyphraseLength {
    let keyphrase = Keyphrase::new(paper.keyword(), researcher);
    KeyphraseLength {
        keyphrase_length: keyphrase.content_words.len(),
        function_words: keyphrase.function_words,
    }
}

/// Keyphrase occurrences and density in the body text
pub fn get_keyword_count(paper: &Paper, researcher: &Researcher) -> KeywordCount {
    let keyphrase = Keyphrase::new(paper.keyword(), researcher);
    let mut count = 0;
    let mut matches = Vec::new();
    for tokens in researcher.parsed().sentence_tokens() {
        let in_sentence = keyphrase.count_in(tokens);
        if in_sentence > 0 {
            count += in_sentence;
            matches.extend(keyphrase.matched_tokens(tokens));
        }
    }

    let text_length = researcher.text_length();
    let density = if text_length == 0 {
        0.0
    } else {
        count as f64 / text_length as f64 * 100.0
    };
    KeywordCount {
        count,
        matches,
        density,
    }
}

/// Keyphrase placement in the SEO title
pub fn get_title_match(paper: &Paper, researcher: &Researcher) -> TitleMatch {
    let keyphrase = Keyphrase::new(paper.keyword(), researcher);
    let title_tokens = researcher.tokenizer().tokenize(paper.title());
    if keyphrase.is_empty() || title_tokens.is_empty() {
        return TitleMatch {
            exact_match_found: false,
            all_words_found: false,
            position: -1,
        };
    }

    let exact_at = find_phrase(&keyphrase.tokens, &title_tokens);
    let position = match exact_at {
        Some(index) => {
            let leading_content = title_tokens[..index]
                .iter()
                .filter(|token| !researcher.is_function_word(token))
                .count();
            if leading_content == 0 {
                0
            } else {
                index as i64
            }
        }
        None => -1,
    };

    TitleMatch {
        exact_match_found: exact_at.is_some(),
        all_words_found: keyphrase.found_in(&title_tokens),
        position,
    }
}

/// Keyphrase or synonym placement in the first paragraph
pub fn get_first_paragraph_match(paper: &Paper, researcher: &Researcher) -> FirstParagraphMatch {
    let mut result = FirstParagraphMatch {
        found_in_one_sentence: false,
        found_in_paragraph: false,
        keyphrase_or_synonym: String::new(),
    };

    let parsed = researcher.parsed();
    let paragraph = match parsed.paragraphs().first() {
        Some(paragraph) => paragraph,
        None => return result,
    };
    let tokenizer = researcher.tokenizer();
    let paragraph_tokens = tokenizer.tokenize(paragraph);
    let sentence_tokens: Vec<Vec<String>> = sentences(paragraph)
        .iter()
        .map(|sentence| tokenizer.tokenize(sentence))
        .collect();

    let candidates = std::iter::once(("keyphrase", paper.keyword()))
        .chain(paper.synonyms().iter().map(|s| ("synonym", s.as_str())));
    for (kind, raw) in candidates {
        let keyphrase = Keyphrase::new(raw, researcher);
        if keyphrase.is_empty() {
            continue;
        }
        if sentence_tokens.iter().any(|tokens| keyphrase.found_in(tokens)) {
            return FirstParagraphMatch {
                found_in_one_sentence: true,
                found_in_paragraph: true,
                keyphrase_or_synonym: kind.to_string(),
            };
        }
        if !result.found_in_paragraph && keyphrase.found_in(&paragraph_tokens) {
            result.found_in_paragraph = true;
            result.keyphrase_or_synonym = kind.to_string();
        }
    }
    result
}

/// Number of meta description sentences containing the keyphrase or a synonym
pub fn get_meta_description_matches(paper: &Paper, researcher: &Researcher) -> usize {
    if !paper.has_description() {
        return 0;
    }
    let tokenizer = researcher.tokenizer();
    let keyphrases: Vec<Keyphrase> = std::iter::once(paper.keyword())
        .chain(paper.synonyms().iter().map(String::as_str))
        .map(|raw| Keyphrase::new(raw, researcher))
        .filter(|keyphrase| !keyphrase.is_empty())
        .collect();

    sentences(&strip_tags(paper.description()))
        .iter()
        .map(|sentence| tokenizer.tokenize(sentence))
        .filter(|tokens| keyphrases.iter().any(|k| k.found_in(tokens)))
        .count()
}

/// Share of keyphrase content words that appear in the slug
pub fn get_url_match(paper: &Paper, researcher: &Researcher) -> UrlMatch {
    let keyphrase = Keyphrase::new(paper.keyword(), researcher);
    let slug = paper
        .permalink()
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or_default()
        .replace(['-', '_', '.'], " ");
    let slug_tokens = researcher.tokenizer().tokenize(&slug);

    UrlMatch {
        keyphrase_length: keyphrase.content_words.len(),
        percent_word_matches: (keyphrase.share_found_in(&slug_tokens) * 100.0).round() as u32,
    }
}

/// `morphology` research
pub fn morphology(paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_keyphrase_forms(paper, researcher))?)
}

/// `keyphraseLength` research
pub fn keyphrase_length(paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_keyphrase_length(paper, researcher))?)
}

/// `keywordCount` research
pub fn keyword_count(paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_keyword_count(paper, researcher))?)
}

/// `findKeywordInPageTitle` research
pub fn find_keyword_in_page_title(
    paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_title_match(paper, researcher))?)
}

/// `findKeywordInFirstParagraph` research
pub fn find_keyword_in_first_paragraph(
    paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_first_paragraph_match(paper, researcher))?)
}

/// `metaDescriptionKeyword` research
pub fn meta_description_keyword(
    paper: &Paper,
    researcher: &Researcher,
) -> Result<Value, ResearchError> {
    Ok(Value::from(get_meta_description_matches(paper, researcher)))
}

/// `keywordCountInUrl` research
pub fn keyword_count_in_url(paper: &Paper, researcher: &Researcher) -> Result<Value, ResearchError> {
    Ok(serde_json::to_value(get_url_match(paper, researcher))?)
}
