//! Research catalog
//!
//! Every research is a pure function of a paper and its researcher, registered
//! under its camelCase wire name.

pub mod keyphrase;
pub mod matching;
pub mod prominent_words;
pub mod text_statistics;

use std::collections::BTreeMap;

use lazy_static::lazy_static;

use crate::researcher::ResearchFn;

lazy_static! {
    static ref REGISTRY: BTreeMap<&'static str, ResearchFn> = {
        let mut registry: BTreeMap<&'static str, ResearchFn> = BTreeMap::new();
        registry.insert(
            "prominentWordsForInsights",
            prominent_words::prominent_words_for_insights,
        );
        registry.insert(
            "prominentWordsForInternalLinking",
            prominent_words::prominent_words_for_internal_linking,
        );
        registry.insert("morphology", keyphrase::morphology);
        registry.insert("keyphraseLength", keyphrase::keyphrase_length);
        registry.insert("keywordCount", keyphrase::keyword_count);
        registry.insert("findKeywordInPageTitle", keyphrase::find_keyword_in_page_title);
        registry.insert(
            "findKeywordInFirstParagraph",
            keyphrase::find_keyword_in_first_paragraph,
        );
        registry.insert("metaDescriptionKeyword", keyphrase::meta_description_keyword);
        registry.insert("keywordCountInUrl", keyphrase::keyword_count_in_url);
        registry.insert("wordCountInText", text_statistics::word_count_in_text);
        registry.insert(
            "countSentencesFromText",
            text_statistics::count_sentences_from_text,
        );
        registry.insert("getParagraphLength", text_statistics::get_paragraph_length);
        registry
    };
}

/// Research registered under `name`
pub fn get(name: &str) -> Option<ResearchFn> {
    REGISTRY.get(name).copied()
}

/// Names of every registered research, sorted
pub fn names() -> Vec<&'static str> {
    REGISTRY.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_contents() {
        let names = names();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"prominentWordsForInsights"));
        assert!(get("morphology").is_some());
        assert!(get("unknown").is_none());
    }
}
