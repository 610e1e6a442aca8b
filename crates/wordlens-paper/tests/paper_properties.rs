//! Property-based tests for the paper value
//! Derivations build new papers and never touch the source value.

use proptest::prelude::*;
use wordlens_paper::{parse_synonyms, Paper, PaperAttributes, DEFAULT_LOCALE};

fn attributes_strategy() -> impl Strategy<Value = PaperAttributes> {
    (
        "[a-z ]{0,20}",
        prop::collection::vec("[a-z]{1,8}", 0..4),
        "[A-Za-z ]{0,30}",
        "[a-z_]{0,6}",
    )
        .prop_map(|(keyword, synonyms, title, locale)| PaperAttributes {
            keyword,
            synonyms,
            title,
            locale,
            ..Default::default()
        })
}

proptest! {
    /// Property: deriving a keyphrase variant keeps every other field
    #[test]
    fn prop_with_keyphrase_preserves_content(
        text in "[A-Za-z .<>/]{0,80}",
        attributes in attributes_strategy(),
        keyword in "[a-z ]{0,12}",
    ) {
        let paper = Paper::new(text.clone(), attributes);
        let before = paper.clone();
        let derived = paper.with_keyphrase(keyword.clone(), vec![]);

        prop_assert_eq!(&paper, &before);
        prop_assert_eq!(derived.text(), text.as_str());
        prop_assert_eq!(derived.title(), paper.title());
        prop_assert_eq!(derived.locale(), paper.locale());
        prop_assert_eq!(derived.keyword(), keyword.as_str());
    }

    /// Property: every paper has a non-empty locale
    #[test]
    fn prop_locale_never_empty(attributes in attributes_strategy()) {
        let blank = attributes.locale.trim().is_empty();
        let paper = Paper::new("text", attributes);
        prop_assert!(!paper.locale().is_empty());
        if blank {
            prop_assert_eq!(paper.locale(), DEFAULT_LOCALE);
        }
    }

    /// Property: parsed synonyms are trimmed and non-empty
    #[test]
    fn prop_parsed_synonyms_are_clean(raw in "[a-z ,]{0,40}") {
        for synonym in parse_synonyms(&raw) {
            prop_assert!(!synonym.is_empty());
            prop_assert_eq!(synonym.trim(), synonym.as_str());
            prop_assert!(!synonym.contains(','));
        }
    }
}
