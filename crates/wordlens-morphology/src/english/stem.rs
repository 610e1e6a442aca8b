//! Map an English surface form back to its base word

use super::adjectives::get_adjective_base;
use super::exceptions::{is_non_inflected, is_uncountable, NOUN_PLURALS, NOUN_SINGULARS, VERB_FORMS};
use super::nouns::{check_possessive, singularize, strip_possessive};
use super::verbs::get_verb_base;
use crate::normalize;

/// Canonical stem of an English word
///
/// Irregular tables win over suffix rules. Words that only look inflected
/// (`thing`, `bing`, `need`) come back unchanged.
pub fn determine_stem(word: &str) -> String {
    let mut word = normalize(word);
    if check_possessive(&word) {
        word = strip_possessive(&word);
    }
    if word.is_empty() || is_non_inflected(&word) {
        return word;
    }

    // Known base forms stay as they are.
    if VERB_FORMS.contains_key(word.as_str())
        || NOUN_PLURALS.contains_key(word.as_str())
        || is_uncountable(&word)
    {
        return word;
    }

    if let Some(base) = get_verb_base(&word) {
        return base;
    }
    if let Some(singular) = NOUN_SINGULARS.get(word.as_str()) {
        return singular.to_string();
    }
    if let Some(base) = get_adjective_base(&word) {
        return base;
    }
    singularize(&word).unwrap_or(word)
}
