//! English noun forms: singular, plural and possessive

use super::exceptions::{
    is_ie_word, is_non_inflected, is_singular_s_noun, is_uncountable, NOUN_PLURALS, NOUN_SINGULARS,
};
use super::{drop_suffix, ends_with_consonant_y};

/// Whether a normalized word carries a possessive suffix (`cat's`, `cats'`)
pub fn check_possessive(word: &str) -> bool {
    word.chars().count() > 2 && (word.ends_with("'s") || word.ends_with("s'"))
}

/// Remove a possessive suffix
pub(crate) fn strip_possessive(word: &str) -> String {
    if word.ends_with("'s") {
        drop_suffix(word, 2)
    } else if word.ends_with("s'") {
        drop_suffix(word, 1)
    } else {
        word.to_string()
    }
}

/// Singular of a regularly inflected plural, if the word looks plural
pub(crate) fn singularize(word: &str) -> Option<String> {
    if is_non_inflected(word)
        || is_uncountable(word)
        || is_singular_s_noun(word)
        || word.chars().count() <= 3
    {
        return None;
    }
    if let Some(singular) = NOUN_SINGULARS.get(word) {
        return Some(singular.to_string());
    }
    if word.ends_with("es") {
        let stem = drop_suffix(word, 2);
        if is_singular_s_noun(&stem) {
            return Some(stem);
        }
    }
    if word.ends_with("ies") && word.chars().count() > 4 {
        let stem = drop_suffix(word, 1);
        if is_ie_word(&stem) {
            return Some(stem);
        }
        return Some(format!("{}y", drop_suffix(word, 3)));
    }
    if ["sses", "shes", "ches", "xes", "zzes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return Some(drop_suffix(word, 2));
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if word.ends_with('s') {
        return Some(drop_suffix(word, 1));
    }
    None
}

/// Regular plural forms of a singular noun
pub(crate) fn pluralize(word: &str) -> Vec<String> {
    if let Some(plurals) = NOUN_PLURALS.get(word) {
        return plurals.iter().map(|p| p.to_string()).collect();
    }
    if is_uncountable(word) {
        return vec![word.to_string()];
    }
    if ends_with_consonant_y(word) {
        return vec![format!("{}ies", drop_suffix(word, 1))];
    }
    if ["s", "x", "z", "ch", "sh"].iter().any(|suffix| word.ends_with(suffix)) {
        return vec![format!("{}es", word)];
    }
    vec![format!("{}s", word)]
}

/// Singular and plural forms of a noun, including the word itself
pub fn get_noun_forms(word: &str) -> Vec<String> {
    let word = strip_possessive(word);
    if word.is_empty() {
        return vec![];
    }
    let singular = singularize(&word).unwrap_or_else(|| word.clone());

    let mut forms = vec![singular.clone()];
    forms.extend(pluralize(&singular));
    if !forms.contains(&word) {
        forms.push(word);
    }
    forms.dedup();
    forms
}

/// Noun forms together with their possessive variants
pub fn get_noun_forms_with_possessives(word: &str) -> Vec<String> {
    let stripped = strip_possessive(word);
    if stripped.is_empty() {
        return vec![];
    }
    let singular = singularize(&stripped).unwrap_or_else(|| stripped.clone());

    let mut forms = Vec::new();
    for form in get_noun_forms(&stripped) {
        let possessive = if form != singular && form.ends_with('s') {
            format!("{}'", form)
        } else {
            format!("{}'s", form)
        };
        forms.push(form);
        forms.push(possessive);
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_possessive() {
        assert!(check_possessive("google's"));
        assert!(check_possessive("cats'"));
        assert!(!check_possessive("cats"));
        assert!(!check_possessive("'s"));
    }

    #[test]
    fn test_singularize_regular_plurals() {
        assert_eq!(singularize("syllables").as_deref(), Some("syllable"));
        assert_eq!(singularize("combinations").as_deref(), Some("combination"));
        assert_eq!(singularize("companies").as_deref(), Some("company"));
        assert_eq!(singularize("churches").as_deref(), Some("church"));
        assert_eq!(singularize("classes").as_deref(), Some("class"));
        assert_eq!(singularize("sites").as_deref(), Some("site"));
        assert_eq!(singularize("uses").as_deref(), Some("use"));
    }

    #[test]
    fn test_singularize_ie_nouns() {
        assert_eq!(singularize("cookies").as_deref(), Some("cookie"));
        assert_eq!(singularize("movies").as_deref(), Some("movie"));
        assert_eq!(singularize("pies").as_deref(), Some("pie"));
        assert_eq!(singularize("stories").as_deref(), Some("story"));
    }

    #[test]
    fn test_singular_nouns_ending_in_s() {
        for word in ["bias", "atlas", "chaos", "lens", "canvas"] {
            assert_eq!(singularize(word), None, "{}", word);
        }
        assert_eq!(singularize("biases").as_deref(), Some("bias"));
        assert_eq!(singularize("lenses").as_deref(), Some("lens"));
        assert_eq!(singularize("buses").as_deref(), Some("bus"));
        assert_eq!(singularize("statuses").as_deref(), Some("status"));
        assert_eq!(singularize("ideas").as_deref(), Some("idea"));
    }

    #[test]
    fn test_singularize_leaves_non_plurals() {
        for word in ["business", "status", "analysis", "news", "bus", "always"] {
            assert_eq!(singularize(word), None, "{}", word);
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("company"), vec!["companies"]);
        assert_eq!(pluralize("day"), vec!["days"]);
        assert_eq!(pluralize("box"), vec!["boxes"]);
        assert_eq!(pluralize("potato"), vec!["potatoes"]);
        assert_eq!(pluralize("echo"), vec!["echoes"]);
        assert_eq!(pluralize("photo"), vec!["photos"]);
        assert_eq!(pluralize("lens"), vec!["lenses"]);
        assert_eq!(pluralize("index"), vec!["indices", "indexes"]);
    }

    #[test]
    fn test_noun_forms_from_plural() {
        let forms = get_noun_forms("indices");
        assert!(forms.contains(&"index".to_string()));
        assert!(forms.contains(&"indices".to_string()));
        assert!(forms.contains(&"indexes".to_string()));
    }

    #[test]
    fn test_possessives_for_irregular_plural() {
        let forms = get_noun_forms_with_possessives("children");
        assert!(forms.contains(&"child's".to_string()));
        assert!(forms.contains(&"children's".to_string()));
    }
}
