//! English verb forms: base, third person, gerund and past tense

use super::exceptions::{is_ie_word, is_non_inflected, VERB_BASES, VERB_FORMS};
use super::{
    drop_suffix, ends_with_consonant_y, has_vowel, is_short_cvc, restore_verb_base,
};

/// Base form of a verb, removing `-ing` or `-ed` when the word is inflected
pub(crate) fn get_verb_base(word: &str) -> Option<String> {
    if let Some(base) = VERB_BASES.get(word) {
        return Some(base.to_string());
    }
    if VERB_FORMS.contains_key(word) || is_non_inflected(word) {
        return None;
    }

    let length = word.chars().count();
    if word.ends_with("ing") && length >= 5 {
        let stem = drop_suffix(word, 3);
        if stem.ends_with('y') {
            let base = format!("{}ie", drop_suffix(&stem, 1));
            if is_ie_word(&base) {
                return Some(base);
            }
        }
        if has_vowel(&stem) {
            return Some(restore_verb_base(&stem));
        }
    }
    if word.ends_with("ed") && !word.ends_with("eed") && length >= 4 {
        let stem = drop_suffix(word, 2);
        if stem.ends_with('i') {
            let base = format!("{}e", stem);
            if is_ie_word(&base) {
                return Some(base);
            }
            if stem.chars().count() > 2 {
                return Some(format!("{}y", drop_suffix(&stem, 1)));
            }
        }
        if has_vowel(&stem) {
            return Some(restore_verb_base(&stem));
        }
    }
    None
}

fn third_person(base: &str) -> String {
    if ends_with_consonant_y(base) {
        return format!("{}ies", drop_suffix(base, 1));
    }
    if ["s", "x", "z", "ch", "sh", "o"].iter().any(|suffix| base.ends_with(suffix)) {
        return format!("{}es", base);
    }
    format!("{}s", base)
}

fn doubles_final_consonant(base: &str) -> bool {
    is_short_cvc(base)
}

fn gerund(base: &str) -> String {
    if base.ends_with("ie") {
        return format!("{}ying", drop_suffix(base, 2));
    }
    if base.ends_with("ee") || base.ends_with("ye") || base.ends_with("oe") {
        return format!("{}ing", base);
    }
    if base.ends_with('e') && base.chars().count() > 2 {
        return format!("{}ing", drop_suffix(base, 1));
    }
    if doubles_final_consonant(base) {
        if let Some(last) = base.chars().last() {
            return format!("{}{}ing", base, last);
        }
    }
    format!("{}ing", base)
}

fn past(base: &str) -> String {
    if base.ends_with('e') {
        return format!("{}d", base);
    }
    if ends_with_consonant_y(base) {
        return format!("{}ied", drop_suffix(base, 1));
    }
    if doubles_final_consonant(base) {
        if let Some(last) = base.chars().last() {
            return format!("{}{}ed", base, last);
        }
    }
    format!("{}ed", base)
}

/// All verb forms of a word, including the word itself
pub fn get_verb_forms(word: &str) -> Vec<String> {
    if word.is_empty() {
        return vec![];
    }
    let base = get_verb_base(word).unwrap_or_else(|| word.to_string());

    let mut forms = vec![base.clone()];
    if let Some(irregular) = VERB_FORMS.get(base.as_str()) {
        forms.extend(irregular.iter().map(|f| f.to_string()));
    } else {
        forms.push(third_person(&base));
        forms.push(gerund(&base));
        forms.push(past(&base));
    }
    if !forms.iter().any(|f| f == word) {
        forms.push(word.to_string());
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_base_from_inflections() {
        assert_eq!(get_verb_base("working").as_deref(), Some("work"));
        assert_eq!(get_verb_base("indexing").as_deref(), Some("index"));
        assert_eq!(get_verb_base("planned").as_deref(), Some("plan"));
        assert_eq!(get_verb_base("announced").as_deref(), Some("announce"));
        assert_eq!(get_verb_base("applied").as_deref(), Some("apply"));
        assert_eq!(get_verb_base("used").as_deref(), Some("use"));
        assert_eq!(get_verb_base("went").as_deref(), Some("go"));
    }

    #[test]
    fn test_verb_base_of_ie_verbs() {
        assert_eq!(get_verb_base("dying").as_deref(), Some("die"));
        assert_eq!(get_verb_base("died").as_deref(), Some("die"));
        assert_eq!(get_verb_base("tying").as_deref(), Some("tie"));
        assert_eq!(get_verb_base("tied").as_deref(), Some("tie"));
        assert_eq!(get_verb_base("studying").as_deref(), Some("study"));
    }

    #[test]
    fn test_verb_base_keeps_final_e_before_r() {
        assert_eq!(get_verb_base("tired").as_deref(), Some("tire"));
        assert_eq!(get_verb_base("tiring").as_deref(), Some("tire"));
        assert_eq!(get_verb_base("bored").as_deref(), Some("bore"));
        assert_eq!(get_verb_base("ignored").as_deref(), Some("ignore"));
        assert_eq!(get_verb_base("colored").as_deref(), Some("color"));
    }

    #[test]
    fn test_verb_base_guards_short_words() {
        for word in ["bing", "thing", "need", "red", "string", "morning", "speed", "embed"] {
            assert_eq!(get_verb_base(word), None, "{}", word);
        }
    }

    #[test]
    fn test_regular_verb_forms() {
        let forms = get_verb_forms("plan");
        for expected in ["plan", "plans", "planning", "planned"] {
            assert!(forms.contains(&expected.to_string()), "missing {}", expected);
        }

        let forms = get_verb_forms("study");
        for expected in ["studies", "studying", "studied"] {
            assert!(forms.contains(&expected.to_string()), "missing {}", expected);
        }

        let forms = get_verb_forms("update");
        for expected in ["updates", "updating", "updated"] {
            assert!(forms.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_irregular_verb_forms() {
        let forms = get_verb_forms("wrote");
        assert!(forms.contains(&"write".to_string()));
        assert!(forms.contains(&"written".to_string()));
        assert!(!forms.contains(&"writed".to_string()));
    }
}
