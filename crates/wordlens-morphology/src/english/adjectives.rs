//! English adjective forms: comparative and superlative

use super::exceptions::{is_regular_adjective, ADJECTIVE_BASES, ADJECTIVE_FORMS};
use super::{drop_suffix, ends_with_consonant_y, ends_with_doubled_consonant, is_short_cvc};

/// Base of a comparative or superlative, when the adjective is known
pub(crate) fn get_adjective_base(word: &str) -> Option<String> {
    if let Some(base) = ADJECTIVE_BASES.get(word) {
        return Some(base.to_string());
    }

    let stripped = if word.ends_with("est") {
        drop_suffix(word, 3)
    } else if word.ends_with("er") {
        drop_suffix(word, 2)
    } else {
        return None;
    };

    let mut candidates = vec![stripped.clone(), format!("{}e", stripped)];
    if stripped.ends_with('i') {
        candidates.push(format!("{}y", drop_suffix(&stripped, 1)));
    }
    if ends_with_doubled_consonant(&stripped) {
        candidates.push(drop_suffix(&stripped, 1));
    }
    candidates.into_iter().find(|c| is_regular_adjective(c))
}

fn comparative(base: &str) -> String {
    if base.ends_with('e') {
        return format!("{}r", base);
    }
    if ends_with_consonant_y(base) {
        return format!("{}ier", drop_suffix(base, 1));
    }
    if is_short_cvc(base) {
        if let Some(last) = base.chars().last() {
            return format!("{}{}er", base, last);
        }
    }
    format!("{}er", base)
}

fn superlative(base: &str) -> String {
    if base.ends_with('e') {
        return format!("{}st", base);
    }
    if ends_with_consonant_y(base) {
        return format!("{}iest", drop_suffix(base, 1));
    }
    if is_short_cvc(base) {
        if let Some(last) = base.chars().last() {
            return format!("{}{}est", base, last);
        }
    }
    format!("{}est", base)
}

/// Base, comparative and superlative forms of a word
pub fn get_adjective_forms(word: &str) -> Vec<String> {
    if word.is_empty() {
        return vec![];
    }
    let base = get_adjective_base(word).unwrap_or_else(|| word.to_string());

    let mut forms = vec![base.clone()];
    match ADJECTIVE_FORMS.get(base.as_str()) {
        Some(irregular) => forms.extend(irregular.iter().map(|f| f.to_string())),
        None => {
            forms.push(comparative(&base));
            forms.push(superlative(&base));
        }
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
    fn test_adjective_base() {
        assert_eq!(get_adjective_base("bigger").as_deref(), Some("big"));
        assert_eq!(get_adjective_base("easiest").as_deref(), Some("easy"));
        assert_eq!(get_adjective_base("nicer").as_deref(), Some("nice"));
        assert_eq!(get_adjective_base("better").as_deref(), Some("good"));
        assert_eq!(get_adjective_base("user"), None);
        assert_eq!(get_adjective_base("interest"), None);
    }

    #[test]
    fn test_adjective_forms() {
        let forms = get_adjective_forms("big");
        assert_eq!(forms, vec!["big", "bigger", "biggest"]);

        let forms = get_adjective_forms("happy");
        assert_eq!(forms, vec!["happy", "happier", "happiest"]);

        let forms = get_adjective_forms("best");
        assert_eq!(forms, vec!["good", "better", "best"]);
    }
}
