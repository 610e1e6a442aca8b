//! English morphology: noun, verb and adjective forms plus stemming

mod adjectives;
mod exceptions;
mod nouns;
mod stem;
mod verbs;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{normalize, Morphology, WordForms};

pub use adjectives::get_adjective_forms;
pub use nouns::{check_possessive, get_noun_forms, get_noun_forms_with_possessives};
pub use stem::determine_stem;
pub use verbs::get_verb_forms;

lazy_static! {
    /// A single vowel between an optional consonant onset and one final consonant
    static ref SHORT_CVC: Regex = Regex::new(r"^[^aeiouy]*[aeiou][^aeiouwxy]$").unwrap();
}

/// English morphology rules
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMorphology;

impl EnglishMorphology {
    /// Create the English rule set
    pub fn new() -> Self {
        EnglishMorphology
    }
}

impl Morphology for EnglishMorphology {
    fn language(&self) -> &'static str {
        "en"
    }

    fn generate_forms(&self, word: &str) -> WordForms {
        get_forms(word)
    }

    fn stem(&self, word: &str) -> String {
        determine_stem(word)
    }
}

/// All English forms of a word
///
/// A possessive word only yields the noun forms of its possessor. Any other word yields
/// the union of its noun, verb and adjective forms.
pub fn get_forms(word: &str) -> WordForms {
    let word = normalize(word);
    if word.is_empty() {
        return WordForms::new();
    }

    if check_possessive(&word) {
        let mut forms: WordForms = get_noun_forms_with_possessives(&word).into_iter().collect();
        forms.insert(word);
        return forms;
    }

    let mut forms = WordForms::new();
    forms.insert(word.clone());
    forms.extend(get_noun_forms_with_possessives(&word));
    forms.extend(get_verb_forms(&word));
    forms.extend(get_adjective_forms(&word));
    forms
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Number of vowel runs, a rough syllable count
fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut previous = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous {
            groups += 1;
        }
        previous = vowel;
    }
    groups
}

/// One-syllable consonant-vowel-consonant word whose final consonant doubles (`plan`, `stop`)
fn is_short_cvc(word: &str) -> bool {
    SHORT_CVC.is_match(word)
}

/// Ends in `y` after a consonant (`study`, not `play`)
fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

/// Word ends in a doubled consonant other than `l`, `s` or `z`
fn ends_with_doubled_consonant(word: &str) -> bool {
    let mut chars = word.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => a == b && !is_vowel(a) && !matches!(a, 'l' | 's' | 'z'),
        _ => false,
    }
}

/// Drop `n` trailing characters
fn drop_suffix(word: &str, n: usize) -> String {
    let keep = word.chars().count().saturating_sub(n);
    word.chars().take(keep).collect()
}

/// Rebuild a verb base after removing `-ing` or `-ed`
fn restore_verb_base(stem: &str) -> String {
    if exceptions::is_singular_s_noun(stem) {
        return stem.to_string();
    }
    if ends_with_doubled_consonant(stem) && stem.chars().count() >= 4 {
        return drop_suffix(stem, 1);
    }
    if needs_final_e(stem) {
        return format!("{}e", stem);
    }
    stem.to_string()
}

fn needs_final_e(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 2 {
        return false;
    }
    let last = chars[n - 1];
    let before = chars[n - 2];

    if stem.ends_with("creat") {
        return true;
    }
    match last {
        't' => before == 'a' && n >= 3 && !is_vowel(chars[n - 3]),
        'l' => before == 'b',
        'z' => before != 'z',
        'c' | 'v' | 'u' => true,
        'r' => n >= 3 && ends_with_silent_e_r(stem, before, chars[n - 3]),
        'g' => matches!(before, 'r' | 'd') || (before == 'n' && n >= 3 && chars[n - 3] == 'a'),
        's' => (is_vowel(before) && !stem.ends_with("us")) || stem == "us",
        _ => is_short_cvc(stem),
    }
}

/// `-ure`, `-ire` and stressed `-ore` bases (`cur`, `tir`, `bor`, `explor`)
///
/// Unstressed `-or` endings keep their spelling (`color`, `monitor`).
fn ends_with_silent_e_r(stem: &str, before: char, third: char) -> bool {
    match before {
        'u' => !is_vowel(third),
        'i' => !matches!(third, 'a' | 'e' | 'o'),
        'o' => {
            !is_vowel(third)
                && (vowel_groups(stem) == 1
                    || ["ador", "gnor", "plor", "scor", "stor"]
                        .iter()
                        .any(|suffix| stem.ends_with(suffix)))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordForms {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_possessive_only_yields_noun_forms() {
        let forms = get_forms("cat's");
        assert_eq!(forms, set(&["cat", "cat's", "cats", "cats'"]));
    }

    #[test]
    fn test_forms_include_all_parts_of_speech() {
        let forms = get_forms("walk");
        for expected in ["walk", "walks", "walk's", "walked", "walking", "walker", "walkest"] {
            assert!(forms.contains(expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_irregular_forms_consulted_first() {
        let nouns = get_noun_forms("child");
        assert!(nouns.contains(&"children".to_string()));
        assert!(!nouns.contains(&"childs".to_string()));

        let forms = get_forms("go");
        assert!(forms.contains("went"));
        assert!(forms.contains("gone"));
    }

    #[test]
    fn test_empty_word_has_no_forms() {
        assert!(get_forms("").is_empty());
    }

    #[test]
    fn test_restore_verb_base() {
        assert_eq!(restore_verb_base("plann"), "plan");
        assert_eq!(restore_verb_base("add"), "add");
        assert_eq!(restore_verb_base("announc"), "announce");
        assert_eq!(restore_verb_base("updat"), "update");
        assert_eq!(restore_verb_base("work"), "work");
        assert_eq!(restore_verb_base("index"), "index");
        assert_eq!(restore_verb_base("us"), "use");
        assert_eq!(restore_verb_base("chang"), "change");
        assert_eq!(restore_verb_base("creat"), "create");
    }

    #[test]
    fn test_restore_verb_base_before_r() {
        for (stem, base) in [
            ("tir", "tire"),
            ("requir", "require"),
            ("bor", "bore"),
            ("stor", "store"),
            ("explor", "explore"),
            ("ignor", "ignore"),
            ("cur", "cure"),
            ("air", "air"),
            ("repair", "repair"),
            ("color", "color"),
            ("monitor", "monitor"),
            ("order", "order"),
            ("stirr", "stir"),
        ] {
            assert_eq!(restore_verb_base(stem), base, "{}", stem);
        }
        assert_eq!(restore_verb_base("bias"), "bias");
    }
}
