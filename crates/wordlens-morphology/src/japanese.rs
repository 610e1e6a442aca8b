//! Japanese morphology
//!
//! Japanese inflection attaches kana endings to a kanji stem. Stemming strips the
//! longest known ending from a token whose remainder still contains a kanji, and
//! form generation re-attaches every ending to that stem.

use crate::{normalize, Morphology, WordForms};

/// Inflectional endings
static ENDINGS: &[&str] = &[
    "させられる", "られました", "されました", "ませんでした", "かったです",
    "られる", "させる", "される", "された", "ました", "ません", "ましょう", "かった", "くない",
    "ければ", "なかった", "たい", "ない", "ます", "った", "って", "した", "して", "する", "んだ",
    "んで", "いた", "いて", "くて", "けれ", "れば", "よう", "ろう", "さ", "く", "い", "た", "て",
    "る", "う", "す", "つ", "む", "ぶ", "ぬ", "ぐ", "え", "れ", "ろ",
];

/// Endings re-attached when generating forms
static FORM_ENDINGS: &[&str] = &[
    "る", "た", "て", "ない", "ます", "ました", "ません", "られる", "させる", "される", "たい",
    "い", "かった", "くて", "くない", "さ", "する", "した", "して",
];

/// Whether the character is a CJK ideograph or the iteration mark
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' | '々')
}

/// Whether the character is hiragana
pub fn is_hiragana(c: char) -> bool {
    matches!(c, '\u{3041}'..='\u{309F}')
}

/// Whether the character is katakana, including the prolonged sound mark
pub fn is_katakana(c: char) -> bool {
    matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}')
}

/// Japanese morphology rules
#[derive(Debug, Clone, Copy, Default)]
pub struct JapaneseMorphology;

impl JapaneseMorphology {
    /// Create the Japanese rule set
    pub fn new() -> Self {
        JapaneseMorphology
    }
}

impl Morphology for JapaneseMorphology {
    fn language(&self) -> &'static str {
        "ja"
    }

    fn generate_forms(&self, word: &str) -> WordForms {
        let word = normalize(word);
        if word.is_empty() {
            return WordForms::new();
        }

        let stem = determine_stem(&word);
        let mut forms = WordForms::new();
        forms.insert(word);
        if stem.chars().any(is_kanji) {
            forms.insert(stem.clone());
            for ending in FORM_ENDINGS {
                forms.insert(format!("{}{}", stem, ending));
            }
        }
        forms
    }

    fn stem(&self, word: &str) -> String {
        determine_stem(&normalize(word))
    }
}

/// Strip the longest inflectional ending, keeping at least one kanji in the stem
pub fn determine_stem(word: &str) -> String {
    if !word.chars().any(is_kanji) {
        return word.to_string();
    }
    ENDINGS
        .iter()
        .filter_map(|ending| word.strip_suffix(ending))
        .filter(|stem| stem.chars().any(is_kanji))
        .min_by_key(|stem| stem.len())
        .map(str::to_string)
        .unwrap_or_else(|| word.to_string())
}
