//! Exception tables for English morphology
//!
//! Consulted before the regular suffix rules in both directions.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Irregular nouns: singular followed by its plural forms
static IRREGULAR_NOUNS: &[(&str, &[&str])] = &[
    ("analysis", &["analyses"]),
    ("appendix", &["appendices", "appendixes"]),
    ("cactus", &["cacti", "cactuses"]),
    ("calf", &["calves"]),
    ("child", &["children"]),
    ("crisis", &["crises"]),
    ("criterion", &["criteria"]),
    ("datum", &["data"]),
    ("echo", &["echoes"]),
    ("foot", &["feet"]),
    ("fungus", &["fungi"]),
    ("goose", &["geese"]),
    ("half", &["halves"]),
    ("index", &["indices", "indexes"]),
    ("knife", &["knives"]),
    ("leaf", &["leaves"]),
    ("life", &["lives"]),
    ("loaf", &["loaves"]),
    ("man", &["men"]),
    ("matrix", &["matrices", "matrixes"]),
    ("medium", &["media", "mediums"]),
    ("mouse", &["mice"]),
    ("nucleus", &["nuclei"]),
    ("ox", &["oxen"]),
    ("person", &["people", "persons"]),
    ("phenomenon", &["phenomena"]),
    ("potato", &["potatoes"]),
    ("hero", &["heroes"]),
    ("shelf", &["shelves"]),
    ("thesis", &["theses"]),
    ("thief", &["thieves"]),
    ("tomato", &["tomatoes"]),
    ("tooth", &["teeth"]),
    ("veto", &["vetoes"]),
    ("vertex", &["vertices", "vertexes"]),
    ("wife", &["wives"]),
    ("wolf", &["wolves"]),
    ("woman", &["women"]),
];

/// Nouns whose singular and plural coincide
static UNCOUNTABLE_NOUNS: &[&str] = &[
    "advice",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "furniture",
    "information",
    "luggage",
    "news",
    "series",
    "sheep",
    "software",
    "species",
];

/// Singular nouns ending in `-s`; their plural adds `-es`
static SINGULAR_S_NOUNS: &[&str] = &[
    "alias", "atlas", "bias", "bonus", "bus", "campus", "canvas", "census", "chaos", "cosmos",
    "ethos", "gas", "iris", "lens", "status", "virus",
];

/// Words whose base ends in `-ie`, so `-ies`, `-ied` and `-ying` lead back to `-ie`
static IE_WORDS: &[&str] = &[
    "brownie", "calorie", "cookie", "die", "freebie", "genie", "goalie", "hoodie", "movie",
    "newbie", "pie", "prairie", "rookie", "selfie", "smoothie", "tie", "veggie", "vie", "zombie",
];

/// Irregular verbs: base followed by every non-base form
static IRREGULAR_VERBS: &[(&str, &[&str])] = &[
    ("be", &["am", "is", "are", "was", "were", "been", "being"]),
    ("become", &["becomes", "became", "becoming"]),
    ("begin", &["begins", "began", "begun", "beginning"]),
    ("break", &["breaks", "broke", "broken", "breaking"]),
    ("bring", &["brings", "brought", "bringing"]),
    ("build", &["builds", "built", "building"]),
    ("buy", &["buys", "bought", "buying"]),
    ("catch", &["catches", "caught", "catching"]),
    ("choose", &["chooses", "chose", "chosen", "choosing"]),
    ("come", &["comes", "came", "coming"]),
    ("cut", &["cuts", "cutting"]),
    ("do", &["does", "did", "done", "doing"]),
    ("draw", &["draws", "drew", "drawn", "drawing"]),
    ("drive", &["drives", "drove", "driven", "driving"]),
    ("eat", &["eats", "ate", "eaten", "eating"]),
    ("fall", &["falls", "fell", "fallen", "falling"]),
    ("feel", &["feels", "felt", "feeling"]),
    ("find", &["finds", "found", "finding"]),
    ("fly", &["flies", "flew", "flown", "flying"]),
    ("get", &["gets", "got", "gotten", "getting"]),
    ("give", &["gives", "gave", "given", "giving"]),
    ("go", &["goes", "went", "gone", "going"]),
    ("grow", &["grows", "grew", "grown", "growing"]),
    ("have", &["has", "had", "having"]),
    ("hear", &["hears", "heard", "hearing"]),
    ("hit", &["hits", "hitting"]),
    ("hold", &["holds", "held", "holding"]),
    ("keep", &["keeps", "kept", "keeping"]),
    ("know", &["knows", "knew", "known", "knowing"]),
    ("lead", &["leads", "led", "leading"]),
    ("leave", &["leaves", "left", "leaving"]),
    ("let", &["lets", "letting"]),
    ("lie", &["lies", "lay", "lain", "lying"]),
    ("lose", &["loses", "lost", "losing"]),
    ("make", &["makes", "made", "making"]),
    ("mean", &["means", "meant", "meaning"]),
    ("meet", &["meets", "met", "meeting"]),
    ("pay", &["pays", "paid", "paying"]),
    ("put", &["puts", "putting"]),
    ("read", &["reads", "reading"]),
    ("rise", &["rises", "rose", "risen", "rising"]),
    ("run", &["runs", "ran", "running"]),
    ("say", &["says", "said", "saying"]),
    ("see", &["sees", "saw", "seen", "seeing"]),
    ("sell", &["sells", "sold", "selling"]),
    ("send", &["sends", "sent", "sending"]),
    ("set", &["sets", "setting"]),
    ("shut", &["shuts", "shutting"]),
    ("sing", &["sings", "sang", "sung", "singing"]),
    ("sit", &["sits", "sat", "sitting"]),
    ("sleep", &["sleeps", "slept", "sleeping"]),
    ("speak", &["speaks", "spoke", "spoken", "speaking"]),
    ("spend", &["spends", "spent", "spending"]),
    ("stand", &["stands", "stood", "standing"]),
    ("swim", &["swims", "swam", "swum", "swimming"]),
    ("take", &["takes", "took", "taken", "taking"]),
    ("teach", &["teaches", "taught", "teaching"]),
    ("tell", &["tells", "told", "telling"]),
    ("think", &["thinks", "thought", "thinking"]),
    ("understand", &["understands", "understood", "understanding"]),
    ("wear", &["wears", "wore", "worn", "wearing"]),
    ("win", &["wins", "won", "winning"]),
    ("write", &["writes", "wrote", "written", "writing"]),
];

/// Irregular adjectives: base followed by comparative and superlative forms
static IRREGULAR_ADJECTIVES: &[(&str, &[&str])] = &[
    ("bad", &["worse", "worst"]),
    ("far", &["farther", "further", "farthest", "furthest"]),
    ("good", &["better", "best"]),
    ("little", &["less", "least"]),
    ("many", &["more", "most"]),
];

/// Regular adjectives whose comparative and superlative are recognised when stemming
///
/// Arbitrary words ending in `-er`/`-est` are not stripped (`user`, `interest`).
static REGULAR_ADJECTIVES: &[&str] = &[
    "big", "bright", "busy", "cheap", "clear", "close", "cold", "dark", "deep", "early", "easy",
    "fast", "fine", "great", "happy", "hard", "heavy", "high", "hot", "large", "late", "light",
    "long", "loud", "low", "new", "nice", "old", "poor", "quick", "rich", "safe", "short",
    "simple", "slow", "small", "soft", "strong", "tiny", "warm", "wide", "young",
];

/// Words ending in `-ing`, `-ed` or `-s` that carry no inflection
static NON_INFLECTED: &[&str] = &[
    "always", "anything", "biped", "ceiling", "darling", "during", "embed", "evening",
    "everything", "flowerbed", "hotbed", "hundred", "infrared", "kindred", "morning", "naked",
    "nothing", "perhaps", "pudding", "sacred", "seabed", "sibling", "something", "spring",
    "string", "thing", "watershed", "wedding", "wicked",
];

lazy_static! {
    /// Singular noun to plural forms
    pub(crate) static ref NOUN_PLURALS: HashMap<&'static str, &'static [&'static str]> =
        IRREGULAR_NOUNS.iter().copied().collect();

    /// Irregular plural to singular
    pub(crate) static ref NOUN_SINGULARS: HashMap<&'static str, &'static str> = IRREGULAR_NOUNS
        .iter()
        .flat_map(|(singular, plurals)| plurals.iter().map(move |plural| (*plural, *singular)))
        .collect();

    /// Verb base to irregular forms
    pub(crate) static ref VERB_FORMS: HashMap<&'static str, &'static [&'static str]> =
        IRREGULAR_VERBS.iter().copied().collect();

    /// Irregular verb form to base
    pub(crate) static ref VERB_BASES: HashMap<&'static str, &'static str> = IRREGULAR_VERBS
        .iter()
        .flat_map(|(base, forms)| forms.iter().map(move |form| (*form, *base)))
        .collect();

    /// Adjective base to irregular comparative and superlative forms
    pub(crate) static ref ADJECTIVE_FORMS: HashMap<&'static str, &'static [&'static str]> =
        IRREGULAR_ADJECTIVES.iter().copied().collect();

    /// Irregular comparative or superlative to base
    pub(crate) static ref ADJECTIVE_BASES: HashMap<&'static str, &'static str> = IRREGULAR_ADJECTIVES
        .iter()
        .flat_map(|(base, forms)| forms.iter().map(move |form| (*form, *base)))
        .collect();
}

/// Whether the noun has no distinct plural
pub(crate) fn is_uncountable(word: &str) -> bool {
    UNCOUNTABLE_NOUNS.contains(&word)
}

/// Whether the word is a known regular adjective
pub(crate) fn is_regular_adjective(word: &str) -> bool {
    REGULAR_ADJECTIVES.contains(&word)
}

/// Whether the word is a singular noun that ends in `-s`
pub(crate) fn is_singular_s_noun(word: &str) -> bool {
    SINGULAR_S_NOUNS.contains(&word)
}

/// Whether the word is a known base ending in `-ie`
pub(crate) fn is_ie_word(word: &str) -> bool {
    IE_WORDS.contains(&word)
}

/// Whether the word looks inflected but is not
pub(crate) fn is_non_inflected(word: &str) -> bool {
    NON_INFLECTED.contains(&word)
}
