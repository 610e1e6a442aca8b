//! Catalan language data

/// Words that carry no topical meaning on their own
pub(crate) static FUNCTION_WORDS: &[&str] = &[
    "el", "la", "l'", "els", "les", "un", "una", "uns", "unes", "lo", "los", "aquest", "aquesta",
    "aquests", "aquestes", "aquell", "aquella", "aquells", "aquelles", "meu", "meva", "teu",
    "teva", "seu", "seva", "seus", "seves", "nostre", "nostra", "vostre", "vostra", "jo", "tu",
    "ell", "ella", "nosaltres", "vosaltres", "ells", "elles", "em", "et", "es", "ens", "us",
    "li", "hi", "ho", "en", "ne", "de", "del", "dels", "d'", "a", "al", "als", "amb", "per",
    "pel", "pels", "sense", "sobre", "sota", "entre", "cap", "fins", "des", "contra", "i", "o",
    "però", "perquè", "que", "qui", "què", "quan", "on", "com", "si", "ni", "doncs", "també",
    "no", "sí", "molt", "molta", "molts", "moltes", "poc", "poca", "més", "menys", "tot",
    "tota", "tots", "totes", "altre", "altra", "altres", "ja", "encara", "sempre", "mai", "aquí",
    "allà", "és", "són", "era", "eren", "ser", "estar", "està", "estan", "ha", "han", "he",
    "hem", "heu", "haver", "fer", "fa", "fan", "pot", "poden",
];

/// Words that connect sentences and signal structure
pub(crate) static TRANSITION_WORDS: &[&str] = &[
    "això", "així", "després", "finalment", "llavors", "però", "perquè", "primer", "tanmateix",
    "també", "doncs", "aleshores", "altrament", "igualment", "consegüentment",
];
