//! Japanese language data

/// Particles and auxiliaries that carry no topical meaning on their own
pub(crate) static FUNCTION_WORDS: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる", "も",
    "する", "から", "な", "こと", "として", "い", "や", "れる", "など", "なっ", "ない", "この",
    "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる",
    "へ", "か", "だ", "これ", "によって", "により", "おり", "より", "による", "ず", "なり",
    "られる", "において", "ば", "なかっ", "なく", "しかし", "について", "せ", "だっ", "できる",
    "それ", "う", "ので", "なお", "のみ", "でき", "き", "つ", "における", "および", "いう",
    "さらに", "でも", "ら", "たり", "たち", "ます", "ん", "なら", "せる", "これら", "とき",
    "では", "にて", "ほか", "ながら", "うち", "そして", "ただし", "それぞれ", "または", "お",
    "ほど", "ものの", "ほとんど", "といった", "です", "とも", "ところ", "ここ", "ました",
    "でした", "ません", "よ", "ね",
];

/// Single-character case particles that end a kanji word's okurigana
pub(crate) static CASE_PARTICLES: &[char] =
    &['が', 'を', 'は', 'に', 'で', 'と', 'の', 'へ', 'も', 'や', 'か'];

/// Words that connect sentences and signal structure
pub(crate) static TRANSITION_WORDS: &[&str] = &[
    "しかし", "そして", "また", "さらに", "ただし", "つまり", "なぜなら", "したがって", "一方",
    "例えば", "まず", "次に", "最後に", "それから",
];
