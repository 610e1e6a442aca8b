//! English language data

/// Words that carry no topical meaning on their own
pub(crate) static FUNCTION_WORDS: &[&str] = &[
    // articles, determiners and quantifiers
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "each", "every", "all",
    "both", "either", "neither", "no", "none", "few", "many", "much", "more", "most", "less",
    "least", "several", "such", "own", "other", "another", "same", "enough", "lot", "lots",
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "first",
    "second", "third", "once", "twice",
    // pronouns
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us",
    "our", "ours", "ourselves", "they", "them", "their", "theirs", "themselves", "who", "whom",
    "whose", "which", "what", "whatever", "whoever", "whichever", "someone", "somebody",
    "something", "anyone", "anybody", "anything", "everyone", "everybody", "everything",
    "nobody", "nothing",
    // contractions
    "i'm", "i've", "i'd", "i'll", "you're", "you've", "you'd", "you'll", "he's", "he'd",
    "he'll", "she's", "she'd", "she'll", "it's", "it'd", "it'll", "we're", "we've", "we'd",
    "we'll", "they're", "they've", "they'd", "they'll", "that's", "there's", "here's", "what's",
    "who's", "let's", "isn't", "aren't", "wasn't", "weren't", "don't", "doesn't", "didn't",
    "won't", "wouldn't", "can't", "cannot", "couldn't", "shouldn't", "hasn't", "haven't",
    "hadn't", "mustn't",
    // auxiliaries and copulas
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "can", "could", "may", "might", "must", "shall",
    "should", "will", "would", "ought", "get", "gets", "got", "getting", "go", "goes", "going",
    "went", "gone", "make", "makes", "made", "say", "says", "said", "see", "seen", "come",
    "came", "take", "took", "know", "knew", "want", "wants", "need", "needs", "seem", "seems",
    "use", "used",
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "as", "at",
    "before", "behind", "below", "beneath", "beside", "besides", "between", "beyond", "by",
    "despite", "down", "during", "except", "for", "from", "in", "inside", "into", "like",
    "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "per", "since",
    "through", "throughout", "till", "to", "toward", "towards", "under", "underneath", "until",
    "up", "upon", "via", "with", "within", "without",
    // conjunctions
    "and", "but", "or", "nor", "so", "yet", "if", "because", "although", "though", "while",
    "whereas", "unless", "whether", "than", "then", "when", "whenever", "where", "wherever",
    "why", "how", "however",
    // adverbs and intensifiers
    "very", "really", "quite", "rather", "too", "also", "just", "only", "even", "still",
    "already", "almost", "always", "never", "ever", "often", "sometimes", "usually", "again",
    "here", "there", "now", "not", "well", "maybe", "perhaps", "probably", "actually",
    "certainly", "definitely", "simply", "indeed", "else", "instead", "together", "yes",
    // vague adjectives and nouns
    "important", "new", "old", "good", "great", "big", "little", "small", "way", "ways",
    "thing", "things", "kind", "sort", "time", "times", "day", "days", "year", "years",
    "people", "sure", "able", "possible", "certain",
];

/// Words that connect sentences and signal structure
pub(crate) static TRANSITION_WORDS: &[&str] = &[
    "accordingly", "additionally", "afterward", "afterwards", "also", "although", "besides",
    "consequently", "conversely", "finally", "first", "firstly", "furthermore", "hence",
    "however", "indeed", "instead", "likewise", "meanwhile", "moreover", "namely",
    "nevertheless", "nonetheless", "otherwise", "second", "secondly", "similarly", "still",
    "subsequently", "then", "therefore", "thus", "ultimately", "because", "since", "unless",
];
