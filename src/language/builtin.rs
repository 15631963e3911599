// Letter frequency percentages (a..z) and common-word lexicons.
// Lexicon entries are stored in folded form (no diacritics, lowercase).

pub const ENGLISH_LETTER_FREQ: [f64; 26] = [
    8.17, 1.49, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, 6.75, 7.51,
    1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

pub const FRENCH_LETTER_FREQ: [f64; 26] = [
    7.64, 0.90, 3.26, 3.67, 14.72, 1.07, 0.87, 0.74, 7.53, 0.61, 0.05, 5.46, 2.97, 7.10, 5.80,
    2.52, 1.36, 6.69, 7.95, 7.24, 6.31, 1.83, 0.04, 0.43, 0.13, 0.33,
];

pub const ENGLISH_STOPWORDS: &[&str] = &[
    // 50 most frequent
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not", "on",
    "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say",
    "her", "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so",
    "up", "out", "if", "about", "who", "get", "which", "go", "me",
    // next tier
    "are", "was", "were", "been", "has", "had", "can", "could", "should", "may", "might", "must",
    "shall", "into", "than", "then", "them", "these", "those", "some", "such", "only", "other",
    "over", "also", "after", "before", "more", "most", "very", "just", "like", "time", "year",
    "people", "way", "day", "man", "woman", "thing", "world", "life", "hand", "part", "child",
    "eye", "place", "work", "week", "case", "point", "new", "good", "first", "last", "long",
    "great", "little", "own", "old", "right", "big", "high", "small", "large", "next", "early",
    "young", "few", "public", "bad", "same", "able", "make", "know", "take", "see", "come",
    "think", "look", "want", "give", "use", "find", "tell", "ask", "seem", "feel", "try", "leave",
    "call", "how", "when", "where", "why", "here", "now", "no", "yes", "our", "your", "its",
    "him", "us", "any", "each", "every", "because", "while", "again", "never", "always", "down",
    "off", "through", "between", "under", "many", "much", "well", "back", "even", "still",
    "being", "did", "does", "said", "made", "went", "two", "three",
];

pub const FRENCH_STOPWORDS: &[&str] = &[
    "le", "de", "un", "etre", "et", "a", "il", "avoir", "ne", "je", "son", "que", "se", "qui",
    "ce", "dans", "en", "du", "elle", "au", "deux", "mais", "nous", "vous", "comme", "ou", "sur",
    "mon", "me", "leur", "y", "dire", "bien", "sans", "oui", "non", "plus", "peu", "tres", "tout",
    "fait", "par", "pour", "pas", "quoi", "quand", "comment", "avec",
    // next tier
    "la", "les", "des", "une", "est", "sont", "cette", "ces", "aux", "lui", "nos", "vos", "ses",
    "mes", "ton", "ta", "sa", "ma", "on", "si", "avait", "ete", "faire", "peut", "aussi",
    "encore", "apres", "avant", "deja", "toujours", "jamais", "rien", "homme", "femme", "monde",
    "jour", "temps", "vie", "main", "chose", "fois", "ici", "alors", "donc", "car", "ni", "notre",
    "votre", "leurs", "cela", "ceci", "tous", "toute", "toutes", "autre", "meme", "entre", "sous",
    "chez", "vers", "depuis", "bonjour", "merci", "grand", "petit", "nouveau", "premier",
    "dernier", "beaucoup", "moins", "trop",
];
