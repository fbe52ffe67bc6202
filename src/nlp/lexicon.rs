//! Curated word lists shared by language detection and topic filtering.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Structural words that indicate Romanized Hindi.
pub const HINGLISH_MARKERS: &[&str] = &[
    // conjunctions / particles
    "aur", "ya", "lekin", "par", "toh", "bhi", "hi", "na", "nahi", "nhi",
    // verbs / helpers
    "hai", "ho", "hoga", "hogi", "tha", "thi", "the", "hain", "kya", "kaise", "kyun", "kyu",
    "kyunki", "karo", "karna", "krna", "samjhao", "batao", "dekho", "suno", "jao", "aao", "chalo",
    // postpositions
    "ka", "ki", "ke", "mein", "me", "se", "tak", "wala", "wali", "wale", "ko", "pe", "pr",
    // question / emphasis
    "kab", "kaha", "kaun", "kitna", "sach", "jhooth", "accha", "theek",
    // high-signal nouns
    "ghar", "dost", "bhai", "yaar", "paisa", "paise", "kaam", "log", "rishta", "pyaar", "zindagi",
    "dil", "duniya",
];

/// Markers that collide with everyday English and never decide on their own.
pub const AMBIGUOUS_MARKERS: &[&str] = &["me", "the", "hi", "par", "ko"];

pub static MARKERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HINGLISH_MARKERS.iter().copied().collect());

pub static HIGH_SIGNAL_MARKERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HINGLISH_MARKERS
        .iter()
        .copied()
        .filter(|word| !AMBIGUOUS_MARKERS.contains(word))
        .collect()
});

pub fn is_marker(word: &str) -> bool {
    MARKERS.contains(word)
}

pub fn is_ambiguous_marker(word: &str) -> bool {
    AMBIGUOUS_MARKERS.contains(&word)
}

pub fn is_high_signal_marker(word: &str) -> bool {
    HIGH_SIGNAL_MARKERS.contains(word)
}

pub static ENGLISH_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
        "can", "need", "dare", "ought", "used", "to", "of", "in", "for", "on", "with", "at", "by",
        "from", "as", "into", "through", "during", "before", "after", "above", "below",
        "between", "under", "again", "further", "then", "once", "here", "there", "when", "where",
        "why", "how", "all", "each", "few", "more", "most", "other", "some", "such", "no", "nor",
        "not", "only", "own", "same", "so", "than", "too", "very", "just", "also", "now", "and",
        "but", "if", "or", "because", "until", "while", "this", "that", "these", "those", "what",
        "which", "who", "whom", "whose", "i", "you", "he", "she", "it", "we", "they", "me", "him",
        "her", "us", "them", "my", "your", "his", "its", "our", "their", "myself", "yourself",
        "himself", "herself", "itself", "ourselves", "themselves", "am", "about", "get", "got",
        "go", "going", "went", "come", "came", "make", "made", "take", "took", "see", "saw",
        "know", "knew", "think", "thought", "want", "like", "look", "use", "find", "give",
        "tell", "say", "said", "video", "watch", "watched", "new", "first", "last", "best", "top",
        "full", "part", "episode", "ep", "vs", "ft", "feat", "official", "exclusive", "shorts",
        "short", "movie", "clip", "scene", "trailer", "teaser",
    ]
    .into_iter()
    .collect()
});

pub static HINDI_STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "का", "के", "की", "है", "हैं", "था", "थे", "थी", "में", "से", "को", "पर", "ने", "और", "या",
        "एक", "यह", "वह", "इस", "उस", "जो", "तो", "भी", "कर", "हो", "ही", "अब", "जब", "तक",
        "बहुत", "कुछ", "सब", "कोई", "किसी", "अपने", "उनके", "इनके", "वाले", "वाली", "वाला",
    ]
    .into_iter()
    .collect()
});

/// Generic nouns that carry no topical signal on their own.
pub static WEAK_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "man", "men", "woman", "women", "person", "people", "guy", "guys", "leader", "leaders",
        "member", "members", "player", "players", "team", "teams", "group", "groups", "family",
        "families", "death", "life", "time", "day", "days", "night", "nights", "year", "years",
        "month", "months", "week", "weeks", "thing", "things", "stuff", "way", "ways", "world",
        "place", "places", "area", "areas", "country", "countries", "city", "cities", "town",
        "towns", "home", "house", "end", "start", "beginning", "part", "parts", "side", "sides",
        "point", "points", "case", "cases", "fact", "facts", "news", "update", "updates", "story",
        "stories", "channel", "channels", "subscriber", "subscribers", "view", "views", "like",
        "likes", "comment", "comments", "reaction", "reactions", "highlight", "highlights",
        "moment", "moments", "episode", "episodes",
    ]
    .into_iter()
    .collect()
});

pub fn is_english_stopword(word: &str) -> bool {
    ENGLISH_STOPWORDS.contains(word)
}

pub fn is_hindi_stopword(word: &str) -> bool {
    HINDI_STOPWORDS.contains(word)
}

pub fn is_weak_noun(word: &str) -> bool {
    WEAK_NOUNS.contains(word)
}
