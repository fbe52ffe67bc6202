//! Tokenization and rule-based part-of-speech tagging.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::nlp::{
    lexicon,
    pipeline::{Pos, Span, Token},
    script,
};

/// Word boundaries before tagging; `pos` is a placeholder.
///
/// Possessive `'s` and negating `n't` are split off as their own tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let next_is_word = chars.peek().map(|&(_, next)| is_word_char(next)).unwrap_or(false);
        // keep contractions like "don't" together until the clitic split
        let joins_word = is_apostrophe(ch) && word_start.is_some() && next_is_word;
        if is_word_char(ch) || joins_word {
            word_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut tokens, text, start, idx);
        }
        if !ch.is_whitespace() {
            tokens.push(placeholder(text, idx, idx + ch.len_utf8()));
        }
    }
    if let Some(start) = word_start {
        push_word(&mut tokens, text, start, text.len());
    }
    tokens
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

const CLITICS: &[&str] = &["'s", "\u{2019}s", "n't", "n\u{2019}t"];

fn push_word(tokens: &mut Vec<Token>, text: &str, start: usize, end: usize) {
    let word = &text[start..end];
    let split = CLITICS.iter().find_map(|clitic| {
        let at = word.len().checked_sub(clitic.len()).filter(|&at| at > 0)?;
        (word.is_char_boundary(at) && word[at..].eq_ignore_ascii_case(clitic)).then_some(start + at)
    });
    match split {
        Some(at) => {
            tokens.push(placeholder(text, start, at));
            tokens.push(placeholder(text, at, end));
        }
        None => tokens.push(placeholder(text, start, end)),
    }
}

fn placeholder(text: &str, start: usize, end: usize) -> Token {
    Token {
        start,
        end,
        text: text[start..end].to_string(),
        pos: Pos::X,
    }
}

fn is_word_char(ch: char) -> bool {
    // danda and double danda are sentence punctuation
    if ch == '\u{0964}' || ch == '\u{0965}' {
        return false;
    }
    ch.is_alphanumeric() || ch == '_' || script::is_devanagari(ch)
}

fn is_number(word: &str) -> bool {
    let digits = word.replace([',', '.'], "");
    !digits.is_empty() && digits.chars().all(|ch| ch.is_numeric())
}

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static EN_DET: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&["a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "no", "another", "all", "both"])
});
static EN_PRON: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
        "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "myself", "yourself",
        "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "whose", "what",
        "which", "someone", "something", "everyone", "everything", "nothing", "anyone",
    ])
});
static EN_ADP: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "of", "in", "on", "at", "by", "for", "with", "from", "to", "into", "onto", "about", "above",
        "below", "between", "under", "over", "through", "during", "before", "after", "against",
        "among", "across", "along", "around", "near", "without", "within", "via", "per", "off", "up",
        "down", "out", "inside", "outside", "behind", "beyond", "towards", "vs",
    ])
});
static EN_CCONJ: Lazy<HashSet<&str>> = Lazy::new(|| set(&["and", "or", "but", "nor", "yet", "plus"]));
static EN_SCONJ: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&["if", "because", "while", "although", "though", "unless", "until", "since", "whether", "than", "when", "where", "why", "how", "so"])
});
static EN_AUX: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "do", "does",
        "did", "will", "would", "shall", "should", "can", "could", "may", "might", "must", "ca",
        "wo", "i'm", "you're", "we're", "they're", "i've", "i'll",
    ])
});
static EN_PART: Lazy<HashSet<&str>> =
    Lazy::new(|| set(&["not", "n't", "'s", "n\u{2019}t", "\u{2019}s"]));
static EN_ADV: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "very", "too", "also", "just", "only", "even", "still", "already", "always", "never",
        "often", "now", "then", "here", "there", "again", "soon", "quite", "almost", "ever",
        "once", "today", "tonight", "tomorrow", "yesterday", "back", "away", "together", "more",
        "most", "less", "least", "ago",
    ])
});
static EN_ADJ: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "new", "old", "big", "small", "good", "bad", "great", "best", "better", "worst", "top",
        "full", "live", "latest", "funny", "amazing", "beautiful", "real", "final", "official",
        "free", "easy", "hard", "high", "low", "long", "short", "young", "first", "last", "next",
        "huge", "tiny", "crazy", "epic", "hot", "cold", "simple", "quick", "fast", "slow", "true",
        "secret", "ultimate", "complete", "major", "little", "early", "late", "special", "rare",
        "strange", "weird", "scary", "cute", "perfect", "famous", "same", "other", "own", "such",
        "few", "many", "much", "several", "pure", "exclusive", "daily", "weekly", "annual", "local",
        "global", "public", "private", "human", "cheap", "expensive", "insane", "unbelievable",
    ])
});
static EN_VERB: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "get", "got", "go", "goes", "went", "gone", "come", "comes", "came", "make", "makes", "made",
        "take", "takes", "took", "taken", "see", "sees", "saw", "seen", "know", "knows", "knew",
        "known", "think", "thinks", "thought", "want", "wants", "like", "likes", "look", "looks",
        "use", "uses", "find", "finds", "found", "give", "gives", "gave", "given", "tell", "tells",
        "told", "say", "says", "said", "watch", "watches", "play", "plays", "win", "wins", "won",
        "lose", "loses", "lost", "beat", "beats", "react", "reacts", "explain", "explains",
        "learn", "learns", "cook", "cooks", "build", "builds", "built", "try", "tries", "tried",
        "buy", "bought", "sell", "sold", "eat", "ate", "eaten", "run", "runs", "ran", "meet",
        "meets", "met", "become", "becomes", "became", "leave", "left", "keep", "kept", "let",
        "put", "show", "shows", "showed", "shown", "ask", "asks", "asked", "try", "visit",
        "visits", "survive", "survives", "destroy", "destroys", "reveal", "reveals", "returns",
        "stop", "stops", "need", "needs", "must", "feel", "feels", "felt", "happen", "happens",
        "happened", "break", "breaks", "broke", "broken", "fix", "fixes", "open", "opens",
    ])
});
/// Words ending in -ing/-ed that are nouns or adjectives.
static EN_SUFFIX_EXCEPTIONS: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "morning", "evening", "wedding", "building", "meeting", "thing", "king", "ring", "spring",
        "string", "ceiling", "painting", "feeling", "ending", "wing", "sibling", "pudding",
        "clothing", "nothing", "something", "everything", "anything", "boxing", "swimming",
        "marketing", "gaming", "trading", "coding", "programming", "cooking", "training",
        "shopping", "bed", "red", "shed", "speed", "seed", "need", "feed", "bread", "hundred",
        "sled", "weed", "breed", "greed",
    ])
});

static HI_ADP: Lazy<HashSet<&str>> =
    Lazy::new(|| set(&["का", "के", "की", "में", "से", "को", "पर", "ने", "तक", "लिए", "बाद", "साथ"]));
static HI_AUX: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&["है", "हैं", "था", "थे", "थी", "हो", "गया", "गई", "गए", "रहा", "रही", "रहे", "होगा", "होगी", "हुआ", "हुई", "सकता", "सकते"])
});
static HI_PRON: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&["यह", "वह", "मैं", "हम", "तुम", "आप", "वो", "ये", "इस", "उस", "उन", "इन", "जो", "कौन", "क्या", "अपने", "उनके", "इनके", "मेरा", "मेरी", "हमारा"])
});
static HI_CCONJ: Lazy<HashSet<&str>> = Lazy::new(|| set(&["और", "या", "लेकिन", "मगर", "किंतु", "कि"]));
static HI_PART: Lazy<HashSet<&str>> = Lazy::new(|| set(&["नहीं", "भी", "ही", "तो", "न", "मत"]));
static HI_DET: Lazy<HashSet<&str>> = Lazy::new(|| set(&["एक", "कुछ", "सब", "कोई", "किसी", "हर", "सभी"]));
static HI_ADV: Lazy<HashSet<&str>> =
    Lazy::new(|| set(&["बहुत", "अब", "जब", "यहाँ", "वहाँ", "आज", "कल", "फिर", "कभी", "जल्दी"]));
static HI_VERB: Lazy<HashSet<&str>> = Lazy::new(|| {
    set(&[
        "करना", "करें", "करो", "कर", "किया", "करते", "करता", "देखें", "देखो", "देखिए", "जाने",
        "जाना", "आया", "आए", "कहा", "बताया", "बताएं", "जानिए", "मिला", "मिली", "बना", "बनाया",
    ])
});
static HI_VALUE_WORDS: Lazy<HashSet<&str>> = Lazy::new(|| set(&["वाले", "वाली", "वाला"]));

/// Which closed-class vocabulary a tagger uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaggerLanguage {
    English,
    Hindi,
}

#[derive(Debug, Clone)]
pub struct RuleTagger {
    language: TaggerLanguage,
}

impl RuleTagger {
    pub fn new(language: TaggerLanguage) -> Self {
        Self { language }
    }

    /// Assign a part of speech to every token; tokens inside an entity become PROPN.
    pub fn tag(&self, tokens: &mut [Token], entities: &[Span]) {
        for token in tokens.iter_mut() {
            let closed = match self.language {
                TaggerLanguage::English => english_pos(&token.text),
                TaggerLanguage::Hindi => hindi_pos(&token.text),
            };
            let in_entity = entities
                .iter()
                .any(|span| span.start <= token.start && token.end <= span.end);
            token.pos = match closed {
                Some(pos) => pos,
                None if in_entity => Pos::Propn,
                None => self.open_class(&token.text),
            };
        }
    }

    fn open_class(&self, word: &str) -> Pos {
        match self.language {
            TaggerLanguage::English => english_open_class(&word.to_lowercase()),
            TaggerLanguage::Hindi => Pos::Noun,
        }
    }
}

fn shared_pos(word: &str) -> Option<Pos> {
    let mut chars = word.chars();
    let first = chars.next()?;
    if chars.next().is_none() && !is_word_char(first) {
        return Some(match first {
            '#' | '@' | '$' | '%' | '&' | '+' | '=' | '₹' | '€' | '£' => Pos::Sym,
            _ => Pos::Punct,
        });
    }
    is_number(word).then_some(Pos::Num)
}

fn english_pos(word: &str) -> Option<Pos> {
    if let Some(pos) = shared_pos(word) {
        return Some(pos);
    }
    let lower = word.to_lowercase();
    let w = lower.as_str();
    let tables: [(&Lazy<HashSet<&str>>, Pos); 9] = [
        (&EN_AUX, Pos::Aux),
        (&EN_DET, Pos::Det),
        (&EN_PRON, Pos::Pron),
        (&EN_ADP, Pos::Adp),
        (&EN_CCONJ, Pos::Cconj),
        (&EN_SCONJ, Pos::Sconj),
        (&EN_PART, Pos::Part),
        (&EN_ADV, Pos::Adv),
        (&EN_ADJ, Pos::Adj),
    ];
    if let Some((_, pos)) = tables.iter().find(|(table, _)| table.contains(w)) {
        return Some(*pos);
    }
    if EN_VERB.contains(w) {
        return Some(Pos::Verb);
    }
    // romanized Hindi function words inside Hinglish titles
    if lexicon::is_marker(w) {
        return Some(Pos::X);
    }
    None
}

fn english_open_class(word: &str) -> Pos {
    let len = word.chars().count();
    if EN_SUFFIX_EXCEPTIONS.contains(word) {
        return Pos::Noun;
    }
    if len > 4 && word.ends_with("ly") {
        return Pos::Adv;
    }
    if (len > 5 && word.ends_with("ing")) || (len > 4 && word.ends_with("ed")) {
        return Pos::Verb;
    }
    const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "less", "able", "ible", "ical", "ish"];
    if len > 5 && ADJ_SUFFIXES.iter().any(|suffix| word.ends_with(suffix)) {
        return Pos::Adj;
    }
    Pos::Noun
}

fn hindi_pos(word: &str) -> Option<Pos> {
    if let Some(pos) = shared_pos(word) {
        return Some(pos);
    }
    let tables: [(&Lazy<HashSet<&str>>, Pos); 9] = [
        (&HI_ADP, Pos::Adp),
        (&HI_AUX, Pos::Aux),
        (&HI_PRON, Pos::Pron),
        (&HI_CCONJ, Pos::Cconj),
        (&HI_PART, Pos::Part),
        (&HI_DET, Pos::Det),
        (&HI_ADV, Pos::Adv),
        (&HI_VERB, Pos::Verb),
        (&HI_VALUE_WORDS, Pos::Adp),
    ];
    tables
        .iter()
        .find(|(table, _)| table.contains(word))
        .map(|(_, pos)| *pos)
}
