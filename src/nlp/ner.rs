//! Gazetteer-backed entity recognizer with numeric span patterns.

use std::{collections::HashMap, path::Path};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};

use crate::nlp::pipeline::{EntityLabel, NlpError, Span, Token};

/// Trait for NER implementations working over pre-tokenized text.
pub trait Ner: Send + Sync {
    fn extract(&self, text: &str, tokens: &[Token]) -> Vec<Span>;
}

const ENGLISH_SEEDS: &[(EntityLabel, &[&str])] = &[
    (
        EntityLabel::Gpe,
        &[
            "india", "pakistan", "bangladesh", "nepal", "sri lanka", "china", "japan", "korea",
            "south korea", "north korea", "russia", "ukraine", "israel", "iran", "iraq", "kuwait",
            "qatar", "dubai", "abu dhabi", "uae", "saudi arabia", "usa", "united states",
            "america", "canada", "mexico", "brazil", "argentina", "uk", "england", "london",
            "france", "paris", "germany", "italy", "spain", "australia", "new zealand", "mumbai",
            "delhi", "new delhi", "bangalore", "bengaluru", "kolkata", "chennai", "hyderabad",
            "pune", "goa", "kerala", "punjab", "kashmir", "new york", "los angeles", "tokyo",
            "singapore", "africa", "egypt", "turkey",
        ],
    ),
    (
        EntityLabel::Loc,
        &["himalayas", "mount everest", "everest", "sahara", "europe", "asia", "middle east", "antarctica", "pacific", "atlantic"],
    ),
    (
        EntityLabel::Norp,
        &[
            "indian", "indians", "american", "americans", "chinese", "british", "pakistani",
            "russian", "japanese", "hindu", "muslim", "christian", "sikh", "jewish", "punjabi",
            "bengali", "tamil", "marathi",
        ],
    ),
    (
        EntityLabel::Org,
        &[
            "emirates", "air india", "indigo", "bcci", "icc", "fifa", "uefa", "nasa", "isro",
            "google", "apple", "microsoft", "tesla", "spacex", "openai", "youtube", "netflix",
            "amazon", "meta", "facebook", "instagram", "samsung", "bbc", "cnn", "ndtv", "nba",
            "nfl", "nascar", "bjp", "congress", "real madrid", "barcelona", "manchester united",
            "chennai super kings", "mumbai indians", "tata", "reliance", "infosys",
        ],
    ),
    (
        EntityLabel::Person,
        &[
            "virat kohli", "ms dhoni", "rohit sharma", "sachin tendulkar", "narendra modi",
            "rahul gandhi", "elon musk", "greg biffle", "dale earnhardt", "lionel messi",
            "cristiano ronaldo", "taylor swift", "shah rukh khan", "salman khan",
            "amitabh bachchan", "donald trump", "joe biden", "mark zuckerberg", "sundar pichai",
            "bill gates", "steve jobs", "mrbeast",
        ],
    ),
    (
        EntityLabel::Event,
        &[
            "world cup", "t20 world cup", "ipl", "olympics", "super bowl", "daytona 500",
            "champions trophy", "asia cup", "diwali", "holi", "eid", "christmas", "navratri",
            "ganesh chaturthi", "wwdc", "ces",
        ],
    ),
    (
        EntityLabel::Fac,
        &["taj mahal", "eiffel tower", "burj khalifa", "red fort", "india gate", "statue of liberty", "gateway of india", "wankhede stadium"],
    ),
    (
        EntityLabel::Product,
        &["iphone", "android", "playstation", "xbox", "chatgpt", "windows", "macbook", "ipad", "minecraft", "gta"],
    ),
    (
        EntityLabel::WorkOfArt,
        &["ramayana", "mahabharata", "bhagavad gita", "game of thrones", "harry potter", "breaking bad", "bigg boss", "shark tank"],
    ),
    (EntityLabel::Language, &["hindi", "english", "urdu", "sanskrit"]),
];

const HINDI_SEEDS: &[(EntityLabel, &[&str])] = &[
    (
        EntityLabel::Gpe,
        &["भारत", "दिल्ली", "नई दिल्ली", "मुंबई", "पाकिस्तान", "चीन", "अमेरिका", "रूस", "कश्मीर", "बिहार", "उत्तर प्रदेश", "राजस्थान", "पंजाब", "लखनऊ", "कोलकाता"],
    ),
    (EntityLabel::Loc, &["हिमालय", "गंगा", "यमुना"]),
    (EntityLabel::Norp, &["भारतीय", "हिंदू", "मुस्लिम", "सिख"]),
    (EntityLabel::Org, &["इसरो", "बीसीसीआई", "भाजपा", "कांग्रेस", "सेना"]),
    (
        EntityLabel::Person,
        &["नरेंद्र मोदी", "मोदी", "राहुल गांधी", "विराट कोहली", "सचिन तेंदुलकर", "महात्मा गांधी", "अमिताभ बच्चन", "योगी आदित्यनाथ"],
    ),
    (EntityLabel::Event, &["दिवाली", "होली", "ईद", "नवरात्रि", "विश्व कप", "आईपीएल"]),
    (EntityLabel::Fac, &["ताज महल", "लाल किला", "इंडिया गेट", "राम मंदिर"]),
    (EntityLabel::WorkOfArt, &["रामायण", "महाभारत", "भगवद गीता"]),
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec",
];
const ORDINAL_WORDS: &[&str] = &["first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth"];
const UNITS: &[&str] = &["kg", "km", "g", "gb", "mb", "tb", "kmph", "mph", "cm", "mm", "m", "ml", "litre", "liter", "lakh", "crore", "million", "billion", "minutes", "hours", "mins", "hrs"];
const CURRENCY: &[&str] = &["$", "₹", "€", "£", "rs", "inr", "usd", "rupees", "dollars"];

static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(st|nd|rd|th)$").expect("valid regex"));
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(19|20)\d{2}$").expect("valid regex"));
static CLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(am|pm)$").expect("valid regex"));

/// Phrase dictionary keyed by lowercase token sequence.
#[derive(Debug, Clone, Default)]
pub struct GazetteerNer {
    phrases: HashMap<Vec<String>, EntityLabel>,
    max_tokens: usize,
}

impl GazetteerNer {
    pub fn english() -> Self {
        Self::from_seeds(ENGLISH_SEEDS)
    }

    pub fn hindi() -> Self {
        Self::from_seeds(HINDI_SEEDS)
    }

    pub fn from_seeds(seeds: &[(EntityLabel, &[&str])]) -> Self {
        let mut ner = Self::default();
        for (label, phrases) in seeds {
            for phrase in *phrases {
                ner.insert(phrase, *label);
            }
        }
        ner
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Add or relabel a phrase; later insertions win.
    pub fn insert(&mut self, phrase: &str, label: EntityLabel) {
        let key = phrase_key(phrase);
        if key.is_empty() {
            return;
        }
        self.max_tokens = self.max_tokens.max(key.len());
        self.phrases.insert(key, label);
    }

    /// Merge a JSON gazetteer of the form `{"PERSON": ["greg biffle", ...], ...}`.
    pub fn merge_file(&mut self, path: &Path) -> Result<usize, NlpError> {
        let raw = std::fs::read_to_string(path).map_err(|source| NlpError::GazetteerIo {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed: IndexMap<String, Vec<String>> =
            serde_json::from_str(&raw).map_err(|source| NlpError::GazetteerFormat {
                path: path.to_path_buf(),
                source,
            })?;
        let mut added = 0;
        for (label, phrases) in parsed {
            let Ok(label) = label.parse::<EntityLabel>() else {
                debug!(%label, path = %path.display(), "skipping unknown gazetteer label");
                continue;
            };
            for phrase in phrases {
                self.insert(&phrase, label);
                added += 1;
            }
        }
        info!(path = %path.display(), added, "merged gazetteer file");
        Ok(added)
    }

    fn lookup(&self, words: &[Token]) -> Option<EntityLabel> {
        let key: Vec<String> = words.iter().map(|t| t.text.to_lowercase()).collect();
        self.phrases.get(&key).copied()
    }

    /// Greedy longest match, left to right, never crossing punctuation.
    fn phrase_spans(&self, text: &str, tokens: &[Token]) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut idx = 0;
        while idx < tokens.len() {
            let longest = self.max_tokens.min(tokens.len() - idx);
            let found = (1..=longest).rev().find_map(|width| {
                let window = &tokens[idx..idx + width];
                if window.iter().any(|t| !t.text.chars().any(char::is_alphanumeric)) {
                    return None;
                }
                self.lookup(window).map(|label| (width, label))
            });
            match found {
                Some((width, label)) => {
                    let (start, end) = (tokens[idx].start, tokens[idx + width - 1].end);
                    spans.push(span(text, start, end, label, 0.8));
                    idx += width;
                }
                None => idx += 1,
            }
        }
        spans
    }
}

impl Ner for GazetteerNer {
    fn extract(&self, text: &str, tokens: &[Token]) -> Vec<Span> {
        let mut spans = self.phrase_spans(text, tokens);
        for numeric in numeric_spans(text, tokens) {
            let overlaps = spans
                .iter()
                .any(|s| numeric.start < s.end && s.start < numeric.end);
            if !overlaps {
                spans.push(numeric);
            }
        }
        spans.sort_by_key(|s| s.start);
        spans
    }
}

fn phrase_key(phrase: &str) -> Vec<String> {
    crate::nlp::tagger::tokenize(phrase)
        .into_iter()
        .map(|t| t.text.to_lowercase())
        .collect()
}

fn span(text: &str, start: usize, end: usize, label: EntityLabel, score: f64) -> Span {
    Span {
        start,
        end,
        label,
        text: text[start..end].to_string(),
        score,
    }
}

fn is_digits(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|ch| ch.is_numeric())
}

/// Dates, times, ordinals, money and plain numbers.
fn numeric_spans(text: &str, tokens: &[Token]) -> Vec<Span> {
    let mut spans = Vec::new();
    let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let mut idx = 0;
    while idx < tokens.len() {
        let word = lower[idx].as_str();
        let next = lower.get(idx + 1).map(String::as_str);
        let (width, label) = if CURRENCY.contains(&word) && next.map(is_digits).unwrap_or(false) {
            (2, EntityLabel::Money)
        } else if MONTHS.contains(&word) && word.len() > 3 {
            (1, EntityLabel::Date)
        } else if ORDINAL.is_match(word) || ORDINAL_WORDS.contains(&word) {
            (1, EntityLabel::Ordinal)
        } else if is_digits(word) {
            match next {
                Some("%") => (2, EntityLabel::Percent),
                Some(n) if CLOCK.is_match(n) => (2, EntityLabel::Time),
                Some(n) if UNITS.contains(&n) => (2, EntityLabel::Quantity),
                Some(n) if MONTHS.contains(&n) => (2, EntityLabel::Date),
                _ if YEAR.is_match(word) => (1, EntityLabel::Date),
                _ => (1, EntityLabel::Cardinal),
            }
        } else {
            (0, EntityLabel::Cardinal)
        };
        if width == 0 {
            idx += 1;
            continue;
        }
        let end = tokens[idx + width - 1].end;
        spans.push(span(text, tokens[idx].start, end, label, 0.6));
        idx += width;
    }
    spans
}
