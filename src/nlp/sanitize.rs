//! Text cleanup ahead of and after NLP analysis.
//!
//! Every function here is total: malformed input degrades to an empty string.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::nlp::{lexicon, script};

static INVISIBLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{200B}-\u{200F}\u{202A}-\u{202E}\u{FEFF}]").expect("valid regex"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static PIPES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|+").expect("valid regex"));
static DEVANAGARI_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{0900}-\u{097F}]+").expect("valid regex"));
// a hashtag glued onto the preceding word, optionally through a period
static GLUED_HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<head>[^\s#])\.?#\w*").expect("valid regex"));
static DASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"[—–\-]+").expect("valid regex"));

const TOPIC_EDGE_CHARS: &[char] = &[
    ' ', '#', '@', '|', '[', ']', '(', ')', '{', '}', '.', ',', '!', '?', ':', ';', '"', '\'',
    '-', '_',
];

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// NFC-normalise, drop zero-width and bidi control characters, collapse whitespace.
pub fn normalize_unicode(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let composed: String = text.nfc().collect();
    collapse_whitespace(&INVISIBLES.replace_all(&composed, ""))
}

/// Replace every run of Devanagari code points with a single space.
pub fn remove_devanagari(text: &str) -> String {
    if !script::has_devanagari(text) {
        return text.to_string();
    }
    DEVANAGARI_RUN.replace_all(text, " ").into_owned()
}

/// Drop whitespace-separated tokens whose lowercase form is in `stopwords`.
pub fn remove_stopwords(text: &str, stopwords: &HashSet<&'static str>) -> String {
    text.split_whitespace()
        .filter(|word| !stopwords.contains(word.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the English-pipeline input for Hinglish text (`text_v1`).
pub fn hinglish_text(text: &str) -> String {
    let latin = remove_devanagari(text);
    let normalized = normalize_unicode(&latin);
    let content = remove_stopwords(&normalized, &lexicon::ENGLISH_STOPWORDS);
    collapse_whitespace(&PIPES.replace_all(&content, " "))
}

/// Clean a candidate entity or noun span.
///
/// `"city.#history"` becomes `"city"`, `"#emirates #"` becomes `"emirates"`,
/// `"world—kuwait"` becomes `"world kuwait"`.
pub fn sanitize_topic(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut cleaned = text.to_string();
    // each pass removes at least one '#', so this terminates
    while GLUED_HASHTAG.is_match(&cleaned) {
        cleaned = GLUED_HASHTAG.replace_all(&cleaned, "$head").into_owned();
    }
    let cleaned = cleaned.replace('#', " ");
    let cleaned = DASHES.replace_all(&cleaned, " ");
    collapse_whitespace(cleaned.trim_matches(TOPIC_EDGE_CHARS))
}

/// Sanitize and case-fold a topic; `None` when fewer than two characters survive.
pub fn accept_topic(text: &str) -> Option<String> {
    let topic = sanitize_topic(text).to_lowercase();
    (topic.chars().count() >= 2).then_some(topic)
}
