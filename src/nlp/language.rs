//! English / Hindi / Hinglish classification from script presence and marker words.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::nlp::{lexicon, script};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageType {
    English,
    Hinglish,
    Hindi,
    #[serde(other)]
    Unknown,
}

impl LanguageType {
    pub const ALL: [LanguageType; 4] = [Self::English, Self::Hindi, Self::Hinglish, Self::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hinglish => "hinglish",
            Self::Hindi => "hindi",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LanguageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "english" => Ok(Self::English),
            "hinglish" => Ok(Self::Hinglish),
            "hindi" => Ok(Self::Hindi),
            "unknown" | "" => Ok(Self::Unknown),
            other => Err(format!("unsupported language type `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Language decision; type and confidence always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub language_type: LanguageType,
    pub language_confidence: Confidence,
}

impl Classification {
    pub const fn new(language_type: LanguageType, language_confidence: Confidence) -> Self {
        Self {
            language_type,
            language_confidence,
        }
    }

    pub const fn unknown() -> Self {
        Self::new(LanguageType::Unknown, Confidence::Low)
    }
}

/// Classification plus the signals that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationDetails {
    #[serde(flatten)]
    pub classification: Classification,
    pub has_devanagari: bool,
    pub has_latin: bool,
    pub hinglish_marker_count: usize,
    pub high_signal_marker_count: usize,
    pub total_words: usize,
}

/// Lowercase, keep ASCII letters and whitespace, split into words.
pub fn tokenize_for_detection(text: &str) -> Vec<String> {
    let letters: String = text
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_whitespace())
        .collect();
    letters.split_whitespace().map(str::to_string).collect()
}

/// Classify `text`; the first matching rule wins.
pub fn classify_language(text: &str) -> Classification {
    let text = text.trim();
    if text.chars().count() < 3 {
        // a lone ambiguous marker reads as English at any length
        return if lexicon::is_ambiguous_marker(&text.to_lowercase()) {
            Classification::new(LanguageType::English, Confidence::High)
        } else {
            Classification::unknown()
        };
    }

    let scripts = script::detect_scripts(text);
    match (scripts.has_devanagari, scripts.has_latin) {
        (false, false) => Classification::new(LanguageType::English, Confidence::High),
        (true, false) => Classification::new(LanguageType::Hindi, Confidence::High),
        (true, true) => Classification::new(LanguageType::Hinglish, Confidence::High),
        (false, true) => classify_latin(&tokenize_for_detection(text)),
    }
}

fn classify_latin(words: &[String]) -> Classification {
    if words.is_empty() {
        return Classification::unknown();
    }
    let (hits, high_signal) = count_markers(words);
    match hits {
        0 => Classification::new(LanguageType::English, Confidence::High),
        1 if high_signal >= 1 => Classification::new(LanguageType::Hinglish, Confidence::Medium),
        // a lone ambiguous marker ("the", "me", "hi") is ordinary English
        1 => Classification::new(LanguageType::English, Confidence::High),
        _ => Classification::new(LanguageType::Hinglish, Confidence::High),
    }
}

fn count_markers(words: &[String]) -> (usize, usize) {
    words.iter().fold((0, 0), |(hits, high), word| {
        (
            hits + usize::from(lexicon::is_marker(word)),
            high + usize::from(lexicon::is_high_signal_marker(word)),
        )
    })
}

/// Same decision as [`classify_language`] with the intermediate signals attached.
pub fn classify_with_details(text: &str) -> ClassificationDetails {
    let scripts = script::detect_scripts(text);
    let words = tokenize_for_detection(text);
    let (hinglish_marker_count, high_signal_marker_count) = count_markers(&words);
    ClassificationDetails {
        classification: classify_language(text),
        has_devanagari: scripts.has_devanagari,
        has_latin: scripts.has_latin,
        hinglish_marker_count,
        high_signal_marker_count,
        total_words: words.len(),
    }
}
