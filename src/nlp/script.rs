//! Character-level script detection for Devanagari and Latin text.

/// Which scripts occur anywhere in a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptProfile {
    pub has_devanagari: bool,
    pub has_latin: bool,
}

impl ScriptProfile {
    pub fn is_mixed(&self) -> bool {
        self.has_devanagari && self.has_latin
    }

    pub fn has_letters(&self) -> bool {
        self.has_devanagari || self.has_latin
    }
}

/// U+0900..=U+097F.
pub fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

pub fn has_devanagari(text: &str) -> bool {
    text.chars().any(is_devanagari)
}

pub fn has_latin(text: &str) -> bool {
    text.chars().any(|ch| ch.is_ascii_alphabetic())
}

/// Scan `text` once, stopping as soon as both scripts have been seen.
pub fn detect_scripts(text: &str) -> ScriptProfile {
    let mut profile = ScriptProfile::default();
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            profile.has_latin = true;
        } else if is_devanagari(ch) {
            profile.has_devanagari = true;
        }
        if profile.is_mixed() {
            break;
        }
    }
    profile
}
