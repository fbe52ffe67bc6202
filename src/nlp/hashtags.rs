//! `#tag` extraction.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("valid regex"));

/// Lowercased hashtag values in first-seen order, without the `#`.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let mut tags = IndexSet::new();
    for capture in HASHTAG.captures_iter(text) {
        let tag = capture[1].to_lowercase();
        if tag.chars().count() >= 2 {
            tags.insert(tag);
        }
    }
    tags.into_iter().collect()
}
