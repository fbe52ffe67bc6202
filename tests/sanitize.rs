use takeout_insights::nlp::{
    extract_hashtags,
    lexicon::ENGLISH_STOPWORDS,
    sanitize::{accept_topic, hinglish_text, normalize_unicode, remove_devanagari, remove_stopwords, sanitize_topic},
};

#[test]
fn topic_artifacts_are_cleaned() {
    assert_eq!(sanitize_topic("city.#history"), "city");
    assert_eq!(sanitize_topic("#emirates #"), "emirates");
    assert_eq!(sanitize_topic("world—kuwait"), "world kuwait");
    assert_eq!(sanitize_topic("  (taj   mahal)! "), "taj mahal");
    assert_eq!(sanitize_topic("semi--final"), "semi final");
    assert_eq!(sanitize_topic(""), "");
}

#[test]
fn accepted_topics_are_folded_and_at_least_two_chars() {
    assert_eq!(accept_topic("Greg Biffle,"), Some("greg biffle".to_string()));
    assert_eq!(accept_topic("#x"), None);
    assert_eq!(accept_topic("..."), None);
}

#[test]
fn unicode_normalization_strips_invisibles() {
    assert_eq!(normalize_unicode("a\u{200B}b  c\u{FEFF}"), "ab c");
    assert_eq!(normalize_unicode("cafe\u{0301}"), "café");
    assert_eq!(normalize_unicode("\u{202A}rtl\u{202C}"), "rtl");
}

#[test]
fn devanagari_runs_become_spaces() {
    assert_eq!(remove_devanagari("भारत vs pakistan"), " vs pakistan");
    assert_eq!(remove_devanagari("plain"), "plain");
}

#[test]
fn stopwords_are_removed_case_insensitively() {
    assert_eq!(
        remove_stopwords("The Story OF my Life", &ENGLISH_STOPWORDS),
        "Story Life"
    );
}

#[test]
fn hinglish_text_keeps_latin_content_words() {
    assert_eq!(hinglish_text("भारत vs pakistan match | हिंदी"), "pakistan match");
    assert_eq!(
        hinglish_text("virat kohli ka best catch kya baat hai"),
        "virat kohli ka catch kya baat hai"
    );
    assert_eq!(hinglish_text("सिर्फ हिंदी"), "");
}

#[test]
fn hashtags_are_ordered_deduped_and_lowercased() {
    assert_eq!(
        extract_hashtags("Cabin crew #travel #cabincrew #emirates #india"),
        vec!["travel", "cabincrew", "emirates", "india"]
    );
    assert_eq!(extract_hashtags("#India #india #a #IPL2024"), vec!["india", "ipl2024"]);
    assert!(extract_hashtags("no tags here").is_empty());
    assert_eq!(extract_hashtags("भारत बनाम पाकिस्तान #क्रिकेट"), vec!["क्रिकेट"]);
}
