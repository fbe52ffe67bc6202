use proptest::prelude::*;
use takeout_insights::nlp::{
    extract_hashtags,
    language::{classify_language, Confidence, LanguageType},
    lexicon::HINGLISH_MARKERS,
    sanitize_topic,
};

proptest! {
    #[test]
    fn pure_devanagari_is_hindi(text in "[\u{0900}-\u{097F}]{3,24}") {
        let c = classify_language(&text);
        prop_assert_eq!(c.language_type, LanguageType::Hindi);
        prop_assert_eq!(c.language_confidence, Confidence::High);
    }

    #[test]
    fn mixed_scripts_are_hinglish(dev in "[\u{0900}-\u{097F}]{1,10}", lat in "[a-zA-Z]{1,10}") {
        let c = classify_language(&format!("{dev} {lat}"));
        prop_assert_eq!(c.language_type, LanguageType::Hinglish);
        prop_assert_eq!(c.language_confidence, Confidence::High);
    }

    #[test]
    fn two_markers_are_decisive(
        first in prop::sample::select(HINGLISH_MARKERS),
        second in prop::sample::select(HINGLISH_MARKERS),
        filler in "[a-z]{0,8}( [a-z]{1,8}){0,4}",
    ) {
        prop_assume!(first != second);
        let c = classify_language(&format!("{first} {filler} {second}"));
        prop_assert_eq!(c.language_type, LanguageType::Hinglish);
        prop_assert_eq!(c.language_confidence, Confidence::High);
    }

    #[test]
    fn sanitized_topics_carry_no_hash_or_padding(text in "[ a-z#.,\u{2014}\u{2013}-]{0,40}") {
        let topic = sanitize_topic(&text);
        prop_assert!(!topic.contains('#'));
        prop_assert_eq!(topic.trim(), topic.as_str());
    }

    #[test]
    fn hashtags_are_unique_lowercase_and_long_enough(text in "[a-zA-Z0-9_ #]{0,60}") {
        let tags = extract_hashtags(&text);
        let mut seen = std::collections::HashSet::new();
        for tag in &tags {
            prop_assert!(tag.chars().count() >= 2);
            prop_assert_eq!(tag.to_lowercase(), tag.clone());
            prop_assert!(seen.insert(tag.clone()));
        }
    }
}
