use takeout_insights::{
    config::TopicSettings,
    nlp::{
        extract::{extract_english, extract_english_batch, extract_hindi, ExtractionStatus},
        models::RuleBasedPipeline,
        pipeline::{EntityLabel, NlpError, NlpPipeline, Pos},
        sanitize::hinglish_text,
    },
};

fn english() -> RuleBasedPipeline {
    RuleBasedPipeline::english(&TopicSettings::default()).unwrap()
}

fn hindi() -> RuleBasedPipeline {
    RuleBasedPipeline::hindi(&TopicSettings::default()).unwrap()
}

fn model(pipeline: &RuleBasedPipeline) -> Option<&dyn NlpPipeline> {
    Some(pipeline)
}

#[test]
fn gazetteer_finds_people_and_events() {
    let pipeline = english();
    let out = extract_english(model(&pipeline), "greg biffle wins at daytona 500");
    assert_eq!(out.status, ExtractionStatus::Complete);
    assert_eq!(out.ner, vec!["greg biffle", "daytona 500"]);
    assert_eq!(out.nouns, vec!["greg", "biffle", "daytona"]);
}

#[test]
fn possessives_keep_the_entity_whole() {
    let pipeline = english();
    let out = extract_english(model(&pipeline), "greg biffle's nascar crash");
    assert_eq!(out.ner, vec!["greg biffle", "nascar"]);
    assert_eq!(out.nouns, vec!["greg", "biffle", "nascar", "crash"]);

    let doc = pipeline.analyze("Kohli\u{2019}s century isn't luck").unwrap();
    let parts: Vec<&str> = doc
        .tokens
        .iter()
        .filter(|t| t.pos == Pos::Part)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(parts, vec!["\u{2019}s", "n't"]);
}

#[test]
fn non_topical_labels_are_dropped() {
    let pipeline = english();
    let doc = pipeline.analyze("india vs pakistan 2024 highlights").unwrap();
    assert!(doc.entities.iter().any(|e| e.label == EntityLabel::Date));

    let out = extract_english(model(&pipeline), "india vs pakistan 2024 highlights");
    assert_eq!(out.ner, vec!["india", "pakistan"]);
    assert_eq!(out.nouns, vec!["india", "pakistan"]);
}

#[test]
fn weak_nouns_need_a_multi_word_entity() {
    let pipeline = english();
    let out = extract_english(model(&pipeline), "world cup final highlights");
    assert_eq!(out.ner, vec!["world cup"]);
    assert_eq!(out.nouns, vec!["world", "cup"]);

    let out = extract_english(model(&pipeline), "funny man explains the time machine");
    assert!(out.ner.is_empty());
    assert_eq!(out.nouns, vec!["machine"]);
}

#[test]
fn stopword_nouns_are_filtered() {
    let out = extract_english(model(&english()), "cricket video");
    assert_eq!(out.nouns, vec!["cricket"]);
}

#[test]
fn hinglish_runs_through_english_rules() {
    let text_v1 = hinglish_text("virat kohli ka best catch kya baat hai");
    let out = extract_english(model(&english()), &text_v1);
    assert_eq!(out.ner, vec!["virat kohli"]);
    assert_eq!(out.nouns, vec!["virat", "kohli", "catch", "baat"]);
}

#[test]
fn hindi_pipeline_tags_devanagari() {
    let pipeline = hindi();
    let doc = pipeline.analyze("विराट कोहली का शानदार शतक").unwrap();
    assert_eq!(doc.tokens.len(), 5);
    assert_eq!(doc.tokens[2].pos, Pos::Adp);

    let out = extract_hindi(model(&pipeline), "विराट कोहली का शानदार शतक");
    assert_eq!(out.ner, vec!["विराट कोहली"]);
    assert_eq!(out.nouns, vec!["विराट", "कोहली", "शानदार", "शतक"]);
}

#[test]
fn empty_and_missing_inputs_degrade() {
    let pipeline = english();
    assert_eq!(extract_english(model(&pipeline), "   ").status, ExtractionStatus::Skipped);
    assert_eq!(extract_english(None, "india").status, ExtractionStatus::ModelUnavailable);
    assert_eq!(extract_hindi(None, "भारत").status, ExtractionStatus::ModelUnavailable);
    assert_eq!(extract_hindi(None, "").status, ExtractionStatus::Skipped);
}

#[test]
fn batch_results_line_up_with_inputs() {
    let pipeline = english();
    let out = extract_english_batch(model(&pipeline), &["india", "", "nasa launch"], 2);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0].ner, vec!["india"]);
    assert_eq!(out[1].status, ExtractionStatus::Skipped);
    assert_eq!(out[2].ner, vec!["nasa"]);
}

#[test]
fn oversized_text_fails_only_that_text() {
    let settings = TopicSettings {
        max_text_chars: 10,
        ..TopicSettings::default()
    };
    let pipeline = RuleBasedPipeline::english(&settings).unwrap();
    assert!(matches!(
        pipeline.analyze("a rather long title indeed"),
        Err(NlpError::TextTooLong { max: 10, .. })
    ));
    let out = extract_english_batch(model(&pipeline), &["a rather long title indeed", "india"], 8);
    assert!(matches!(out[0].status, ExtractionStatus::Failed(_)));
    assert_eq!(out[1].ner, vec!["india"]);
}

#[test]
fn gazetteer_files_extend_the_seeds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extra.json");
    std::fs::write(&path, r#"{"PERSON": ["carl sagan"], "NOT_A_LABEL": ["ignored"]}"#).unwrap();
    let settings = TopicSettings {
        english_gazetteer: Some(path),
        ..TopicSettings::default()
    };
    let pipeline = RuleBasedPipeline::english(&settings).unwrap();
    assert_eq!(pipeline.gazetteer_size(), english().gazetteer_size() + 1);

    let out = extract_english(model(&pipeline), "carl sagan on cosmos");
    assert_eq!(out.ner, vec!["carl sagan"]);
}

#[test]
fn broken_gazetteer_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[not a map").unwrap();
    let settings = TopicSettings {
        english_gazetteer: Some(path),
        ..TopicSettings::default()
    };
    assert!(matches!(
        RuleBasedPipeline::english(&settings),
        Err(NlpError::GazetteerFormat { .. })
    ));
}
