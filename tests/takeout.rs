use takeout_insights::{
    data::{
        event::{Engagement, EventType},
        takeout::{
            clean_text, parse_search_history, parse_subscriptions, parse_timestamp, parse_watch_history,
            preprocess_files, TakeoutFiles, SUBSCRIPTIONS, WATCH_HISTORY,
        },
    },
    nlp::language::LanguageType,
};

const WATCH: &str = r#"[
  {
    "header": "YouTube",
    "title": "Watched Cabin crew #travel #emirates",
    "titleUrl": "https://www.youtube.com/watch?v=abc",
    "subtitles": [{"name": "Crew Life", "url": "https://www.youtube.com/channel/UCx"}],
    "time": "2024-03-01T10:15:30Z",
    "products": ["YouTube"]
  },
  {
    "title": "Watched Buy this now",
    "details": [{"name": "From Google Ads"}],
    "time": "2024-03-01T10:16:00Z"
  },
  {
    "title": "Viewed a post",
    "titleUrl": "https://www.youtube.com/post/xyz",
    "time": "2024-03-01T10:17:00Z"
  },
  {
    "title": "Visited YouTube Music",
    "time": "2024-03-01T10:18:00Z"
  }
]"#;

#[test]
fn watch_history_drops_ads_and_posts() {
    let events = parse_watch_history(WATCH);
    assert_eq!(events.len(), 2);

    let watched = &events[0];
    assert_eq!(watched.event_type, EventType::Watch);
    assert_eq!(watched.engagement, Some(Engagement::Active));
    assert_eq!(watched.text_raw.as_deref(), Some("Cabin crew #travel #emirates"));
    assert_eq!(watched.text_clean.as_deref(), Some("cabin crew #travel #emirates"));
    assert_eq!(watched.timestamp_utc.as_deref(), Some("2024-03-01T10:15:30Z"));
    assert_eq!(watched.channel.as_deref(), Some("Crew Life"));
    assert_eq!(watched.channel_clean.as_deref(), Some("crew life"));
    assert_eq!(watched.language_type(), Some(LanguageType::English));

    assert_eq!(events[1].engagement, Some(Engagement::Passive));
}

#[test]
fn search_history_strips_prefix_and_classifies() {
    let events = parse_search_history(
        r#"[{"title": "Searched for kya hai life ka matlab", "time": "2024-01-05T08:00:00Z"}]"#,
    );
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventType::Search);
    assert_eq!(events[0].text_raw.as_deref(), Some("kya hai life ka matlab"));
    assert_eq!(events[0].text_clean.as_deref(), Some("kya hai life ka matlab"));
    assert_eq!(events[0].language_type(), Some(LanguageType::Hinglish));
    assert!(!events[0].is_eligible());
}

#[test]
fn malformed_history_yields_nothing() {
    assert!(parse_watch_history("not json").is_empty());
    assert!(parse_watch_history(r#"{"title": "Watched x"}"#).is_empty());
    assert!(parse_search_history("").is_empty());
}

#[test]
fn subscriptions_fall_back_to_channel_id() {
    let csv = "Channel Id,Channel Url,Channel Title\n\
               UC1,http://www.youtube.com/channel/UC1,Veritasium\n\
               UC2,http://www.youtube.com/channel/UC2,\n";
    let events = parse_subscriptions(csv);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventType::Subscribe);
    assert_eq!(events[0].channel_clean.as_deref(), Some("veritasium"));
    assert_eq!(events[1].channel.as_deref(), Some("UC2"));
    assert_eq!(events[1].language_type(), None);
}

#[test]
fn titles_are_cleaned() {
    assert_eq!(clean_text("Watched Hello World https://x.com/abc 😀"), "hello world");
    assert_eq!(clean_text(""), "");
}

#[test]
fn timestamps_normalize_to_utc() {
    assert_eq!(parse_timestamp("2024-03-01T10:15:30Z").as_deref(), Some("2024-03-01T10:15:30Z"));
    assert_eq!(parse_timestamp("2024-03-01T10:15:30").as_deref(), Some("2024-03-01T10:15:30Z"));
    assert_eq!(parse_timestamp("yesterday").as_deref(), Some("yesterday"));
    assert_eq!(parse_timestamp(""), None);
}

#[test]
fn discovered_files_are_preprocessed_together() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("Takeout/YouTube and YouTube Music/history");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(nested.join(WATCH_HISTORY), WATCH).unwrap();
    std::fs::write(
        dir.path().join(SUBSCRIPTIONS),
        "Channel Id,Channel Url,Channel Title\nUC1,http://www.youtube.com/channel/UC1,Veritasium\n",
    )
    .unwrap();

    let files = TakeoutFiles::discover(dir.path());
    assert!(files.watch_history.is_some());
    assert!(files.search_history.is_none());

    let report = preprocess_files(&files).unwrap();
    assert_eq!(report.stats.total_watch, 2);
    assert_eq!(report.stats.total_subscribe, 1);
    assert_eq!(report.stats.total_events, 3);
    assert_eq!(report.stats.language_breakdown["english"], 2);
    assert_eq!(report.stats.language_breakdown["hindi"], 0);
}
