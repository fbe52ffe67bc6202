//! YouTube Takeout parsing into normalized events.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::{
    data::event::{Engagement, Event, EventType},
    nlp::{enrich::enrich_language, language::LanguageType},
};

pub const WATCH_HISTORY: &str = "watch-history.json";
pub const SEARCH_HISTORY: &str = "search-history.json";
pub const SUBSCRIPTIONS: &str = "subscriptions.csv";

const TITLE_PREFIXES: &[&str] = &[
    "Watched ", "Viewed ", "Searched for ", "watched ", "viewed ", "searched for ",
];
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.fZ",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").expect("valid regex"));
static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "[",
        "\u{1F600}-\u{1F64F}",
        "\u{1F300}-\u{1F5FF}",
        "\u{1F680}-\u{1F6FF}",
        "\u{1F1E0}-\u{1F1FF}",
        "\u{2702}-\u{27B0}",
        "\u{24C2}-\u{1F251}",
        "]+"
    ))
    .expect("valid regex")
});

#[derive(Debug, Deserialize)]
struct Subtitle {
    name: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Detail {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityEntry {
    #[serde(default)]
    title: String,
    title_url: Option<String>,
    time: Option<String>,
    #[serde(default)]
    subtitles: Vec<Subtitle>,
    #[serde(default)]
    details: Vec<Detail>,
}

impl ActivityEntry {
    fn is_google_ads(&self) -> bool {
        self.details
            .iter()
            .any(|d| d.name.as_deref() == Some("From Google Ads"))
    }

    fn is_post(&self) -> bool {
        self.title_url.as_deref().is_some_and(|url| url.contains("/post/"))
    }
}

#[derive(Debug, Deserialize)]
struct SubscriptionRow {
    #[serde(rename = "Channel Id")]
    channel_id: Option<String>,
    #[serde(rename = "Channel Url")]
    channel_url: Option<String>,
    #[serde(rename = "Channel Title")]
    channel_title: Option<String>,
}

fn strip_prefix<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text)
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Strip activity prefixes, URLs and emoji, then lowercase.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let text = strip_prefix(text, TITLE_PREFIXES);
    let text = URL.replace_all(text, "");
    let text = EMOJI.replace_all(&text, "");
    text.to_lowercase().trim().to_string()
}

/// Normalize a Takeout timestamp to UTC ISO-8601 with a trailing `Z`.
///
/// Unparseable values are passed through unchanged.
pub fn parse_timestamp(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S%.f")))
        .or_else(|| Some(value.to_string()))
}

fn engagement(title: &str) -> Engagement {
    if title.starts_with("Watched") {
        Engagement::Active
    } else {
        Engagement::Passive
    }
}

fn parse_entries(content: &str, file: &str) -> Vec<ActivityEntry> {
    match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(file, error = %err, "unreadable activity file");
            Vec::new()
        }
    }
}

/// Watch history, minus ads and community posts.
pub fn parse_watch_history(content: &str) -> Vec<Event> {
    parse_entries(content, WATCH_HISTORY)
        .into_iter()
        .filter(|entry| !entry.is_google_ads() && !entry.is_post())
        .map(|entry| {
            let mut event = Event::new(EventType::Watch).with_engagement(engagement(&entry.title));
            event.text_raw = non_empty(strip_prefix(&entry.title, &["Watched ", "Viewed "]));
            event.text_clean = non_empty(&clean_text(&entry.title));
            event.timestamp_utc = entry.time.as_deref().and_then(parse_timestamp);
            if let Some(first) = entry.subtitles.into_iter().next() {
                event.channel_clean = first.name.as_ref().map(|name| name.to_lowercase());
                event.channel = first.name;
                event.channel_url = first.url;
            }
            event.video_url = entry.title_url;
            enrich_language(&mut event);
            event
        })
        .collect()
}

pub fn parse_search_history(content: &str) -> Vec<Event> {
    parse_entries(content, SEARCH_HISTORY)
        .into_iter()
        .map(|entry| {
            let mut event = Event::new(EventType::Search);
            event.text_raw = non_empty(strip_prefix(&entry.title, &["Searched for "]));
            event.text_clean = non_empty(&clean_text(&entry.title));
            event.timestamp_utc = entry.time.as_deref().and_then(parse_timestamp);
            enrich_language(&mut event);
            event
        })
        .collect()
}

/// Subscriptions carry no text, so no language is assigned.
pub fn parse_subscriptions(content: &str) -> Vec<Event> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut events = Vec::new();
    for row in reader.deserialize::<SubscriptionRow>() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                warn!(file = SUBSCRIPTIONS, error = %err, "unreadable subscriptions file");
                return Vec::new();
            }
        };
        let channel = row.channel_title.filter(|t| !t.is_empty()).or(row.channel_id);
        let mut event = Event::new(EventType::Subscribe);
        event.channel_clean = channel.as_ref().map(|c| c.to_lowercase());
        event.channel = channel;
        event.channel_url = row.channel_url;
        events.push(event);
    }
    events
}

/// Counts over one ingest run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IngestStats {
    pub total_watch: usize,
    pub total_search: usize,
    pub total_subscribe: usize,
    pub total_events: usize,
    pub language_breakdown: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub events: Vec<Event>,
    pub stats: IngestStats,
}

/// Where each Takeout file was found.
#[derive(Debug, Clone, Default)]
pub struct TakeoutFiles {
    pub watch_history: Option<PathBuf>,
    pub search_history: Option<PathBuf>,
    pub subscriptions: Option<PathBuf>,
}

impl TakeoutFiles {
    /// Walk an extracted Takeout directory; the first match per file name wins.
    pub fn discover(root: &Path) -> Self {
        let mut files = Self::default();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let slot = match entry.file_name().to_str() {
                Some(WATCH_HISTORY) => &mut files.watch_history,
                Some(SEARCH_HISTORY) => &mut files.search_history,
                Some(SUBSCRIPTIONS) => &mut files.subscriptions,
                _ => continue,
            };
            slot.get_or_insert_with(|| entry.path().to_path_buf());
        }
        info!(root = %root.display(), ?files, "discovered takeout files");
        files
    }
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// Preprocess every located file into one combined event list.
pub fn preprocess_files(files: &TakeoutFiles) -> Result<IngestReport> {
    let mut report = IngestReport::default();
    if let Some(path) = &files.watch_history {
        let events = parse_watch_history(&read(path)?);
        report.stats.total_watch = events.len();
        report.events.extend(events);
    }
    if let Some(path) = &files.search_history {
        let events = parse_search_history(&read(path)?);
        report.stats.total_search = events.len();
        report.events.extend(events);
    }
    if let Some(path) = &files.subscriptions {
        let events = parse_subscriptions(&read(path)?);
        report.stats.total_subscribe = events.len();
        report.events.extend(events);
    }

    for lang in LanguageType::ALL {
        report.stats.language_breakdown.insert(lang.to_string(), 0);
    }
    for lang in report.events.iter().filter_map(Event::language_type) {
        *report.stats.language_breakdown.entry(lang.to_string()).or_insert(0) += 1;
    }
    report.stats.total_events = report.events.len();
    info!(events = report.stats.total_events, "preprocessed takeout files");
    Ok(report)
}
