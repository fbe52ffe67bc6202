//! Runtime configuration utilities for takeout-insights.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Root folder for session files.
    pub data_dir: PathBuf,
    /// Root folder for reports.
    pub outputs_dir: PathBuf,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    pub topics: TopicSettings,
}

/// Knobs for language-aware topic extraction.
#[derive(Debug, Clone, Deserialize)]
pub struct TopicSettings {
    /// Texts per English pipeline chunk.
    pub batch_size: usize,
    /// Entries per list in aggregate reports.
    pub top_n: usize,
    /// Longest text a pipeline accepts before failing that event.
    pub max_text_chars: usize,
    pub english_enabled: bool,
    pub hindi_enabled: bool,
    /// Extra English entities merged over the built-in seeds.
    pub english_gazetteer: Option<PathBuf>,
    /// Extra Hindi entities merged over the built-in seeds.
    pub hindi_gazetteer: Option<PathBuf>,
}

impl Default for TopicSettings {
    fn default() -> Self {
        Self {
            batch_size: 100,
            top_n: 50,
            max_text_chars: 1_000_000,
            english_enabled: true,
            hindi_enabled: true,
            english_gazetteer: None,
            hindi_gazetteer: None,
        }
    }
}

fn parsed_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn flag_var(key: &str) -> Option<bool> {
    let value = env::var(key).ok()?;
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl TopicSettings {
    /// Read overrides from the environment on top of the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            batch_size: parsed_var("TOPIC_BATCH_SIZE").unwrap_or(defaults.batch_size),
            top_n: parsed_var("TOPIC_TOP_N").unwrap_or(defaults.top_n),
            max_text_chars: parsed_var("NLP_MAX_TEXT_CHARS").unwrap_or(defaults.max_text_chars),
            english_enabled: flag_var("NLP_ENGLISH_ENABLED").unwrap_or(defaults.english_enabled),
            hindi_enabled: flag_var("NLP_HINDI_ENABLED").unwrap_or(defaults.hindi_enabled),
            english_gazetteer: env::var("ENGLISH_GAZETTEER").ok().map(PathBuf::from),
            hindi_gazetteer: env::var("HINDI_GAZETTEER").ok().map(PathBuf::from),
        }
    }
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        std::fs::create_dir_all(&data_dir).context("creating data dir")?;
        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            data_dir,
            outputs_dir,
            log_level,
            topics: TopicSettings::from_env(),
        })
    }

    /// Convenience helper for derived path segments.
    pub fn join_data<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.data_dir.join(path)
    }
}
