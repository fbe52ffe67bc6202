//! JSON session files holding a user's preprocessed events.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::data::event::Event;

pub const EXTRACTION_VERSION: &str = "v2";

/// On-disk session: events plus whatever metadata the service stored alongside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub micro_topics_extracted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extraction_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Session {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading session {}", path.display()))?;
        let session: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing session {}", path.display()))?;
        info!(path = %path.display(), events = session.events.len(), "loaded session");
        Ok(session)
    }

    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating session dir {}", parent.display()))?;
        }
        let body = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, body)
            .await
            .with_context(|| format!("writing session {}", path.display()))?;
        info!(path = %path.display(), events = self.events.len(), "saved session");
        Ok(())
    }

    pub fn mark_extracted(&mut self) {
        self.micro_topics_extracted = true;
        self.extraction_version = Some(EXTRACTION_VERSION.to_string());
    }
}
