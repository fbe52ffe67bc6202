//! Language detection and micro-topic extraction over YouTube Takeout history.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
