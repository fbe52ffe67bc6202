//! Event model, Takeout ingestion and session persistence.

pub mod event;
pub mod store;
pub mod takeout;
