//! Core domain library for SlideDeck (config, model, persistence).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across SlideDeck crates.
pub mod constants;
/// Application error types (storage/domain).
pub mod error;
/// Identifier generation for slides and share tokens.
pub mod ids;
/// Data models for the in-memory deck and navigation views.
pub mod models;
/// Persisted snapshot format, stores, and export documents.
pub mod snapshot;

pub use config::Config;
pub use error::EditorError;
pub use models::{Presentation, Slide, SlideField, SlideListEntry};
pub use snapshot::store::{FileStore, MemoryStore, SnapshotStore};
