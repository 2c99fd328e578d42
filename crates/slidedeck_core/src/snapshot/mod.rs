//! Persisted snapshot format, save/load gateway, and export documents.

/// Snapshot store implementations (durable file slot, in-memory slot).
pub mod store;

use crate::config::Config;
use crate::constants::{EXPORT_FALLBACK_STEM, STORAGE_KEY};
use crate::error::EditorError;
use crate::models::{Presentation, Slide};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use store::SnapshotStore;
use tracing::warn;


/// Wire format of the durable snapshot slot.
///
/// `version` carries the storage key; a mismatch is logged on load but never
/// fatal, so forward and backward tolerance is retained. Slide fields are
/// sanitized through their serde defaults, so a persisted snapshot is never
/// trusted shape-blind.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSnapshot {
    #[serde(default)]
    pub presentation_title: String,
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub selected_slide_id: Option<String>,
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub version: String,
}

/// What a load produced, surfaced to the caller for user-visible feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// A snapshot was read and applied.
    Loaded { version_mismatch: bool },
    /// The slot was empty; a default deck was initialized. Not an error.
    ColdStart,
    /// Data was present but unusable; the slot was discarded and a default
    /// deck initialized.
    Recovered { reason: String },
}

impl PersistedSnapshot {
    fn from_presentation(state: &Presentation, saved_at: DateTime<Utc>) -> Self {
        Self {
            presentation_title: state.title.clone(),
            slides: state.slides.clone(),
            selected_slide_id: state.selected_slide_id.clone(),
            saved_at: Some(saved_at.to_rfc3339()),
            version: STORAGE_KEY.to_string(),
        }
    }
}

/// Serialize `state` into the store's single slot.
///
/// On success the deck is marked clean and `last_saved` is stamped. On any
/// failure the in-memory state is left untouched.
///
/// # Errors
/// [`EditorError::QuotaExceeded`] when the store is out of space, otherwise a
/// storage or serialization error.
pub fn save(state: &mut Presentation, store: &mut dyn SnapshotStore) -> Result<DateTime<Utc>, EditorError> {
    let now = Utc::now();
    let snapshot = PersistedSnapshot::from_presentation(state, now);
    let payload = serde_json::to_string(&snapshot)?;
    store.write(&payload)?;
    state.is_dirty = false;
    state.last_saved = Some(now);
    Ok(now)
}

/// Read the store's slot into a [`Presentation`]. Never fails: an empty slot
/// is a cold start and unusable data is discarded and replaced by a default
/// deck, with the outcome reported alongside.
pub fn load(store: &mut dyn SnapshotStore, config: &Config) -> (Presentation, LoadReport) {
    let raw = match store.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => return (Presentation::default_deck(config.default_zoom), LoadReport::ColdStart),
        Err(err) => {
            warn!("snapshot slot unreadable: {}", err);
            return (
                Presentation::default_deck(config.default_zoom),
                LoadReport::Recovered {
                    reason: err.to_string(),
                },
            );
        }
    };

    let snapshot: PersistedSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("discarding corrupt snapshot: {}", err);
            if let Err(discard_err) = store.discard() {
                warn!("failed to discard corrupt snapshot: {}", discard_err);
            }
            return (
                Presentation::default_deck(config.default_zoom),
                LoadReport::Recovered {
                    reason: err.to_string(),
                },
            );
        }
    };

    let version_mismatch = snapshot.version != STORAGE_KEY;
    if version_mismatch {
        warn!(
            stored = %snapshot.version,
            expected = STORAGE_KEY,
            "snapshot version mismatch; loading anyway"
        );
    }

    let mut state = Presentation {
        title: snapshot.presentation_title,
        slides: snapshot.slides,
        selected_slide_id: None,
        search_query: String::new(),
        current_zoom: config.default_zoom,
        is_dirty: false,
        last_saved: snapshot
            .saved_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc)),
    };
    if state.title.is_empty() {
        state.title = crate::constants::DEFAULT_PRESENTATION_TITLE.to_string();
    }

    // A persisted selection that no longer names a real slide falls back to
    // the first slide, or none when the deck is empty.
    let selection = snapshot
        .selected_slide_id
        .filter(|id| state.index_of(id).is_some())
        .or_else(|| state.slides.first().map(|slide| slide.id.clone()));
    state.selected_slide_id = selection;

    (state, LoadReport::Loaded { version_mismatch })
}

/// Pretty-printed download of the deck: the snapshot shape plus download
/// metadata.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub presentation_title: String,
    pub slides: Vec<Slide>,
    pub selected_slide_id: Option<String>,
    pub saved_at: Option<String>,
    pub downloaded_at: String,
    pub app_version: String,
}

/// A rendered export: filename plus pretty-printed JSON body.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub file_name: String,
    pub json: String,
}

/// Build the downloadable JSON document for `state`.
///
/// # Errors
/// Serialization errors only; the model is never mutated.
pub fn export(state: &Presentation) -> Result<ExportFile, EditorError> {
    let now = Utc::now();
    let document = ExportDocument {
        presentation_title: state.title.clone(),
        slides: state.slides.clone(),
        selected_slide_id: state.selected_slide_id.clone(),
        saved_at: state.last_saved.map(|saved| saved.to_rfc3339()),
        downloaded_at: now.to_rfc3339(),
        app_version: STORAGE_KEY.to_string(),
    };
    Ok(ExportFile {
        file_name: export_file_name(&state.title, now.date_naive()),
        json: serde_json::to_string_pretty(&document)?,
    })
}

/// Filename for a deck export: slugified title plus the date.
pub fn export_file_name(title: &str, date: NaiveDate) -> String {
    format!("{}_{}.json", slugify(title), date.format("%Y-%m-%d"))
}

fn slugify(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .collect();
    let slug = cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    if slug.is_empty() {
        EXPORT_FALLBACK_STEM.to_string()
    } else {
        slug
    }
}
