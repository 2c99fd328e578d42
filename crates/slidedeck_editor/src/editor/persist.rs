//! Persistence flow: load at startup, explicit save, export, unload.

use super::SlideEditor;
use slidedeck_core::snapshot::{self, ExportFile, LoadReport};
use slidedeck_core::{ids, EditorError};
use tracing::{info, warn};

impl SlideEditor {
    /// Load the persisted snapshot (or cold-start a default deck) and render
    /// the first frame.
    ///
    /// Never fails: corrupt data is discarded by the gateway and reported
    /// here as a status message.
    pub fn init(&mut self) -> LoadReport {
        let (state, report) = snapshot::load(&mut *self.store, &self.config);
        self.state = state;
        match &report {
            LoadReport::Loaded { .. } => info!("presentation loaded"),
            LoadReport::ColdStart => info!("no stored presentation; starting fresh"),
            LoadReport::Recovered { reason } => {
                warn!(%reason, "stored presentation was unusable");
                self.set_status("Stored presentation was unreadable; starting fresh.");
            }
        }
        self.render_list();
        self.render_canvas();
        report
    }

    /// Capture in-flight edits and persist the deck to the store's slot.
    ///
    /// On success the deck is clean and `last_saved` is stamped; on failure
    /// the model is untouched and the reason is surfaced both as a status
    /// message and as the returned error.
    ///
    /// # Errors
    /// [`EditorError::QuotaExceeded`] when the store is out of space,
    /// otherwise a storage or serialization error.
    pub fn save(&mut self) -> Result<(), EditorError> {
        self.capture_before_flush();
        match snapshot::save(&mut self.state, &mut *self.store) {
            Ok(saved_at) => {
                info!(%saved_at, "presentation saved");
                self.set_status("Saved.");
                Ok(())
            }
            Err(err) => {
                warn!("save failed: {}", err);
                let reason = match &err {
                    EditorError::QuotaExceeded => "Not enough storage space to save.",
                    _ => "Saving failed.",
                };
                self.set_status(reason);
                Err(err)
            }
        }
    }

    /// Build the downloadable JSON document, capturing in-flight edits first
    /// so the export always reflects what is on screen.
    ///
    /// # Errors
    /// Serialization errors only.
    pub fn export(&mut self) -> Result<ExportFile, EditorError> {
        self.capture_before_flush();
        snapshot::export(&self.state)
    }

    /// Share link for the current location: an opaque token appended as a
    /// query parameter. The token is generated, never resolved or stored.
    pub fn share_url(&self, base: &str) -> String {
        format!("{}?s={}", base, ids::share_token())
    }

    /// Capture in-flight edits ahead of host teardown.
    ///
    /// # Returns
    /// `true` when unsaved changes remain, so the host can warn before
    /// closing.
    pub fn prepare_unload(&mut self) -> bool {
        self.capture_before_flush();
        self.state.is_dirty
    }
}
