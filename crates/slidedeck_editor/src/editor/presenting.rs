//! Presentation-mode state machine.

use super::{EditorMode, SlideEditor};
use slidedeck_core::EditorError;
use tracing::warn;

impl SlideEditor {
    /// `Editing -> Presenting`.
    ///
    /// Rejected when the deck is empty. Otherwise captures in-flight edits,
    /// saves implicitly when dirty, then requests fullscreen and installs the
    /// presentation key scope. The platform calls are best-effort: a refusal
    /// is logged and never blocks the transition. Re-entering while already
    /// presenting is a no-op.
    ///
    /// # Errors
    /// [`EditorError::EmptyDeck`] when there is nothing to present.
    pub fn start_presentation(&mut self) -> Result<(), EditorError> {
        if self.mode == EditorMode::Presenting {
            return Ok(());
        }
        if self.state.slides.is_empty() {
            self.set_status("No slides to present.");
            return Err(EditorError::EmptyDeck);
        }
        self.capture_before_flush();
        if self.state.selected_slide_id.is_none() {
            let first = self.state.slides[0].id.clone();
            self.state.select(&first);
        }
        if self.state.is_dirty {
            if let Err(err) = self.save() {
                warn!("implicit save before presenting failed: {}", err);
            }
        }
        self.mode = EditorMode::Presenting;
        if let Err(reason) = self.platform.enter_fullscreen() {
            warn!(%reason, "fullscreen request refused");
        }
        self.platform.install_presentation_keys();
        self.render_canvas();
        Ok(())
    }

    /// `Presenting -> Editing`: release fullscreen (best-effort), remove the
    /// presentation key scope, and re-render the canvas at the normal
    /// editing scale. A no-op outside presentation mode.
    pub fn exit_presentation(&mut self) {
        if self.mode != EditorMode::Presenting {
            return;
        }
        self.mode = EditorMode::Editing;
        if let Err(reason) = self.platform.exit_fullscreen() {
            warn!(%reason, "fullscreen release refused");
        }
        self.platform.remove_presentation_keys();
        self.render_canvas();
    }

    /// Platform notification that fullscreen state changed outside the
    /// engine's control. Losing fullscreen while presenting runs the full
    /// exit cleanup.
    pub fn fullscreen_changed(&mut self, is_fullscreen: bool) {
        if !is_fullscreen && self.mode == EditorMode::Presenting {
            self.exit_presentation();
        }
    }
}
