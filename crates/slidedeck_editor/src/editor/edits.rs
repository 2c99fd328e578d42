//! Mutation pipeline: field capture, structural edits, navigation, search.

use super::SlideEditor;
use slidedeck_core::constants::UNSUPPORTED_FORMAT_COMMANDS;
use slidedeck_core::{EditorError, SlideField};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Direction for deck navigation. No wraparound at the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Previous,
}

impl SlideEditor {
    /// Raw change notification from an editable surface. Routed through the
    /// per-field debounce window; the last value seen before the window
    /// elapses is the one applied.
    ///
    /// With no slide selected the edit is dropped: stray notifications during
    /// transition windows are expected and harmless.
    pub fn field_input(&mut self, field: SlideField, value: String) {
        if self.state.selected_slide_id.is_none() {
            debug!(field = field.as_str(), "dropping field edit with no selection");
            return;
        }
        let now = self.clock.now();
        self.field_debounce.schedule(field, value, now);
    }

    pub(super) fn apply_field_edit(&mut self, field: SlideField, value: String) {
        let Some(id) = self.state.selected_slide_id.clone() else {
            debug!(field = field.as_str(), "dropping flushed edit with no selection");
            return;
        };
        let changed = self.state.set_field(&id, field, value);
        if changed && field.affects_list() {
            self.render_list();
        }
    }

    /// Reconcile in-flight edits into the model before any operation that
    /// leaves the editing state, reads the deck for presentation, or
    /// persists it.
    ///
    /// Drains the debounce table and reads each editable surface; the live
    /// surface value wins over a pending debounced one for the same field,
    /// and a pending value still applies when its surface is gone.
    pub(super) fn capture_before_flush(&mut self) {
        let mut pending: HashMap<SlideField, String> =
            self.field_debounce.drain_all().into_iter().collect();
        if self.state.selected_slide_id.is_none() {
            if !pending.is_empty() {
                debug!("discarding pending edits with no selection");
            }
            return;
        }
        for field in SlideField::ALL {
            let value = self
                .surfaces
                .current_value(field)
                .or_else(|| pending.remove(&field));
            if let Some(value) = value {
                self.apply_field_edit(field, value);
            }
        }
    }

    /// Insert a new slide after the selection and select it.
    pub fn add_slide(&mut self) {
        self.capture_before_flush();
        self.state.add_slide();
        self.render_list();
        self.render_canvas();
    }

    /// Remove a slide by id, repairing the selection per the deck policy.
    pub fn delete_slide(&mut self, id: &str) {
        self.capture_before_flush();
        if self.state.remove_slide(id) {
            self.render_list();
            self.render_canvas();
        }
    }

    /// Switch the selection. Captures in-flight edits first so a pending
    /// value never lands on the newly selected slide.
    pub fn select_slide(&mut self, id: &str) {
        if self.state.selected_slide_id.as_deref() == Some(id) {
            return;
        }
        self.capture_before_flush();
        if self.state.select(id) {
            self.clear_status();
            self.render_list();
            self.render_canvas();
        }
    }

    /// Move the selection to the adjacent slide.
    ///
    /// # Returns
    /// The id navigated to, or `None` at a deck boundary.
    pub fn navigate(&mut self, direction: NavDirection) -> Option<String> {
        let target = match direction {
            NavDirection::Next => self.state.next_slide_id(),
            NavDirection::Previous => self.state.previous_slide_id(),
        };
        if let Some(id) = &target {
            self.select_slide(id);
        }
        target
    }

    /// Debounced search input from the navigation sidebar.
    pub fn search_input(&mut self, query: String) {
        let now = self.clock.now();
        self.search_debounce.schedule((), query, now);
    }

    pub(super) fn apply_search(&mut self, query: String) {
        if self.state.search_query == query {
            return;
        }
        self.state.search_query = query;
        self.render_list();
    }

    /// Rename the presentation; empty input falls back to the default title.
    pub fn set_presentation_title(&mut self, title: &str) {
        self.state.set_title(title);
    }

    /// Set the canvas zoom, clamped to the configured bounds.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.state
            .set_zoom(zoom, self.config.min_zoom, self.config.max_zoom);
    }

    /// Nudge the canvas zoom, clamped to the configured bounds.
    pub fn change_zoom(&mut self, delta: f32) {
        self.state
            .change_zoom(delta, self.config.min_zoom, self.config.max_zoom);
    }

    /// Run a rich-text command through the formatting layer.
    ///
    /// Commands on the unsupported list are rejected up front instead of
    /// attempted. When the layer reports success the content surface is
    /// re-captured through the normal debounced path; the command's own
    /// effect is never trusted directly.
    ///
    /// # Errors
    /// [`EditorError::UnsupportedCommand`] for commands the legacy layer
    /// cannot run reliably.
    pub fn apply_format(&mut self, command: &str, value: Option<&str>) -> Result<(), EditorError> {
        if self.state.selected_slide_id.is_none() {
            self.set_status("No slide selected.");
            return Ok(());
        }
        if UNSUPPORTED_FORMAT_COMMANDS.contains(&command) {
            self.set_status(format!("\"{}\" is not supported.", command));
            return Err(EditorError::UnsupportedCommand(command.to_string()));
        }
        if self.formatting.exec_command(command, value) {
            if let Some(content) = self.surfaces.current_value(SlideField::Content) {
                self.field_input(SlideField::Content, content);
            }
        } else {
            warn!(command, "formatting command reported no effect");
        }
        Ok(())
    }
}
