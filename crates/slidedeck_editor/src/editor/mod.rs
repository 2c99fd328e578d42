//! The editor engine: owns the model and drives every state transition.

mod edits;
mod persist;
mod presenting;

#[cfg(test)]
mod tests;

use crate::clock::Clock;
use crate::debounce::DebounceTable;
use crate::frontend::{EditSurfaces, FormattingLayer, PlatformShell, RenderBoundary};
use slidedeck_core::models::SlideListEntry;
use slidedeck_core::{Config, Presentation, SlideField, SnapshotStore};
use std::time::{Duration, Instant};

pub use edits::NavDirection;

const STATUS_TTL: Duration = Duration::from_secs(5);

/// Which of the two top-level states the editor is in. Only one is active at
/// a time; re-entering the current state is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Editing,
    Presenting,
}

/// The frontend collaborators the engine drives. Bundled so the constructor
/// stays readable; every part is required.
pub struct Frontend {
    pub render: Box<dyn RenderBoundary>,
    pub surfaces: Box<dyn EditSurfaces>,
    pub platform: Box<dyn PlatformShell>,
    pub formatting: Box<dyn FormattingLayer>,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Single source of truth for the editing session.
///
/// All mutation flows through this type: debounced field edits, synchronous
/// structural edits, persistence, and mode transitions. The host runtime
/// delivers events serially, so the engine is single-threaded by design and
/// suspends only at debounce deadlines (driven by [`SlideEditor::tick`]) and
/// store/platform calls.
pub struct SlideEditor {
    config: Config,
    state: Presentation,
    store: Box<dyn SnapshotStore>,
    render: Box<dyn RenderBoundary>,
    surfaces: Box<dyn EditSurfaces>,
    platform: Box<dyn PlatformShell>,
    formatting: Box<dyn FormattingLayer>,
    clock: Box<dyn Clock>,
    field_debounce: DebounceTable<SlideField>,
    search_debounce: DebounceTable<()>,
    mode: EditorMode,
    status: Option<StatusMessage>,
}

impl SlideEditor {
    /// Build an editor over `store` with the given frontend. The state starts
    /// as a default deck; call [`SlideEditor::init`] to load the persisted
    /// snapshot and render the first frame.
    pub fn new(
        config: Config,
        store: Box<dyn SnapshotStore>,
        frontend: Frontend,
        clock: Box<dyn Clock>,
    ) -> Self {
        let state = Presentation::default_deck(config.default_zoom);
        let field_debounce = DebounceTable::new(Duration::from_millis(config.debounce_ms));
        let search_debounce = DebounceTable::new(Duration::from_millis(config.search_debounce_ms));
        Self {
            config,
            state,
            store,
            render: frontend.render,
            surfaces: frontend.surfaces,
            platform: frontend.platform,
            formatting: frontend.formatting,
            clock,
            field_debounce,
            search_debounce,
            mode: EditorMode::Editing,
            status: None,
        }
    }

    /// Advance time-driven work: apply due debounced edits and expire status
    /// feedback. The host calls this from its event loop.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        for (field, value) in self.field_debounce.drain_due(now) {
            self.apply_field_edit(field, value);
        }
        for ((), query) in self.search_debounce.drain_due(now) {
            self.apply_search(query);
        }
        if let Some(status) = &self.status {
            if status.expires_at <= now {
                self.status = None;
            }
        }
    }

    /// Re-render both surfaces from the current model. Safe to call at any
    /// time; renders are idempotent full-snapshot calls.
    pub fn refresh(&mut self) {
        self.render_list();
        self.render_canvas();
    }

    pub fn state(&self) -> &Presentation {
        &self.state
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current user-visible status line, if one has not expired yet.
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub(super) fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            expires_at: self.clock.now() + STATUS_TTL,
        });
    }

    pub(super) fn clear_status(&mut self) {
        self.status = None;
    }

    pub(super) fn render_list(&mut self) {
        let entries: Vec<SlideListEntry<'_>> = self.state.filtered_slides().collect();
        self.render
            .render_list(&entries, self.state.selected_slide_id.as_deref());
    }

    pub(super) fn render_canvas(&mut self) {
        self.render.render_canvas(self.state.selected_slide());
    }
}
