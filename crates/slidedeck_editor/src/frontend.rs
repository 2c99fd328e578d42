//! Boundary traits for the engine's external collaborators.
//!
//! The engine never reasons about rendering, platform, or rich-text
//! internals; it only drives these narrow contracts and consumes their
//! results.

use slidedeck_core::{Slide, SlideField, SlideListEntry};

/// Consumes full model snapshots and produces visible output.
///
/// Both calls are idempotent re-renders from a complete snapshot, never
/// incremental patches, so the engine needs no diffing protocol. The engine
/// cannot be constructed without one; a missing render boundary is the single
/// fatal startup condition and the constructor signature enforces it.
pub trait RenderBoundary {
    /// Render the navigation list from the filtered view. Entries carry their
    /// original deck position for numbering.
    fn render_list(&mut self, entries: &[SlideListEntry<'_>], selected_id: Option<&str>);

    /// Render the editing canvas for the selected slide, or the empty
    /// placeholder when nothing is selected.
    fn render_canvas(&mut self, slide: Option<&Slide>);
}

/// Live editable surfaces (title/subtitle/body), readable on demand.
///
/// Surfaces push `(field, raw value)` change notifications into the engine as
/// the user types; this trait is the pull side, used by capture-before-flush
/// to read what is on screen right now.
pub trait EditSurfaces {
    /// Current raw value of `field`, or `None` when the field is not mounted
    /// or not being edited.
    fn current_value(&self, field: SlideField) -> Option<String>;
}

/// Platform integration for presentation mode. All operations are
/// best-effort: a refusal is reported, logged by the engine, and never blocks
/// a mode transition.
pub trait PlatformShell {
    fn enter_fullscreen(&mut self) -> Result<(), String>;
    fn exit_fullscreen(&mut self) -> Result<(), String>;
    /// Install the dedicated key-handling scope for presentation navigation.
    fn install_presentation_keys(&mut self);
    fn remove_presentation_keys(&mut self);
}

/// The legacy rich-text command surface.
///
/// Known to be unreliable; the contract is only that it reports whether a
/// command took effect. On success the engine re-captures the content surface
/// rather than trusting the command's effect description.
pub trait FormattingLayer {
    fn exec_command(&mut self, command: &str, value: Option<&str>) -> bool;
}
