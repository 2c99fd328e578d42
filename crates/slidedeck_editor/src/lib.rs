//! Editor state & synchronization engine for SlideDeck.
//!
//! Owns the authoritative [`slidedeck_core::Presentation`] and reconciles it
//! against live editable surfaces whose edits arrive asynchronously. The
//! engine guarantees that no edit is lost across a debounce boundary
//! (capture-before-flush), that stale renders are replaced after every
//! visible state transition, and that persistence never corrupts the model.

/// Monotonic clock abstraction so debounce timing is testable.
pub mod clock;
/// Per-key debounce table with cancel-and-reschedule semantics.
pub mod debounce;
/// The editor engine: mutation pipeline, persistence flow, mode machine.
pub mod editor;
/// Boundary traits for the render surface, platform shell, and formatting
/// layer.
pub mod frontend;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::DebounceTable;
pub use editor::{EditorMode, Frontend, SlideEditor};
pub use frontend::{EditSurfaces, FormattingLayer, PlatformShell, RenderBoundary};
