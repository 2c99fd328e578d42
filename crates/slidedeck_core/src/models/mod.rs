//! Data models for the in-memory deck and its navigation views.

/// Editor-wide presentation state and deck operations.
pub mod presentation;
/// Slide record and field addressing.
pub mod slide;

pub use presentation::{Presentation, SlideListEntry};
pub use slide::{Slide, SlideField};
