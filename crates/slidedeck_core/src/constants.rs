//! Shared constants used across SlideDeck crates.

/// Storage key for the persisted snapshot. Doubles as the snapshot version
/// string; a mismatch on load is tolerated but logged.
pub const STORAGE_KEY: &str = "slide_editor_presentation_v3";

/// Default debounce window for field edits, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default debounce window for sidebar search input, in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 250;

/// Default canvas zoom factor.
pub const DEFAULT_ZOOM: f32 = 1.0;
/// Lower zoom clamp.
pub const MIN_ZOOM: f32 = 0.2;
/// Upper zoom clamp.
pub const MAX_ZOOM: f32 = 3.0;
/// Step applied by the zoom in/out controls.
pub const ZOOM_STEP: f32 = 0.1;

/// Placeholder shown for a slide whose title is empty.
pub const DEFAULT_SLIDE_TITLE: &str = "Untitled slide";
/// Base title for slides created through the add operation.
pub const NEW_SLIDE_BASE_TITLE: &str = "New slide";
/// Starter markup for freshly added slides.
pub const NEW_SLIDE_CONTENT_PLACEHOLDER: &str = "<p>Start typing...</p>";
/// Fallback background color when a slide has none.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Fallback presentation title.
pub const DEFAULT_PRESENTATION_TITLE: &str = "Untitled presentation";

/// Title of the single slide in a cold-start deck.
pub const STARTER_SLIDE_TITLE: &str = "First slide";
/// Subtitle of the single slide in a cold-start deck.
pub const STARTER_SLIDE_SUBTITLE: &str = "Click to edit";

/// Fallback stem for export filenames when the title slugs to nothing.
pub const EXPORT_FALLBACK_STEM: &str = "presentation";

/// Formatting commands the legacy rich-text layer cannot run reliably.
/// These are rejected up front instead of attempted.
pub const UNSUPPORTED_FORMAT_COMMANDS: &[&str] = &["fontName", "fontSize"];
