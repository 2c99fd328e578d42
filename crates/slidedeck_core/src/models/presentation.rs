//! Editor-wide presentation state and deck operations.

use super::slide::{Slide, SlideField};
use crate::constants::DEFAULT_PRESENTATION_TITLE;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Canonical editor state: the ordered deck plus presentation-level metadata.
///
/// This is the single source of truth. Editable surfaces render from it and
/// feed edits back through the mutation pipeline; they are never trusted as
/// state on their own.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub title: String,
    pub slides: Vec<Slide>,
    pub selected_slide_id: Option<String>,
    /// Title filter for the navigation view. Never affects slide order or
    /// membership.
    pub search_query: String,
    pub current_zoom: f32,
    /// True iff in-memory state diverges from the last persisted snapshot.
    pub is_dirty: bool,
    pub last_saved: Option<DateTime<Utc>>,
}

/// One row of the filtered navigation view. `number` is the slide's 1-based
/// position in the unfiltered deck, kept stable across filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideListEntry<'a> {
    pub number: usize,
    pub slide: &'a Slide,
}

impl Presentation {
    /// Fresh single-slide deck used for cold starts.
    pub fn default_deck(zoom: f32) -> Self {
        let starter = Slide::starter();
        let selected = starter.id.clone();
        Self {
            title: DEFAULT_PRESENTATION_TITLE.to_string(),
            slides: vec![starter],
            selected_slide_id: Some(selected),
            search_query: String::new(),
            current_zoom: zoom,
            is_dirty: false,
            last_saved: None,
        }
    }

    pub fn slide(&self, id: &str) -> Option<&Slide> {
        self.slides.iter().find(|slide| slide.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub fn selected_index(&self) -> Option<usize> {
        let id = self.selected_slide_id.as_deref()?;
        self.index_of(id)
    }

    pub fn selected_slide(&self) -> Option<&Slide> {
        let id = self.selected_slide_id.as_deref()?;
        self.slide(id)
    }

    /// Select a slide by id. Unknown ids are dropped.
    ///
    /// # Returns
    /// `true` when the selection changed.
    pub fn select(&mut self, id: &str) -> bool {
        if self.selected_slide_id.as_deref() == Some(id) {
            return false;
        }
        if self.index_of(id).is_none() {
            debug!(id, "ignoring selection of unknown slide");
            return false;
        }
        self.selected_slide_id = Some(id.to_string());
        true
    }

    /// Insert a new slide after the current selection (or append when nothing
    /// is selected) and select it.
    ///
    /// # Returns
    /// Id of the created slide.
    pub fn add_slide(&mut self) -> String {
        let slide = Slide::numbered(self.slides.len() + 1);
        let id = slide.id.clone();
        let insert_at = match self.selected_index() {
            Some(index) => index + 1,
            None => self.slides.len(),
        };
        self.slides.insert(insert_at, slide);
        self.selected_slide_id = Some(id.clone());
        self.is_dirty = true;
        id
    }

    /// Remove a slide by id, repairing the selection.
    ///
    /// When the removed slide was selected, the slide now at
    /// `min(removed_index, len - 1)` is selected, or the selection clears if
    /// the deck empties. Removing a non-selected slide leaves the selection
    /// untouched.
    ///
    /// # Returns
    /// `true` when a slide was removed.
    pub fn remove_slide(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let was_selected = self.selected_slide_id.as_deref() == Some(id);
        self.slides.remove(index);
        self.is_dirty = true;
        if self.slides.is_empty() {
            self.selected_slide_id = None;
        } else if was_selected {
            let next = index.min(self.slides.len() - 1);
            self.selected_slide_id = Some(self.slides[next].id.clone());
        }
        true
    }

    /// Mutate one enumerated field of one slide.
    ///
    /// A value identical to the current one is a no-op so re-saving unchanged
    /// text never marks the deck dirty.
    ///
    /// # Returns
    /// `true` when the value actually changed.
    pub fn set_field(&mut self, id: &str, field: SlideField, value: String) -> bool {
        let Some(index) = self.index_of(id) else {
            debug!(id, field = field.as_str(), "dropping edit for unknown slide");
            return false;
        };
        if field.get(&self.slides[index]) == value {
            return false;
        }
        field.set(&mut self.slides[index], value);
        self.is_dirty = true;
        true
    }

    /// Id of the slide after the selection, or `None` at the end of the deck.
    pub fn next_slide_id(&self) -> Option<String> {
        let index = self.selected_index()?;
        self.slides.get(index + 1).map(|slide| slide.id.clone())
    }

    /// Id of the slide before the selection, or `None` at the start.
    pub fn previous_slide_id(&self) -> Option<String> {
        let index = self.selected_index()?;
        index
            .checked_sub(1)
            .map(|previous| self.slides[previous].id.clone())
    }

    /// Restartable read-only projection of the deck through the search query:
    /// a case-insensitive substring match against titles. An empty query
    /// yields the whole deck. Numbering follows the unfiltered deck.
    pub fn filtered_slides(&self) -> impl Iterator<Item = SlideListEntry<'_>> {
        let query = self.search_query.trim().to_lowercase();
        self.slides
            .iter()
            .enumerate()
            .filter(move |(_, slide)| {
                query.is_empty() || slide.title.to_lowercase().contains(&query)
            })
            .map(|(index, slide)| SlideListEntry {
                number: index + 1,
                slide,
            })
    }

    /// Replace the presentation title, falling back to the default when the
    /// input trims to nothing.
    ///
    /// # Returns
    /// `true` when the title changed.
    pub fn set_title(&mut self, title: &str) -> bool {
        let title = title.trim();
        let next = if title.is_empty() {
            DEFAULT_PRESENTATION_TITLE
        } else {
            title
        };
        if self.title == next {
            return false;
        }
        self.title = next.to_string();
        self.is_dirty = true;
        true
    }

    /// Set the zoom factor, clamped to the configured bounds. Zoom is a view
    /// concern and never marks the deck dirty.
    pub fn set_zoom(&mut self, zoom: f32, min: f32, max: f32) {
        self.current_zoom = zoom.clamp(min, max);
    }

    /// Nudge the zoom factor by `delta`, clamped.
    pub fn change_zoom(&mut self, delta: f32, min: f32, max: f32) {
        self.set_zoom(self.current_zoom + delta, min, max);
    }
}
