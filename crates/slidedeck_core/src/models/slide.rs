//! Slide record and field addressing.

use crate::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_SLIDE_TITLE, NEW_SLIDE_BASE_TITLE,
    NEW_SLIDE_CONTENT_PLACEHOLDER, STARTER_SLIDE_SUBTITLE, STARTER_SLIDE_TITLE,
};
use crate::ids;
use serde::{Deserialize, Serialize};

/// One deck page.
///
/// Every field is always present in memory; the serde defaults coerce
/// missing or null persisted fields so a loaded slide never carries holes.
/// `content` is an opaque rich-text markup fragment and is never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    #[serde(default = "ids::slide_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_background")]
    pub background_color: String,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND_COLOR.to_string()
}

impl Slide {
    /// The single slide of a cold-start deck.
    pub fn starter() -> Self {
        Self {
            id: ids::slide_id(),
            title: STARTER_SLIDE_TITLE.to_string(),
            subtitle: STARTER_SLIDE_SUBTITLE.to_string(),
            content: String::new(),
            background_color: default_background(),
        }
    }

    /// A freshly added slide, numbered for display.
    ///
    /// # Arguments
    /// - `number`: 1-based number used in the generated title.
    pub fn numbered(number: usize) -> Self {
        Self {
            id: ids::slide_id(),
            title: format!("{} {}", NEW_SLIDE_BASE_TITLE, number),
            subtitle: String::new(),
            content: NEW_SLIDE_CONTENT_PLACEHOLDER.to_string(),
            background_color: default_background(),
        }
    }

    /// Title for display surfaces, falling back to the configured placeholder
    /// when the stored title is empty.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            DEFAULT_SLIDE_TITLE
        } else {
            &self.title
        }
    }
}

/// The enumerated set of directly editable slide fields.
///
/// Field mutation on the model is restricted to this set; anything else
/// coming off an editable surface is a routing bug upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideField {
    Title,
    Subtitle,
    Content,
    BackgroundColor,
}

impl SlideField {
    /// All addressable fields, in capture order.
    pub const ALL: [SlideField; 4] = [
        SlideField::Title,
        SlideField::Subtitle,
        SlideField::Content,
        SlideField::BackgroundColor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideField::Title => "title",
            SlideField::Subtitle => "subtitle",
            SlideField::Content => "content",
            SlideField::BackgroundColor => "backgroundColor",
        }
    }

    /// Current value of this field on `slide`.
    pub fn get<'a>(&self, slide: &'a Slide) -> &'a str {
        match self {
            SlideField::Title => &slide.title,
            SlideField::Subtitle => &slide.subtitle,
            SlideField::Content => &slide.content,
            SlideField::BackgroundColor => &slide.background_color,
        }
    }

    /// Whether a change to this field is visible in the slide list, not just
    /// the canvas.
    pub fn affects_list(&self) -> bool {
        matches!(self, SlideField::Title | SlideField::BackgroundColor)
    }

    pub(crate) fn set(&self, slide: &mut Slide, value: String) {
        match self {
            SlideField::Title => slide.title = value,
            SlideField::Subtitle => slide.subtitle = value,
            SlideField::Content => slide.content = value,
            SlideField::BackgroundColor => slide.background_color = value,
        }
    }
}
