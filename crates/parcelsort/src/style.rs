//! Display styles for categories.

use parcelsort_core::Category;

/// Presentation style for a category result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    Standard,
    Special,
    Rejected,
}

impl DisplayStyle {
    /// Returns the style for a category.
    pub fn of(category: Category) -> Self {
        match category {
            Category::Standard => DisplayStyle::Standard,
            Category::Special => DisplayStyle::Special,
            Category::Rejected => DisplayStyle::Rejected,
        }
    }

    /// Returns the CSS class used to render the result.
    pub fn css_class(&self) -> &'static str {
        match self {
            DisplayStyle::Standard => "result-standard",
            DisplayStyle::Special => "result-special",
            DisplayStyle::Rejected => "result-rejected",
        }
    }
}

/// Maps a raw category label to its CSS class; unknown labels map to `""`.
pub fn class_for_label(label: &str) -> &'static str {
    label
        .parse::<Category>()
        .map(|c| DisplayStyle::of(c).css_class())
        .unwrap_or("")
}
