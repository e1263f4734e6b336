//! Text widget - labels and status lines

use super::core::TextStyle;

/// UI text line component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLine {
    /// Text content to display
    pub content: String,

    /// Presentation hint for the backend
    pub style: TextStyle,
}

impl TextLine {
    /// Create a regular text line with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: TextStyle::Regular,
        }
    }
}
