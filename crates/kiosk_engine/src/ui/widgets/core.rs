//! Core UI widget primitives
//!
//! Shared types used by all controls. Controls carry semantic state only;
//! layout, colors, and fonts belong to the host backend.

/// Presentation hint for a line of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    /// Plain text
    Regular,
    /// Emphasized text, for transient status notices
    Emphasis,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::Regular
    }
}
