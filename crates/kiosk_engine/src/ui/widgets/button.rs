//! Button widget - interactive clickable buttons

/// UI button component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// Button label text
    pub label: String,

    /// Whether the button accepts clicks
    pub enabled: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: String::new(),
            enabled: true,
        }
    }
}

impl Button {
    /// Create an enabled button with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }
}
