//! Checkbox widget - toggleable menu entries

/// UI checkbox component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    /// Label text shown beside the box
    pub label: String,

    /// Whether the box is ticked
    pub checked: bool,

    /// Whether the checkbox accepts clicks
    pub enabled: bool,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            label: String::new(),
            checked: false,
            enabled: true,
        }
    }
}

impl Checkbox {
    /// Create an unchecked, enabled checkbox with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Flip the checked state and return the new value
    pub fn toggle(&mut self) -> bool {
        self.checked = !self.checked;
        self.checked
    }
}
