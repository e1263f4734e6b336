//! Widget render commands

use crate::ui::widgets::TextStyle;
use crate::ui::ControlId;

/// Render command for a single control
///
/// Commands carry final display strings, so backends only draw. Each one
/// names the control it came from; hosts use that to map commands onto
/// their own screen regions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Draw a checkbox with its label
    Checkbox {
        /// Control this command was generated from
        id: ControlId,
        /// Label text beside the box
        label: String,
        /// Whether the box is ticked
        checked: bool,
        /// Whether the control accepts clicks
        enabled: bool,
    },
    /// Draw a clickable button
    Button {
        /// Control this command was generated from
        id: ControlId,
        /// Button label text
        label: String,
        /// Whether the control accepts clicks
        enabled: bool,
    },
    /// Draw a line of text
    Text {
        /// Control this command was generated from
        id: ControlId,
        /// Text content to show
        content: String,
        /// Presentation hint
        style: TextStyle,
    },
}

impl RenderCommand {
    /// Get the control this command was generated from
    pub const fn control(&self) -> ControlId {
        match self {
            Self::Checkbox { id, .. } | Self::Button { id, .. } | Self::Text { id, .. } => *id,
        }
    }
}
