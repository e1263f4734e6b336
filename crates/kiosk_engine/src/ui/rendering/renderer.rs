//! Widget renderer that converts controls to render commands

use super::commands::RenderCommand;
use crate::ui::widgets::{Button, Checkbox, TextLine};
use crate::ui::ControlId;

/// Generates render commands from control state
///
/// This is the bridge between the widget's controls and whatever actually
/// draws them. Responsibilities:
/// - Convert controls to display commands
/// - Track dirty state (only regenerate when something changed)
pub struct WidgetRenderer {
    /// Render commands generated for the current frame
    render_commands: Vec<RenderCommand>,

    /// Whether the command list needs regeneration
    dirty: bool,
}

impl WidgetRenderer {
    /// Create a new widget renderer
    pub fn new() -> Self {
        Self {
            render_commands: Vec::new(),
            dirty: true,
        }
    }

    /// Mark the command list as stale (needs regeneration)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Check if the command list needs regeneration
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Append the render command for a checkbox
    pub fn update_checkbox(&mut self, id: ControlId, checkbox: &Checkbox) {
        self.render_commands.push(RenderCommand::Checkbox {
            id,
            label: checkbox.label.clone(),
            checked: checkbox.checked,
            enabled: checkbox.enabled,
        });
    }

    /// Append the render command for a button
    pub fn update_button(&mut self, id: ControlId, button: &Button) {
        self.render_commands.push(RenderCommand::Button {
            id,
            label: button.label.clone(),
            enabled: button.enabled,
        });
    }

    /// Append the render command for a text line
    pub fn update_text(&mut self, id: ControlId, text: &TextLine) {
        self.render_commands.push(RenderCommand::Text {
            id,
            content: text.content.clone(),
            style: text.style,
        });
    }

    /// Get the current render commands
    pub fn get_render_commands(&self) -> &[RenderCommand] {
        &self.render_commands
    }

    /// Clear all render commands
    pub fn clear(&mut self) {
        self.render_commands.clear();
    }

    /// Mark regeneration complete for this frame
    pub fn end_frame(&mut self) {
        self.dirty = false;
    }
}

impl Default for WidgetRenderer {
    fn default() -> Self {
        Self::new()
    }
}
