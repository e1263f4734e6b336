//! Terminal rendering backend
//!
//! Draws each widget frame as a block of text. Checkboxes show their
//! topping index so the user knows what to type at the prompt.

use kiosk_engine::ui::widgets::TextStyle;
use kiosk_engine::ui::{ControlId, RenderBackend, RenderCommand};
use std::io::{self, Write};

/// Render backend that prints frames to stdout
pub struct TerminalBackend {
    lines: Vec<String>,
}

impl TerminalBackend {
    /// Create a new terminal backend
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl Default for TerminalBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for TerminalBackend {
    fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.lines.clear();
        Ok(())
    }

    fn draw(&mut self, command: &RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
        let line = match command {
            RenderCommand::Checkbox {
                id,
                label,
                checked,
                enabled,
            } => {
                let mark = if *checked { "x" } else { " " };
                let index = match id {
                    ControlId::Topping(index) => *index,
                    _ => 0,
                };
                if *enabled {
                    format!("  {index}. [{mark}] {label}")
                } else {
                    format!("  {index}. [{mark}] {label} (locked)")
                }
            }
            RenderCommand::Button { label, enabled, .. } => {
                if *enabled {
                    format!("  ( {label} )")
                } else {
                    format!("  ( {label} ) (locked)")
                }
            }
            RenderCommand::Text { content, style, .. } => {
                if content.is_empty() {
                    String::new()
                } else {
                    match style {
                        TextStyle::Regular => format!("  {content}"),
                        TextStyle::Emphasis => format!("  *{content}*"),
                    }
                }
            }
        };
        self.lines.push(line);
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut out = io::stdout().lock();
        writeln!(out, "  ----------------------------------------")?;
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "  ----------------------------------------")?;
        out.flush()?;
        Ok(())
    }
}
