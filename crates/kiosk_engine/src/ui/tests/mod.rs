//! Widget behavior tests
//!
//! Drives the ordering widget through full user flows with a recording
//! backend and explicit time steps.

mod rendering;

use crate::config::KioskConfig;
use crate::foundation::money::Price;
use crate::ui::backend::RenderBackend;
use crate::ui::rendering::RenderCommand;
use crate::ui::{ControlId, OrderWidget};

/// Backend that records every presented frame for assertions
pub struct RecordingBackend {
    frames: Vec<Vec<RenderCommand>>,
    current: Vec<RenderCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            current: Vec::new(),
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Vec<RenderCommand>] {
        &self.frames
    }

    pub fn last_frame(&self) -> &[RenderCommand] {
        self.frames.last().map_or(&[], Vec::as_slice)
    }

    /// Find the command for a control in the most recent frame
    pub fn find(&self, id: ControlId) -> Option<&RenderCommand> {
        self.last_frame()
            .iter()
            .find(|command| command.control() == id)
    }
}

impl RenderBackend for RecordingBackend {
    fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.current.clear();
        Ok(())
    }

    fn draw(&mut self, command: &RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
        self.current.push(command.clone());
        Ok(())
    }

    fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

/// Build a mounted widget with cheese ($5) and olives ($3) registered
pub fn widget_with_menu() -> (OrderWidget, RecordingBackend) {
    let mut widget = OrderWidget::new(&KioskConfig::default()).unwrap();
    let mut backend = RecordingBackend::new();
    widget.mount(&mut backend).unwrap();
    widget.register_topping("cheese", Price::new(5)).unwrap();
    widget.register_topping("olives", Price::new(3)).unwrap();
    (widget, backend)
}
