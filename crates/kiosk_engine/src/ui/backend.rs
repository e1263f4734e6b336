//! Render Backend Trait
//!
//! Defines the interface between the ordering widget and its host UI.
//! Keeps widget logic independent of terminal/GUI/web specifics.

use super::rendering::RenderCommand;

/// Backend-agnostic widget rendering interface
///
/// Backends receive one full frame at a time: a begin call, every command
/// for the frame in display order, then an end call that presents it.
pub trait RenderBackend {
    /// Begin a widget frame
    fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Draw a single render command
    fn draw(&mut self, command: &RenderCommand) -> Result<(), Box<dyn std::error::Error>>;

    /// Finish the frame and present it
    fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
