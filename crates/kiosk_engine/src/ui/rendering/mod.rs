//! Widget rendering module
//!
//! Backend-agnostic rendering infrastructure

pub mod commands;
pub mod renderer;

// Re-export commonly used types
pub use commands::RenderCommand;
pub use renderer::WidgetRenderer;
