//! UI widgets module
//!
//! Contains the control types the ordering widget is built from
//! (checkboxes, buttons, text lines).

pub mod button;
pub mod checkbox;
pub mod core;
pub mod text;

// Re-export core types
pub use core::TextStyle;

// Re-export widget types
pub use button::Button;
pub use checkbox::Checkbox;
pub use text::TextLine;
