//! UI System Module
//!
//! Provides a clean separation between widget logic and rendering backend.
//!
//! Architecture:
//! - `OrderWidget`: the ordering control managing menu, totals, and the cycle
//! - widgets/: control definitions (Checkbox, Button, TextLine)
//! - rendering/: backend-agnostic rendering infrastructure
//! - input/: click routing and responses

pub mod backend;
pub mod input;
pub mod order_widget;
pub mod rendering;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use backend::RenderBackend;
pub use order_widget::OrderWidget;

// Re-export widgets
pub use widgets::{Button, Checkbox, TextLine, TextStyle};

// Re-export rendering types
pub use rendering::{RenderCommand, WidgetRenderer};

// Re-export input types
pub use input::ClickResponse;

// Re-export events
pub use crate::events::EventSystem;

/// Identifier for a control inside the ordering widget
///
/// Hosts map their native pointer or key events onto these and hand them
/// to `OrderWidget::handle_click`. The same IDs come back on the render
/// commands, so a host can associate its screen regions both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Checkbox for the topping registered at this index
    Topping(usize),
    /// The running order total line
    PriceDisplay,
    /// The submit button
    Submit,
    /// The status legend under the submit button
    StatusLegend,
}
