//! UI Input Processing
//!
//! Hosts map their native pointer or key events to `ControlId`s and hand
//! them to `OrderWidget::handle_click`; the widget reports back what the
//! click did. Disabled and non-interactive controls swallow clicks.

use crate::foundation::money::Price;

/// Outcome of routing a click to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResponse {
    /// A topping checkbox changed state
    Toggled {
        /// Index of the topping that was toggled
        index: usize,
        /// New checkbox state
        checked: bool,
        /// New order total
        total: Price,
    },
    /// The submit button accepted the order
    OrderPlaced {
        /// Sequential number of the new order
        order_number: u64,
    },
    /// The click landed on a disabled or non-interactive control
    Ignored,
}
