//! Error types for widget operations

use thiserror::Error;

/// Errors returned by ordering widget operations
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Operation requires the widget to be mounted on a render backend
    #[error("UI is not rendered")]
    NotMounted,

    /// The widget was already mounted on a render backend
    #[error("Widget is already mounted")]
    AlreadyMounted,

    /// The widget is inside an order confirmation cycle
    #[error("An order is already being processed")]
    OrderInFlight,

    /// A topping index did not match any registered topping
    #[error("Topping index {index} is out of range ({count} registered)")]
    ToppingOutOfRange {
        /// The index that was requested
        index: usize,
        /// How many toppings are registered
        count: usize,
    },

    /// A topping was registered with an empty name
    #[error("Topping name must not be empty")]
    BlankName,

    /// A confirmation message was set to empty text
    #[error("Message text must not be empty")]
    BlankMessage,

    /// Widget settings failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_mounted_message() {
        assert_eq!(WidgetError::NotMounted.to_string(), "UI is not rendered");
    }

    #[test]
    fn test_out_of_range_reports_bounds() {
        let err = WidgetError::ToppingOutOfRange { index: 7, count: 2 };
        assert_eq!(
            err.to_string(),
            "Topping index 7 is out of range (2 registered)"
        );
    }
}
