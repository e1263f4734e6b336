//! Confirmation message texts

use crate::error::WidgetError;

/// The two message lines shown when an order completes
///
/// Both texts are guaranteed non-empty. Setters reject the empty string
/// and leave the previous text in place; anything else, including
/// whitespace, is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetMessages {
    order_received: String,
    thanks: String,
}

impl Default for WidgetMessages {
    fn default() -> Self {
        Self {
            order_received: String::from("Order Received!"),
            thanks: String::from("Thanks for your purchase"),
        }
    }
}

impl WidgetMessages {
    /// Create messages from the given texts
    pub fn new(
        order_received: impl Into<String>,
        thanks: impl Into<String>,
    ) -> Result<Self, WidgetError> {
        let mut messages = Self::default();
        messages.set_order_received(order_received)?;
        messages.set_thanks(thanks)?;
        Ok(messages)
    }

    /// Get the order received text
    pub fn order_received(&self) -> &str {
        &self.order_received
    }

    /// Get the thanks text
    pub fn thanks(&self) -> &str {
        &self.thanks
    }

    /// Replace the order received text
    pub fn set_order_received(&mut self, text: impl Into<String>) -> Result<(), WidgetError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WidgetError::BlankMessage);
        }
        self.order_received = text;
        Ok(())
    }

    /// Replace the thanks text
    pub fn set_thanks(&mut self, text: impl Into<String>) -> Result<(), WidgetError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WidgetError::BlankMessage);
        }
        self.thanks = text;
        Ok(())
    }

    /// The combined line shown in the status legend on completion
    pub fn confirmation_line(&self) -> String {
        format!("{} {}", self.order_received, self.thanks)
    }
}
