//! Menu entries available for selection

use crate::foundation::money::Price;
use serde::{Deserialize, Serialize};

/// A menu extra that can be added to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topping {
    /// Display name shown beside the checkbox
    pub name: String,
    /// Price added to the order total while selected
    pub price: Price,
}

impl Topping {
    /// Create a new topping
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Label shown in the UI: the name followed by the price
    pub fn display_label(&self) -> String {
        format!("{} {}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_includes_price() {
        let topping = Topping::new("cheese", Price::new(5));
        assert_eq!(topping.display_label(), "cheese $5");
    }
}
