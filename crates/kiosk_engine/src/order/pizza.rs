//! The order currently being built

use crate::foundation::money::Price;
use std::collections::BTreeMap;

/// A single order under construction
///
/// Tracks the running total and which registered toppings are selected,
/// keyed by topping index. The total always equals the base price plus the
/// prices of the selected toppings; the only way to change it is through
/// `add_topping` and `remove_topping`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PizzaConfig {
    base_price: Price,
    price: Price,
    toppings: BTreeMap<usize, String>,
}

impl PizzaConfig {
    /// Create an empty order at the given base price
    pub fn new(base_price: Price) -> Self {
        Self {
            base_price,
            price: base_price,
            toppings: BTreeMap::new(),
        }
    }

    /// Get the current order total
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get the base price the order started from
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    /// Get the selected toppings, keyed by topping index
    pub fn toppings(&self) -> &BTreeMap<usize, String> {
        &self.toppings
    }

    /// Check whether a topping index is selected
    pub fn has_topping(&self, index: usize) -> bool {
        self.toppings.contains_key(&index)
    }

    /// Get the number of selected toppings
    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    /// Add a topping and raise the total by its price
    ///
    /// Returns false without changing anything if the index is already
    /// selected.
    pub fn add_topping(&mut self, index: usize, name: impl Into<String>, price: Price) -> bool {
        if self.toppings.contains_key(&index) {
            return false;
        }
        self.toppings.insert(index, name.into());
        self.price += price;
        true
    }

    /// Remove a topping and lower the total by its price
    ///
    /// Returns false without changing anything if the index is not
    /// selected.
    pub fn remove_topping(&mut self, index: usize, price: Price) -> bool {
        if self.toppings.remove(&index).is_none() {
            return false;
        }
        self.price = self.price.saturating_sub(price);
        true
    }
}
