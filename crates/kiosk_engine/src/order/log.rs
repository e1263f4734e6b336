//! Completed order history

use super::pizza::PizzaConfig;

/// Append-only log of completed orders
///
/// Orders are numbered sequentially starting at 1. Entries are snapshots
/// taken at placement time, so later menu or message changes never touch
/// them.
#[derive(Debug, Default)]
pub struct OrderLog {
    entries: Vec<PizzaConfig>,
}

impl OrderLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed order and return its order number
    pub fn record(&mut self, order: PizzaConfig) -> u64 {
        self.entries.push(order);
        self.entries.len() as u64
    }

    /// Get the number of recorded orders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether any orders have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an order by its order number
    pub fn get(&self, number: u64) -> Option<&PizzaConfig> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.entries.get(index)
    }

    /// Get the most recently recorded order
    pub fn last(&self) -> Option<&PizzaConfig> {
        self.entries.last()
    }

    /// Iterate over recorded orders, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &PizzaConfig> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::money::Price;

    #[test]
    fn test_order_numbers_start_at_one() {
        let mut log = OrderLog::new();
        assert!(log.is_empty());

        let first = log.record(PizzaConfig::new(Price::new(40)));
        let second = log.record(PizzaConfig::new(Price::new(40)));
        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_lookup_by_order_number() {
        let mut log = OrderLog::new();
        let mut order = PizzaConfig::new(Price::new(40));
        order.add_topping(0, "cheese", Price::new(5));
        let number = log.record(order);

        assert_eq!(log.get(number).map(PizzaConfig::price), Some(Price::new(45)));
        assert!(log.get(0).is_none());
        assert!(log.get(99).is_none());
    }
}
