//! Event system for widget notifications
//!
//! Key principles:
//! - Key-value arguments (no order dependency)
//! - Handler returns bool (true = consumed, stops forwarding)
//! - Registration system (only notify interested handlers)
//! - Events queue until the host asks for a dispatch pass

use crate::foundation::money::Price;
use std::collections::HashMap;

/// Event type identification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    /// A topping checkbox changed state
    ToppingToggled,
    /// An order was placed and entered the confirmation cycle
    OrderPlaced,
    /// The confirmation notice for an order went up
    OrderReceived,
    /// The widget returned to its ready state after an order
    WidgetReset,
}

/// Variant for type-safe event arguments
/// Uses key-value pairs to avoid order dependency problems
#[derive(Debug, Clone)]
pub enum EventArg {
    /// Index of a registered topping
    ToppingIndex(usize),
    /// Checkbox state
    Checked(bool),
    /// An order total
    Total(Price),
    /// Sequential order number
    OrderNumber(u64),
}

/// Event with type ID and key-value arguments
#[derive(Debug, Clone)]
pub struct Event {
    /// Type of event
    pub event_type: EventType,
    /// Widget time when the event was created (seconds)
    pub timestamp: f64,
    args: HashMap<&'static str, EventArg>,
}

impl Event {
    /// Create a new event with the given type and timestamp
    pub fn new(event_type: EventType, timestamp: f64) -> Self {
        Self {
            event_type,
            timestamp,
            args: HashMap::new(),
        }
    }

    /// Add an argument to the event (builder pattern)
    #[must_use]
    pub fn with_arg(mut self, key: &'static str, value: EventArg) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Get an argument by key
    pub fn get_arg(&self, key: &str) -> Option<&EventArg> {
        self.args.get(key)
    }

    /// Get topping index argument if present
    pub fn get_topping_index(&self) -> Option<usize> {
        if let Some(EventArg::ToppingIndex(index)) = self.get_arg("topping_index") {
            Some(*index)
        } else {
            None
        }
    }

    /// Get checked argument if present
    pub fn get_checked(&self) -> Option<bool> {
        if let Some(EventArg::Checked(checked)) = self.get_arg("checked") {
            Some(*checked)
        } else {
            None
        }
    }

    /// Get order total argument if present
    pub fn get_total(&self) -> Option<Price> {
        if let Some(EventArg::Total(total)) = self.get_arg("total") {
            Some(*total)
        } else {
            None
        }
    }

    /// Get order number argument if present
    pub fn get_order_number(&self) -> Option<u64> {
        if let Some(EventArg::OrderNumber(number)) = self.get_arg("order_number") {
            Some(*number)
        } else {
            None
        }
    }
}

/// Event handler trait
/// Returns true if event was consumed (stops forwarding)
/// Returns false to allow forwarding to other handlers
pub trait EventHandler {
    /// Handle an event, return true if consumed
    fn on_event(&mut self, event: &Event) -> bool;
}

/// Event system with registration and queuing
/// Follows chain of responsibility pattern
pub struct EventSystem {
    queue: Vec<Event>,
    handlers: HashMap<EventType, Vec<Box<dyn EventHandler>>>,
}

impl EventSystem {
    /// Create a new empty event system
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific event type
    /// Only handlers registered for this type will be notified
    pub fn register_handler(&mut self, event_type: EventType, handler: Box<dyn EventHandler>) {
        self.handlers.entry(event_type).or_default().push(handler);
    }

    /// Queue an event for the next dispatch pass
    pub fn send(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Get the number of events waiting for dispatch
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Dispatch all queued events in the order they were sent
    pub fn dispatch(&mut self) {
        let queued = std::mem::take(&mut self.queue);
        for event in queued {
            self.dispatch_event(&event);
        }
    }

    /// Dispatch single event to registered handlers
    /// Stops on first handler that returns true (consumed)
    fn dispatch_event(&mut self, event: &Event) {
        if let Some(handlers) = self.handlers.get_mut(&event.event_type) {
            for handler in handlers.iter_mut() {
                if handler.on_event(event) {
                    // Event consumed, stop forwarding
                    break;
                }
            }
        }
    }

    /// Clear all queued events (useful for state transitions)
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Default for EventSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestHandler {
        received: Rc<RefCell<Vec<EventType>>>,
        consume: bool,
    }

    impl TestHandler {
        fn new(received: Rc<RefCell<Vec<EventType>>>, consume: bool) -> Self {
            Self { received, consume }
        }
    }

    impl EventHandler for TestHandler {
        fn on_event(&mut self, event: &Event) -> bool {
            self.received.borrow_mut().push(event.event_type);
            self.consume
        }
    }

    #[test]
    fn test_immediate_dispatch() {
        let mut system = EventSystem::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let handler = Box::new(TestHandler::new(Rc::clone(&received), false));
        system.register_handler(EventType::ToppingToggled, handler);

        let event = Event::new(EventType::ToppingToggled, 0.0)
            .with_arg("topping_index", EventArg::ToppingIndex(1));
        system.send(event);
        assert_eq!(system.pending(), 1);
        system.dispatch();

        assert_eq!(system.pending(), 0);
        assert_eq!(*received.borrow(), vec![EventType::ToppingToggled]);
    }

    #[test]
    fn test_only_registered_types_notified() {
        let mut system = EventSystem::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let handler = Box::new(TestHandler::new(Rc::clone(&received), false));
        system.register_handler(EventType::OrderPlaced, handler);

        system.send(Event::new(EventType::WidgetReset, 0.0));
        system.dispatch();

        assert!(received.borrow().is_empty());
    }

    #[test]
    fn test_event_consumption_stops_forwarding() {
        let mut system = EventSystem::new();

        // First handler consumes
        let first = Rc::new(RefCell::new(Vec::new()));
        system.register_handler(
            EventType::OrderPlaced,
            Box::new(TestHandler::new(Rc::clone(&first), true)),
        );

        // Second handler should not receive
        let second = Rc::new(RefCell::new(Vec::new()));
        system.register_handler(
            EventType::OrderPlaced,
            Box::new(TestHandler::new(Rc::clone(&second), false)),
        );

        system.send(Event::new(EventType::OrderPlaced, 0.0));
        system.dispatch();

        assert_eq!(first.borrow().len(), 1);
        assert!(second.borrow().is_empty());
    }

    #[test]
    fn test_clear_drops_queued_events() {
        let mut system = EventSystem::new();
        let received = Rc::new(RefCell::new(Vec::new()));
        let handler = Box::new(TestHandler::new(Rc::clone(&received), false));
        system.register_handler(EventType::OrderPlaced, handler);

        system.send(Event::new(EventType::OrderPlaced, 0.0));
        system.send(Event::new(EventType::OrderPlaced, 0.1));
        system.clear();

        assert_eq!(system.pending(), 0);
        system.dispatch();
        assert!(received.borrow().is_empty());
    }

    #[test]
    fn test_typed_argument_accessors() {
        let event = Event::new(EventType::OrderPlaced, 1.5)
            .with_arg("order_number", EventArg::OrderNumber(3))
            .with_arg("total", EventArg::Total(Price::new(48)));

        assert_eq!(event.get_order_number(), Some(3));
        assert_eq!(event.get_total(), Some(Price::new(48)));
        assert_eq!(event.get_topping_index(), None);
        assert_eq!(event.get_checked(), None);
    }
}
