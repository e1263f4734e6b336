//! Order domain types
//!
//! The pure order-taking state that the UI layer presents:
//! - menu: toppings available for selection
//! - pizza: the order currently being built
//! - log: completed order history
//! - messages: confirmation message texts
//! - phase: where the widget is in the order cycle

pub mod log;
pub mod menu;
pub mod messages;
pub mod phase;
pub mod pizza;

pub use log::OrderLog;
pub use menu::Topping;
pub use messages::WidgetMessages;
pub use phase::OrderPhase;
pub use pizza::PizzaConfig;
