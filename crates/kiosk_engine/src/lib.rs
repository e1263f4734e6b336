//! # Kiosk Engine
//!
//! A single-threaded ordering widget engine with pluggable rendering
//! backends.
//!
//! ## Features
//!
//! - **Ordering Widget**: topping menu, live totals, and order submission
//! - **Timed Confirmation Cycle**: explicit state machine driven by host time steps
//! - **Backend Agnostic**: widgets emit render commands instead of drawing
//! - **Event System**: key-value events with chain-of-responsibility handlers
//! - **Typed Configuration**: TOML and RON settings files
//!
//! ## Quick Start
//!
//! ```rust
//! use kiosk_engine::prelude::*;
//! use std::time::Duration;
//!
//! struct NullBackend;
//!
//! impl RenderBackend for NullBackend {
//!     fn begin_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
//!         Ok(())
//!     }
//!
//!     fn draw(&mut self, _command: &RenderCommand) -> Result<(), Box<dyn std::error::Error>> {
//!         Ok(())
//!     }
//!
//!     fn end_frame(&mut self) -> Result<(), Box<dyn std::error::Error>> {
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut widget = OrderWidget::default();
//!     let mut backend = NullBackend;
//!     widget.mount(&mut backend)?;
//!
//!     let cheese = widget.register_topping("cheese", Price::new(5))?;
//!     widget.toggle_topping(cheese)?;
//!     let order_number = widget.place_order()?;
//!     assert_eq!(order_number, 1);
//!
//!     // Drive the confirmation cycle with explicit time steps
//!     widget.update(Duration::from_secs(8));
//!     widget.render(&mut backend)?;
//!     assert_eq!(widget.orders().len(), 1);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Foundation utilities
pub mod foundation;

// Widget subsystems
pub mod config;
pub mod error;
pub mod events;
pub mod order;
pub mod ui;

pub use error::WidgetError;
pub use ui::OrderWidget;

/// Common imports for widget hosts
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, KioskConfig},
        error::WidgetError,
        events::{Event, EventArg, EventHandler, EventSystem, EventType},
        foundation::{
            money::Price,
            time::{Countdown, FrameClock},
        },
        order::{OrderLog, OrderPhase, PizzaConfig, Topping, WidgetMessages},
        ui::{ClickResponse, ControlId, OrderWidget, RenderBackend, RenderCommand},
    };
}
