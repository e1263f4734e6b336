//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Money and pricing types
//! - Time management
//! - Logging utilities

pub mod logging;
pub mod money;
pub mod time;
