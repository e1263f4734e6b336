//! Configuration system
//!
//! File-backed configuration with format detection by extension (TOML and
//! RON), plus the typed settings consumed by the ordering widget.

pub use serde::{Deserialize, Serialize};

use crate::foundation::money::Price;
use std::time::Duration;

/// Configuration trait
///
/// Types implementing this trait can be loaded from and saved to TOML or
/// RON files. The format is chosen by file extension.
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Load configuration from file, falling back to defaults on failure
    ///
    /// Logs the failure and returns `Self::default()` when the file is
    /// missing or malformed, so hosts can start with built-in settings.
    fn load_or_default(path: &str) -> Self {
        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config from {path}: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings for an ordering widget
///
/// Covers the base price charged before any extras, the two confirmation
/// delays of the order cycle, and the confirmation message texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Base price charged for every order before extras
    pub base_price: Price,

    /// Seconds between order placement and the received notice
    pub processing_delay_secs: f32,

    /// Seconds the received notice stays up before the widget resets
    pub completed_delay_secs: f32,

    /// First line of the confirmation notice
    pub order_received_message: String,

    /// Second line of the confirmation notice
    pub thanks_message: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            base_price: Price::new(40),
            processing_delay_secs: 3.0,
            completed_delay_secs: 5.0,
            order_received_message: String::from("Order Received!"),
            thanks_message: String::from("Thanks for your purchase"),
        }
    }
}

impl Config for KioskConfig {}

impl KioskConfig {
    /// Longest accepted confirmation delay, in seconds
    pub const MAX_DELAY_SECS: f32 = 3600.0;

    /// Validate the settings
    pub fn validate(&self) -> Result<(), String> {
        if !self.processing_delay_secs.is_finite()
            || self.processing_delay_secs < 0.0
            || self.processing_delay_secs > Self::MAX_DELAY_SECS
        {
            return Err(format!(
                "processing_delay_secs must be between 0 and {}, got {}",
                Self::MAX_DELAY_SECS,
                self.processing_delay_secs
            ));
        }
        if !self.completed_delay_secs.is_finite()
            || self.completed_delay_secs < 0.0
            || self.completed_delay_secs > Self::MAX_DELAY_SECS
        {
            return Err(format!(
                "completed_delay_secs must be between 0 and {}, got {}",
                Self::MAX_DELAY_SECS,
                self.completed_delay_secs
            ));
        }
        if self.order_received_message.is_empty() {
            return Err(String::from("order_received_message must not be empty"));
        }
        if self.thanks_message.is_empty() {
            return Err(String::from("thanks_message must not be empty"));
        }
        Ok(())
    }

    /// Get the processing delay as a duration
    ///
    /// Negative, non-finite, and unrepresentably large values fall back
    /// to zero seconds; `validate` rejects every such value.
    pub fn processing_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.processing_delay_secs).unwrap_or(Duration::ZERO)
    }

    /// Get the completed-notice delay as a duration
    ///
    /// Negative, non-finite, and unrepresentably large values fall back
    /// to zero seconds; `validate` rejects every such value.
    pub fn completed_delay(&self) -> Duration {
        Duration::try_from_secs_f32(self.completed_delay_secs).unwrap_or(Duration::ZERO)
    }
}
