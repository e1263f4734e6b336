//! Order cycle phases

use crate::foundation::time::Countdown;

/// Where the widget currently is in the order cycle
///
/// `Idle` accepts interaction. The two timed phases keep the controls
/// disabled and advance only through the time steps handed to
/// `OrderWidget::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderPhase {
    /// Ready for interaction
    Idle,
    /// An order was placed; waiting to put up the confirmation notice
    Processing {
        /// Time left before the confirmation notice goes up
        remaining: Countdown,
    },
    /// Confirmation notice is up; waiting to reset for the next order
    Completed {
        /// Time left before the widget resets
        remaining: Countdown,
    },
}

impl OrderPhase {
    /// Check whether the widget is ready for interaction
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Check whether an order is waiting on its confirmation notice
    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing { .. })
    }

    /// Check whether the confirmation notice is up
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Short phase name for log lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Processing { .. } => "processing",
            Self::Completed { .. } => "completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_phase_predicates() {
        assert!(OrderPhase::Idle.is_idle());

        let processing = OrderPhase::Processing {
            remaining: Countdown::new(Duration::from_secs(3)),
        };
        assert!(processing.is_processing());
        assert!(!processing.is_idle());
        assert_eq!(processing.label(), "processing");

        let completed = OrderPhase::Completed {
            remaining: Countdown::new(Duration::from_secs(5)),
        };
        assert!(completed.is_completed());
        assert_eq!(completed.label(), "completed");
    }
}
