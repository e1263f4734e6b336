//! Time management utilities

use std::time::{Duration, Instant};

/// Wall-clock frame timer for interactive hosts
///
/// Measures the elapsed time between successive `tick` calls so the host
/// can drive widget updates with real time steps. Widgets themselves never
/// read the wall clock; they only consume the durations handed to them.
pub struct FrameClock {
    last_tick: Instant,
    delta: Duration,
    total: Duration,
    tick_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new frame clock
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            delta: Duration::ZERO,
            total: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Advance the clock and return the time since the previous tick
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        self.delta = now.duration_since(self.last_tick);
        self.total += self.delta;
        self.last_tick = now;
        self.tick_count += 1;
        self.delta
    }

    /// Get the time between the two most recent ticks
    pub fn delta(&self) -> Duration {
        self.delta
    }

    /// Get the total elapsed time since clock creation
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Get the number of ticks recorded so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

/// A fixed duration counting down to zero under caller-supplied time steps
///
/// The countdown never reads a clock of its own. Each `advance` subtracts
/// the given step, and when the step overshoots the remaining time the
/// unused portion is returned so the caller can feed it into whatever
/// countdown starts next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: Duration,
}

impl Countdown {
    /// Create a countdown with the given duration remaining
    pub const fn new(duration: Duration) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// Advance the countdown by a time step
    ///
    /// Returns `Some(leftover)` the moment the countdown reaches zero,
    /// where `leftover` is the portion of `dt` that was not consumed.
    /// Returns `None` while time still remains.
    pub fn advance(&mut self, dt: Duration) -> Option<Duration> {
        if dt >= self.remaining {
            let leftover = dt - self.remaining;
            self.remaining = Duration::ZERO;
            Some(leftover)
        } else {
            self.remaining -= dt;
            None
        }
    }

    /// Get the time left on the countdown
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Check whether the countdown has reached zero
    pub fn is_finished(&self) -> bool {
        self.remaining.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_accumulates_ticks() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick_count(), 0);
        assert_eq!(clock.total(), Duration::ZERO);

        let first = clock.tick();
        let second = clock.tick();

        assert_eq!(clock.delta(), second);
        assert_eq!(clock.total(), first + second);
        assert_eq!(clock.tick_count(), 2);
    }

    #[test]
    fn test_countdown_partial_advance() {
        let mut countdown = Countdown::new(Duration::from_secs(3));
        assert_eq!(countdown.advance(Duration::from_secs(1)), None);
        assert_eq!(countdown.remaining(), Duration::from_secs(2));
        assert!(!countdown.is_finished());
    }

    #[test]
    fn test_countdown_exact_boundary_finishes() {
        let mut countdown = Countdown::new(Duration::from_secs(3));
        assert_eq!(
            countdown.advance(Duration::from_secs(3)),
            Some(Duration::ZERO)
        );
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_countdown_overshoot_returns_leftover() {
        let mut countdown = Countdown::new(Duration::from_secs(3));
        assert_eq!(
            countdown.advance(Duration::from_secs(7)),
            Some(Duration::from_secs(4))
        );
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_finished_countdown_passes_steps_through() {
        let mut countdown = Countdown::new(Duration::ZERO);
        assert_eq!(
            countdown.advance(Duration::from_millis(250)),
            Some(Duration::from_millis(250))
        );
    }
}
