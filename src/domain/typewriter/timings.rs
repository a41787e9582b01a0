//! Typewriter cadence.

use std::time::Duration;

use super::errors::{ConfigurationIssue, TypewriterError};

/// Delays between typewriter ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    typing_interval: Duration,
    deleting_interval: Duration,
    pause_after_typed: Duration,
}

impl TypewriterTimings {
    pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(100);
    pub const DEFAULT_DELETING_INTERVAL: Duration = Duration::from_millis(50);
    pub const DEFAULT_PAUSE_AFTER_TYPED: Duration = Duration::from_millis(2000);

    /// Creates timings with explicit intervals.
    ///
    /// # Errors
    ///
    /// Returns `ZeroInterval` when the typing or deleting interval is zero.
    /// A zero pause is allowed.
    pub fn new(
        typing_interval: Duration,
        deleting_interval: Duration,
        pause_after_typed: Duration,
    ) -> Result<Self, TypewriterError> {
        if typing_interval.is_zero() {
            return Err(ConfigurationIssue::ZeroInterval {
                field: "typing_interval",
            }
            .into());
        }
        if deleting_interval.is_zero() {
            return Err(ConfigurationIssue::ZeroInterval {
                field: "deleting_interval",
            }
            .into());
        }
        Ok(Self {
            typing_interval,
            deleting_interval,
            pause_after_typed,
        })
    }

    /// Same as [`TypewriterTimings::new`] with millisecond values.
    pub fn from_millis(typing_ms: u64, deleting_ms: u64, pause_ms: u64) -> Result<Self, TypewriterError> {
        Self::new(
            Duration::from_millis(typing_ms),
            Duration::from_millis(deleting_ms),
            Duration::from_millis(pause_ms),
        )
    }

    /// Timings driven by a single typing speed: deleting runs at twice the
    /// speed and the pause keeps its default.
    pub fn with_speed(typing_interval: Duration) -> Result<Self, TypewriterError> {
        Self::new(
            typing_interval,
            typing_interval / 2,
            Self::DEFAULT_PAUSE_AFTER_TYPED,
        )
    }

    /// Replaces the pause after a phrase is fully typed.
    pub fn with_pause(mut self, pause_after_typed: Duration) -> Self {
        self.pause_after_typed = pause_after_typed;
        self
    }

    pub fn typing_interval(&self) -> Duration {
        self.typing_interval
    }

    pub fn deleting_interval(&self) -> Duration {
        self.deleting_interval
    }

    pub fn pause_after_typed(&self) -> Duration {
        self.pause_after_typed
    }
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            typing_interval: Self::DEFAULT_TYPING_INTERVAL,
            deleting_interval: Self::DEFAULT_DELETING_INTERVAL,
            pause_after_typed: Self::DEFAULT_PAUSE_AFTER_TYPED,
        }
    }
}
