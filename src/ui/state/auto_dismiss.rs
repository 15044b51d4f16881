// SPDX-License-Identifier: MPL-2.0
//! Auto-dismiss delay domain type for notifications.
//!
//! This module provides a type-safe wrapper for the notification
//! auto-dismiss delay in milliseconds, where zero means "never".

use crate::config::{DEFAULT_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS};
use std::time::Duration;

/// Auto-dismiss delay in milliseconds.
///
/// A value of `0` disables auto-dismiss. Any other value is kept as given;
/// [`AutoDismiss::clamped`] bounds values read from configuration.
///
/// # Example
///
/// ```
/// use iced_ui_kit::ui::state::AutoDismiss;
///
/// let delay = AutoDismiss::new(5000);
/// assert_eq!(delay.millis(), 5000);
///
/// assert!(AutoDismiss::new(0).as_duration().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDismiss(u32);

impl AutoDismiss {
    /// Auto-dismiss disabled; only a manual close ends the notification.
    pub const NEVER: Self = Self(0);

    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis)
    }

    /// Creates a delay clamped to `MAX_AUTO_DISMISS_MS`.
    #[must_use]
    pub fn clamped(millis: u32) -> Self {
        Self(millis.min(MAX_AUTO_DISMISS_MS))
    }

    /// Returns the delay in milliseconds (`0` when disabled).
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns whether auto-dismiss is enabled.
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.0 > 0
    }

    /// Returns the delay as a `Duration`, or `None` when disabled.
    #[must_use]
    pub fn as_duration(self) -> Option<Duration> {
        self.is_enabled()
            .then(|| Duration::from_millis(u64::from(self.0)))
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self(DEFAULT_AUTO_DISMISS_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(AutoDismiss::default().millis(), 3000);
        assert_eq!(
            AutoDismiss::default().as_duration(),
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn zero_disables_auto_dismiss() {
        assert!(!AutoDismiss::new(0).is_enabled());
        assert_eq!(AutoDismiss::new(0), AutoDismiss::NEVER);
        assert!(AutoDismiss::NEVER.as_duration().is_none());
    }

    #[test]
    fn new_keeps_long_delays() {
        assert_eq!(AutoDismiss::new(90_000).millis(), 90_000);
        assert_eq!(AutoDismiss::new(u32::MAX).millis(), u32::MAX);
    }

    #[test]
    fn clamped_caps_at_maximum() {
        assert_eq!(AutoDismiss::clamped(u32::MAX).millis(), MAX_AUTO_DISMISS_MS);
        assert_eq!(AutoDismiss::clamped(0), AutoDismiss::NEVER);
        assert_eq!(AutoDismiss::clamped(5000).millis(), 5000);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(AutoDismiss::new(1).millis(), 1);
        assert_eq!(AutoDismiss::new(5000).millis(), 5000);
    }
}
