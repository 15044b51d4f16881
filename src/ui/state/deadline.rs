// SPDX-License-Identifier: MPL-2.0
//! One-shot timer expressed as an absolute instant.
//!
//! A `Deadline` never schedules anything by itself. Widgets arm it, the host
//! feeds it the current time from a tick subscription, and it fires at most
//! once per arming. Cancelling (or dropping the owner) is all it takes to make
//! sure no stray expiry is ever observed.

use std::time::{Duration, Instant};

/// An optional point in time at which something should happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// Creates a disarmed deadline.
    #[must_use]
    pub fn disarmed() -> Self {
        Self(None)
    }

    /// Arms the deadline to expire `after` the given instant.
    ///
    /// Re-arming replaces any previous expiry.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.0 = Some(now + after);
    }

    /// Disarms the deadline. Returns whether it was armed.
    pub fn cancel(&mut self) -> bool {
        self.0.take().is_some()
    }

    /// Returns whether the deadline is armed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.0.is_some()
    }

    /// Returns the expiry instant, if armed.
    #[must_use]
    pub fn due_at(&self) -> Option<Instant> {
        self.0
    }

    /// Fires the deadline if it has expired at `now`.
    ///
    /// Returns `true` exactly once per arming; the deadline is disarmed
    /// as a side effect.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.0 {
            Some(at) if now >= at => {
                self.0 = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disarmed_deadline_never_fires() {
        let mut deadline = Deadline::disarmed();
        let now = Instant::now();
        assert!(!deadline.fire(now + Duration::from_secs(3600)));
        assert!(!deadline.is_armed());
    }

    #[test]
    fn fires_only_after_expiry() {
        let now = Instant::now();
        let mut deadline = Deadline::default();
        deadline.arm(now, Duration::from_millis(300));

        assert!(!deadline.fire(now + Duration::from_millis(299)));
        assert!(deadline.fire(now + Duration::from_millis(300)));
    }

    #[test]
    fn fires_at_most_once_per_arming() {
        let now = Instant::now();
        let mut deadline = Deadline::default();
        deadline.arm(now, Duration::from_millis(10));

        assert!(deadline.fire(now + Duration::from_millis(50)));
        assert!(!deadline.fire(now + Duration::from_millis(60)));
    }

    #[test]
    fn cancel_prevents_firing() {
        let now = Instant::now();
        let mut deadline = Deadline::default();
        deadline.arm(now, Duration::from_millis(10));

        assert!(deadline.cancel());
        assert!(!deadline.cancel());
        assert!(!deadline.fire(now + Duration::from_secs(1)));
    }

    #[test]
    fn rearming_moves_the_expiry() {
        let now = Instant::now();
        let mut deadline = Deadline::default();
        deadline.arm(now, Duration::from_millis(100));
        deadline.arm(now + Duration::from_millis(80), Duration::from_millis(100));

        assert_eq!(deadline.due_at(), Some(now + Duration::from_millis(180)));
        assert!(!deadline.fire(now + Duration::from_millis(120)));
    }
}
