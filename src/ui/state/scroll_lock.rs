// SPDX-License-Identifier: MPL-2.0
//! Page scroll lock shared between the host page and modal widgets.
//!
//! The host owns a [`ScrollLock`] and checks [`ScrollLock::is_locked`] when
//! deciding whether its content may scroll. Modal widgets hold a
//! [`ScrollLockGuard`] while they are open. The lock is released when the
//! guard is dropped, so closing the widget and tearing it down abruptly
//! both restore scrolling.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared handle counting active scroll lock holders.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    /// Creates an unlocked scroll lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the lock. Scrolling stays suppressed until the guard drops.
    #[must_use = "dropping the guard releases the scroll lock immediately"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let holders = self.holders.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(holders, "scroll lock acquired");
        ScrollLockGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    /// Returns whether any holder currently suppresses scrolling.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Returns the number of active holders.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Relaxed)
    }
}

/// Keeps the page scroll lock engaged for as long as it lives.
#[derive(Debug)]
pub struct ScrollLockGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.holders.fetch_sub(1, Ordering::Relaxed) - 1;
        tracing::debug!(holders, "scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_lock_is_unlocked() {
        assert!(!ScrollLock::new().is_locked());
    }

    #[test]
    fn guard_locks_until_dropped() {
        let lock = ScrollLock::new();
        let guard = lock.acquire();
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn clones_share_the_same_counter() {
        let lock = ScrollLock::new();
        let page_view = lock.clone();

        let first = lock.acquire();
        let second = page_view.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert!(page_view.is_locked());
        drop(second);
        assert!(!page_view.is_locked());
    }
}
