// SPDX-License-Identifier: MPL-2.0
//! Reusable widget state primitives.
//!
//! These types carry the side-effect bookkeeping shared by the widgets:
//! one-shot timers, validated auto-dismiss durations and the page scroll lock.
//! Each one releases what it holds when disarmed or dropped.

pub mod auto_dismiss;
pub mod deadline;
pub mod scroll_lock;

pub use auto_dismiss::AutoDismiss;
pub use deadline::Deadline;
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
