// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the widgets. Constants are organized by widget.

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default auto-dismiss delay for notifications (in milliseconds).
pub const DEFAULT_AUTO_DISMISS_MS: u32 = 3000;

/// Maximum auto-dismiss delay (in milliseconds). Zero disables auto-dismiss.
pub const MAX_AUTO_DISMISS_MS: u32 = 60_000;

/// Fixed delay between the start of the exit transition and the dismissal
/// report (in milliseconds). Matches the exit transition duration.
pub const EXIT_GRACE_DELAY_MS: u64 = 300;

/// Interval of the tick subscription driving notification timers.
pub const TIMER_TICK_MS: u64 = 50;

/// Whether notifications show a close control by default.
pub const DEFAULT_SHOW_CLOSE_CONTROL: bool = true;

// ==========================================================================
// Text Field Defaults
// ==========================================================================

/// Whether text fields offer a clear action by default.
pub const DEFAULT_CLEARABLE: bool = false;

// ==========================================================================
// Menu Defaults
// ==========================================================================

/// Default sidebar menu title.
pub const DEFAULT_MENU_TITLE: &str = "Menu";

/// Whether the sidebar menu closes on backdrop press and Escape by default.
pub const DEFAULT_DISMISS_ON_OUTSIDE: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTO_DISMISS_MS <= MAX_AUTO_DISMISS_MS);
    assert!(TIMER_TICK_MS < EXIT_GRACE_DELAY_MS);
};
