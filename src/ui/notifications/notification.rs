// SPDX-License-Identifier: MPL-2.0
//! Notification state machine.
//!
//! A notification moves through three phases:
//!
//! ```text
//! Shown --(close pressed | auto-dismiss expired)--> Exiting --(300ms)--> Gone
//! ```
//!
//! Both timers are [`Deadline`]s owned by the notification. They are only
//! armed while their preconditions hold and are disarmed on every transition
//! that invalidates them, so dropping a notification cancels everything it
//! had pending. The notification never removes itself from the host's list;
//! reaching `Gone` produces a single [`Dismissed`](Event::Dismissed) event and
//! the host decides what to do with it.

use crate::config::EXIT_GRACE_DELAY_MS;
use crate::ui::design_tokens::palette;
use crate::ui::state::{AutoDismiss, Deadline};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Fixed delay between the start of the exit transition and the dismissal report.
pub const EXIT_GRACE_DELAY: Duration = Duration::from_millis(EXIT_GRACE_DELAY_MS);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level; purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Enter/exit transition style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    #[default]
    Slide,
    Fade,
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shown,
    Exiting,
    Gone,
}

/// Lifecycle events reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The exit transition started.
    Exiting(NotificationId),
    /// The exit transition finished; the host may discard the notification.
    Dismissed(NotificationId),
}

/// A single dismissible message.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    auto_dismiss: AutoDismiss,
    show_close_control: bool,
    visible: bool,
    transition: Transition,
    phase: Phase,
    auto_dismiss_timer: Deadline,
    exit_timer: Deadline,
}

impl Notification {
    /// Creates a shown notification with default options.
    ///
    /// Timers are armed by [`mount`](Self::mount), not here.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            severity,
            auto_dismiss: AutoDismiss::default(),
            show_close_control: true,
            visible: true,
            transition: Transition::default(),
            phase: Phase::Shown,
            auto_dismiss_timer: Deadline::disarmed(),
            exit_timer: Deadline::disarmed(),
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the auto-dismiss delay (`AutoDismiss::NEVER` disables it).
    #[must_use]
    pub fn auto_dismiss(mut self, delay: AutoDismiss) -> Self {
        self.auto_dismiss = delay;
        self
    }

    #[must_use]
    pub fn show_close_control(mut self, show: bool) -> Self {
        self.show_close_control = show;
        self
    }

    #[must_use]
    pub fn transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Sets the initial external visibility flag.
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Starts the lifecycle: arms the auto-dismiss timer if applicable.
    ///
    /// Call once when the host starts displaying the notification.
    pub fn mount(&mut self, now: Instant) {
        self.rearm_auto_dismiss(now);
    }

    /// Updates the external visibility flag and re-evaluates the timer.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if self.visible != visible {
            self.visible = visible;
            self.rearm_auto_dismiss(now);
        }
    }

    /// Changes the auto-dismiss delay and re-evaluates the timer.
    pub fn set_auto_dismiss(&mut self, delay: AutoDismiss, now: Instant) {
        if self.auto_dismiss != delay {
            self.auto_dismiss = delay;
            self.rearm_auto_dismiss(now);
        }
    }

    /// Starts the exit sequence (manual close).
    ///
    /// Returns the `Exiting` event, or `None` if the notification is already
    /// exiting or gone.
    pub fn dismiss(&mut self, now: Instant) -> Option<Event> {
        if self.phase != Phase::Shown {
            return None;
        }
        self.phase = Phase::Exiting;
        self.auto_dismiss_timer.cancel();
        self.exit_timer.arm(now, EXIT_GRACE_DELAY);
        tracing::debug!(id = self.id.0, "notification exiting");
        Some(Event::Exiting(self.id))
    }

    /// Advances timers to `now` and returns the transition that happened, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Event> {
        // The exit delay runs from the auto-dismiss expiry, not from the tick.
        if let Some(due) = self.auto_dismiss_timer.due_at() {
            if self.auto_dismiss_timer.fire(now) {
                return self.dismiss(due);
            }
        }
        if self.exit_timer.fire(now) {
            self.phase = Phase::Gone;
            tracing::debug!(id = self.id.0, "notification dismissed");
            return Some(Event::Dismissed(self.id));
        }
        None
    }

    /// Disarms every pending timer. Dropping the notification has the same effect.
    pub fn cancel_timers(&mut self) {
        self.auto_dismiss_timer.cancel();
        self.exit_timer.cancel();
    }

    /// The auto-dismiss timer runs only while shown, visible and enabled.
    fn rearm_auto_dismiss(&mut self, now: Instant) {
        self.auto_dismiss_timer.cancel();
        if self.phase != Phase::Shown || !self.visible {
            return;
        }
        if let Some(delay) = self.auto_dismiss.as_duration() {
            self.auto_dismiss_timer.arm(now, delay);
        }
    }

    /// Returns whether any timer is pending.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.auto_dismiss_timer.is_armed() || self.exit_timer.is_armed()
    }

    /// Returns the earliest pending timer expiry.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (
            self.auto_dismiss_timer.due_at(),
            self.exit_timer.due_at(),
        ) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Whether the notification produces any output.
    ///
    /// An exiting notification stays rendered for its exit transition even
    /// if the host hid it meanwhile; a gone one renders nothing.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        match self.phase {
            Phase::Shown => self.visible,
            Phase::Exiting => true,
            Phase::Gone => false,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn shows_close_control(&self) -> bool {
        self.show_close_control
    }

    #[must_use]
    pub fn transition_style(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn auto_dismiss_delay(&self) -> AutoDismiss {
        self.auto_dismiss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn defaults_match_widget_contract() {
        let n = Notification::new(Severity::default(), "hi");
        assert_eq!(n.severity(), Severity::Info);
        assert_eq!(n.auto_dismiss_delay().millis(), 3000);
        assert!(n.shows_close_control());
        assert!(n.is_visible());
        assert_eq!(n.transition_style(), Transition::Slide);
        assert_eq!(n.phase(), Phase::Shown);
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn nothing_is_armed_before_mount() {
        let n = Notification::info("x");
        assert!(!n.has_pending_timer());
    }

    #[test]
    fn auto_dismiss_runs_full_lifecycle() {
        let t0 = Instant::now();
        let mut n = Notification::info("saved").auto_dismiss(AutoDismiss::new(1000));
        n.mount(t0);

        assert_eq!(n.tick(t0 + ms(999)), None);
        assert_eq!(n.tick(t0 + ms(1000)), Some(Event::Exiting(n.id())));
        assert!(n.is_exiting());

        assert_eq!(n.tick(t0 + ms(1299)), None);
        assert_eq!(n.tick(t0 + ms(1300)), Some(Event::Dismissed(n.id())));
        assert_eq!(n.phase(), Phase::Gone);
        assert!(!n.is_rendered());
        assert!(!n.has_pending_timer());
    }

    #[test]
    fn coarse_tick_does_not_delay_dismissal() {
        let t0 = Instant::now();
        let mut n = Notification::info("saved").auto_dismiss(AutoDismiss::new(1000));
        n.mount(t0);

        assert_eq!(n.tick(t0 + ms(1040)), Some(Event::Exiting(n.id())));
        assert_eq!(n.next_deadline(), Some(t0 + ms(1000) + EXIT_GRACE_DELAY));
        assert_eq!(n.tick(t0 + ms(1300)), Some(Event::Dismissed(n.id())));
    }

    #[test]
    fn manual_close_reports_once() {
        let t0 = Instant::now();
        let mut n = Notification::error("boom").auto_dismiss(AutoDismiss::NEVER);
        n.mount(t0);

        assert!(n.dismiss(t0 + ms(10)).is_some());
        assert!(n.dismiss(t0 + ms(20)).is_none());

        let dismissed = (0..20)
            .filter_map(|step| n.tick(t0 + ms(step * 50)))
            .filter(|event| matches!(event, Event::Dismissed(_)))
            .count();
        assert_eq!(dismissed, 1);
    }

    #[test]
    fn manual_close_cancels_auto_dismiss() {
        let t0 = Instant::now();
        let mut n = Notification::info("x");
        n.mount(t0);
        n.dismiss(t0 + ms(100));

        assert_eq!(n.next_deadline(), Some(t0 + ms(400)));
    }

    #[test]
    fn hidden_notification_does_not_arm_timer() {
        let t0 = Instant::now();
        let mut n = Notification::info("x").visible(false);
        n.mount(t0);

        assert!(!n.has_pending_timer());
        assert!(!n.is_rendered());
        assert_eq!(n.tick(t0 + ms(10_000)), None);
    }

    #[test]
    fn hiding_cancels_and_showing_rearms() {
        let t0 = Instant::now();
        let mut n = Notification::info("x");
        n.mount(t0);

        n.set_visible(false, t0 + ms(2000));
        assert!(!n.has_pending_timer());

        n.set_visible(true, t0 + ms(5000));
        assert_eq!(n.next_deadline(), Some(t0 + ms(8000)));
    }

    #[test]
    fn visibility_does_not_resurrect_gone_notification() {
        let t0 = Instant::now();
        let mut n = Notification::info("x").auto_dismiss(AutoDismiss::NEVER);
        n.mount(t0);
        n.dismiss(t0);
        n.tick(t0 + EXIT_GRACE_DELAY);

        n.set_visible(false, t0 + ms(400));
        n.set_visible(true, t0 + ms(500));
        assert_eq!(n.phase(), Phase::Gone);
        assert!(!n.has_pending_timer());
    }

    #[test]
    fn exiting_notification_stays_rendered_when_hidden() {
        let t0 = Instant::now();
        let mut n = Notification::info("x");
        n.mount(t0);
        n.dismiss(t0);
        n.set_visible(false, t0 + ms(50));

        assert!(n.is_rendered());
        assert_eq!(n.tick(t0 + EXIT_GRACE_DELAY), Some(Event::Dismissed(n.id())));
    }

    #[test]
    fn disabling_auto_dismiss_disarms_timer() {
        let t0 = Instant::now();
        let mut n = Notification::info("x");
        n.mount(t0);
        n.set_auto_dismiss(AutoDismiss::NEVER, t0 + ms(1));

        assert!(!n.has_pending_timer());
    }

    #[test]
    fn cancel_timers_prevents_stray_events() {
        let t0 = Instant::now();
        let mut n = Notification::info("x");
        n.mount(t0);
        n.dismiss(t0);
        n.cancel_timers();

        assert_eq!(n.tick(t0 + ms(60_000)), None);
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Error.color());
        assert_ne!(Severity::Warning.color(), Severity::Info.color());
    }
}
