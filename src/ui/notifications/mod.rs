// SPDX-License-Identifier: MPL-2.0
//! Dismissible toast notifications.
//!
//! Each [`Notification`] owns its lifecycle: it auto-dismisses after a
//! configurable delay, can be closed manually, plays a short exit transition
//! and then reports [`Event::Dismissed`] exactly once. The [`host`] only lays
//! out the notifications it is given; adding and removing them is up to the
//! application.
//!
//! # Components
//!
//! - [`notification`] - `Notification` state machine with severity levels
//! - [`toast`] - Toast widget rendering a single notification
//! - [`host`] - Bottom-right stack of toasts
//!
//! # Usage
//!
//! ```ignore
//! use iced_ui_kit::ui::notifications::{self, Event, Notification};
//!
//! let mut toast = Notification::success("Profile saved");
//! toast.mount(Instant::now());
//! app.toasts.push(toast);
//!
//! // In update:
//! for event in notifications::update(&mut app.toasts, message) {
//!     if let Event::Dismissed(id) = event {
//!         app.toasts.retain(|n| n.id() != id);
//!     }
//! }
//!
//! // In view:
//! let overlay = notifications::host::view(&app.toasts).map(AppMessage::Toast);
//! ```

pub mod host;
pub mod notification;
pub mod toast;

pub use notification::{
    Event, Notification, NotificationId, Phase, Severity, Transition, EXIT_GRACE_DELAY,
};

use crate::config::TIMER_TICK_MS;
use iced::{time, Subscription};
use std::time::{Duration, Instant};

/// Messages produced by the toast widgets and the timer subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a notification was pressed.
    Close(NotificationId),
    /// Periodic timer tick.
    Tick(Instant),
}

/// Routes a message to the notifications it concerns.
///
/// Returns the lifecycle events in the order they happened.
pub fn update(notifications: &mut [Notification], message: Message) -> Vec<Event> {
    match message {
        Message::Close(id) => notifications
            .iter_mut()
            .find(|n| n.id() == id)
            .and_then(|n| n.dismiss(Instant::now()))
            .into_iter()
            .collect(),
        Message::Tick(now) => notifications
            .iter_mut()
            .filter_map(|n| n.tick(now))
            .collect(),
    }
}

/// Ticks while at least one notification has a pending timer.
pub fn subscription(notifications: &[Notification]) -> Subscription<Message> {
    if notifications.iter().any(Notification::has_pending_timer) {
        time::every(Duration::from_millis(TIMER_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::AutoDismiss;

    #[test]
    fn close_routes_to_matching_notification() {
        let mut list = vec![Notification::info("a"), Notification::info("b")];
        let target = list[1].id();

        let events = update(&mut list, Message::Close(target));

        assert_eq!(events, vec![Event::Exiting(target)]);
        assert!(!list[0].is_exiting());
        assert!(list[1].is_exiting());
    }

    #[test]
    fn close_for_unknown_id_is_ignored() {
        let mut list = vec![Notification::info("a")];
        let events = update(&mut list, Message::Close(NotificationId::new()));
        assert!(events.is_empty());
    }

    #[test]
    fn tick_advances_every_notification() {
        let t0 = Instant::now();
        let mut list = vec![
            Notification::info("a").auto_dismiss(AutoDismiss::new(100)),
            Notification::info("b").auto_dismiss(AutoDismiss::new(200)),
        ];
        for n in &mut list {
            n.mount(t0);
        }

        let events = update(&mut list, Message::Tick(t0 + Duration::from_millis(250)));

        assert_eq!(
            events,
            vec![Event::Exiting(list[0].id()), Event::Exiting(list[1].id())]
        );
    }

    #[test]
    fn subscription_is_idle_without_timers() {
        let list = vec![Notification::info("a").auto_dismiss(AutoDismiss::NEVER)];
        let _subscription = subscription(&list);
        assert!(!list[0].has_pending_timer());
    }
}
