// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the gallery.
//!
//! Each widget contributes its own subscription, which only exists while the
//! widget has something to listen for: notifications tick while a timer is
//! armed, the menu listens for Escape while it is open and dismissable.

use super::{MenuAction, Message};
use crate::ui::notifications::{self, Notification};
use crate::ui::sidebar_menu;
use iced::Subscription;

/// Combines the widget subscriptions.
pub fn create_subscription(
    toasts: &[Notification],
    menu: &sidebar_menu::State,
) -> Subscription<Message> {
    Subscription::batch([
        notifications::subscription(toasts).map(Message::Toast),
        sidebar_menu::subscription::<MenuAction>(menu).map(Message::Menu),
    ])
}
