// SPDX-License-Identifier: MPL-2.0
//! Open/closed and expand state of the sidebar menu.

use super::{Event, Message};
use crate::config::{DEFAULT_DISMISS_ON_OUTSIDE, DEFAULT_MENU_TITLE};
use crate::ui::state::{ScrollLock, ScrollLockGuard};
use std::collections::HashSet;

/// Menu state owned by the host application.
///
/// The host decides when the menu is open through [`State::set_open`]; the
/// menu only ever *requests* closing through [`Event::RequestClose`].
#[derive(Debug)]
pub struct State {
    open: bool,
    title: String,
    dismiss_on_outside_activation: bool,
    expanded: HashSet<String>,
    scroll_lock: ScrollLock,
    /// Held exactly while open; dropping the state releases it too.
    scroll_guard: Option<ScrollLockGuard>,
}

impl State {
    /// Creates a closed menu that locks `scroll_lock` while open.
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            open: false,
            title: DEFAULT_MENU_TITLE.to_string(),
            dismiss_on_outside_activation: DEFAULT_DISMISS_ON_OUTSIDE,
            expanded: HashSet::new(),
            scroll_lock,
            scroll_guard: None,
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn dismiss_on_outside_activation(mut self, dismiss: bool) -> Self {
        self.dismiss_on_outside_activation = dismiss;
        self
    }

    /// Opens or closes the menu.
    ///
    /// Every transition clears the expand state, so the menu always opens
    /// fully collapsed.
    pub fn set_open(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        self.expanded.clear();
        self.scroll_guard = open.then(|| self.scroll_lock.acquire());
        tracing::debug!(open, "sidebar menu toggled");
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn menu_title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn dismisses_on_outside_activation(&self) -> bool {
        self.dismiss_on_outside_activation
    }

    /// Whether backdrop presses and Escape should be listened for.
    #[must_use]
    pub fn listens_for_dismissal(&self) -> bool {
        self.open && self.dismiss_on_outside_activation
    }

    /// Returns whether the node's children are shown.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Ids of every expanded node.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Flips a node's expand state.
    pub fn toggle(&mut self, id: &str) {
        if self.expanded.remove(id) {
            tracing::debug!(id, "menu node collapsed");
        } else {
            self.expanded.insert(id.to_string());
            tracing::debug!(id, "menu node expanded");
        }
    }

    /// Applies a message and returns the resulting events in order.
    ///
    /// Messages arriving while closed are stale and ignored.
    pub fn handle_message<A>(&mut self, message: Message<A>) -> Vec<Event<A>> {
        if !self.open {
            tracing::debug!("sidebar menu message ignored while closed");
            return Vec::new();
        }

        match message {
            Message::Activate {
                id,
                branch: true,
                action,
                ..
            } => {
                self.toggle(&id);
                action.map(Event::Activated).into_iter().collect()
            }
            Message::Activate {
                branch: false,
                href,
                action,
                ..
            } => {
                let mut events = vec![Event::RequestClose];
                events.extend(href.map(Event::Navigate));
                events.extend(action.map(Event::Activated));
                events
            }
            Message::ToggleExpanded(id) => {
                self.toggle(&id);
                Vec::new()
            }
            Message::BackdropPressed | Message::EscapePressed => {
                if self.dismiss_on_outside_activation {
                    vec![Event::RequestClose]
                } else {
                    Vec::new()
                }
            }
            Message::ClosePressed => vec![Event::RequestClose],
        }
    }
}
