// SPDX-License-Identifier: MPL-2.0
//! Collapsible sidebar navigation menu.
//!
//! The menu renders a slide-in panel holding a nested tree of
//! [`MenuEntry`] values. Each branch can be expanded and collapsed; selecting
//! a leaf always asks the host to close the whole menu. While open the menu
//! holds the page [`ScrollLock`](crate::ui::state::ScrollLock) and, if
//! outside dismissal is enabled, listens for backdrop presses and Escape.
//!
//! The host keeps ownership of the open flag:
//!
//! ```ignore
//! for event in app.menu.handle_message(message) {
//!     match event {
//!         sidebar_menu::Event::RequestClose => app.menu.set_open(false),
//!         sidebar_menu::Event::Navigate(href) => app.go_to(&href),
//!         sidebar_menu::Event::Activated(action) => app.run(action),
//!     }
//! }
//! ```

pub mod entry;
pub mod state;
pub mod view;

pub use entry::MenuEntry;
pub use state::State;
pub use view::{view, visible_entries, VisibleEntry};

use iced::{event, keyboard, Subscription};

/// Messages produced by the menu widgets and its listeners.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<A> {
    /// An entry's label was pressed.
    Activate {
        id: String,
        branch: bool,
        href: Option<String>,
        action: Option<A>,
    },
    /// The dedicated expand control of a branch was pressed.
    ToggleExpanded(String),
    /// A press landed on the backdrop, outside the panel.
    BackdropPressed,
    /// Escape was pressed while the menu was open.
    EscapePressed,
    /// The header close control was pressed.
    ClosePressed,
}

/// Outcomes reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<A> {
    /// The menu wants to be closed.
    RequestClose,
    /// A leaf with a navigation target was selected.
    Navigate(String),
    /// An entry carrying an action was activated.
    Activated(A),
}

/// Escape listener, present only while the menu listens for dismissal.
pub fn subscription<A>(state: &State) -> Subscription<Message<A>>
where
    A: Send + 'static,
{
    if state.listens_for_dismissal() {
        event::listen_with(escape_listener::<A>)
    } else {
        Subscription::none()
    }
}

fn escape_listener<A>(
    event: event::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message<A>> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ScrollLock;

    fn press(named: keyboard::key::Named, code: keyboard::key::Code) -> event::Event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            modified_key: keyboard::Key::Named(named),
            physical_key: keyboard::key::Physical::Code(code),
            location: keyboard::Location::Standard,
            modifiers: keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn escape_maps_to_dismissal() {
        let message = escape_listener::<()>(
            press(keyboard::key::Named::Escape, keyboard::key::Code::Escape),
            event::Status::Ignored,
            iced::window::Id::unique(),
        );
        assert_eq!(message, Some(Message::EscapePressed));
    }

    #[test]
    fn other_keys_are_ignored() {
        let message = escape_listener::<()>(
            press(keyboard::key::Named::Enter, keyboard::key::Code::Enter),
            event::Status::Ignored,
            iced::window::Id::unique(),
        );
        assert_eq!(message, None);
    }

    #[test]
    fn subscription_builds_in_every_state() {
        let mut state = State::new(ScrollLock::new());
        let _closed = subscription::<()>(&state);
        state.set_open(true);
        let _open = subscription::<()>(&state);
    }
}
