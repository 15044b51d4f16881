// SPDX-License-Identifier: MPL-2.0
//! Single-line text field with clear and password-reveal affordances.
//!
//! The field works in one of two value modes, chosen once at construction:
//!
//! - **Controlled**: the host owns the value. It mirrors every external update
//!   into the field with [`State::sync`] and decides what to do with the
//!   [`ValueChange`]s the field reports.
//! - **Uncontrolled**: the field owns the value and reports changes for
//!   information only.
//!
//! Switching modes during the field's lifetime is not supported; a `sync` on
//! an uncontrolled field is ignored.
//!
//! The clear action reports a [`ValueChange`] tagged [`ChangeSource::Clear`],
//! which carries the same payload as a user edit, and returns focus to the
//! input.

use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{operation, text_input, Id, Row};
use iced::{Element, Length, Task};

/// Accessible label of the clear control.
pub const CLEAR_LABEL: &str = "Clear input";
/// Accessible label of the reveal control while the value is masked.
pub const SHOW_PASSWORD_LABEL: &str = "Show password";
/// Accessible label of the reveal control while the value is visible.
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// Kind of value the field edits.
///
/// Only [`Kind::Password`] changes behavior (masking and the reveal control);
/// the other kinds are carried for hosts that validate or format values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Text,
    Password,
    Number,
    Email,
    Tel,
    Url,
}

/// Who owns the field's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    Controlled,
    Uncontrolled,
}

/// Origin of a reported value change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// The user edited the text.
    User,
    /// The clear control was activated.
    Clear,
}

/// A value change reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub value: String,
    pub source: ChangeSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Ownership {
    Controlled { external: String },
    Uncontrolled,
}

/// Messages emitted by the field's controls.
#[derive(Debug, Clone)]
pub enum Message {
    Input(String),
    Submit,
    Clear,
    TogglePasswordReveal,
}

/// Effects reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Changed(ValueChange),
    Submitted(String),
}

/// Text field state.
#[derive(Debug, Clone)]
pub struct State {
    id: Id,
    kind: Kind,
    clearable: bool,
    placeholder: String,
    disabled: bool,
    ownership: Ownership,
    /// Locally tracked value; in controlled mode a shadow of the last edit or sync.
    internal: String,
    password_revealed: bool,
}

impl State {
    /// Creates a field that owns its value, starting empty.
    #[must_use]
    pub fn uncontrolled(kind: Kind) -> Self {
        Self::with_ownership(kind, Ownership::Uncontrolled, String::new())
    }

    /// Creates a field whose value is owned by the host.
    #[must_use]
    pub fn controlled(kind: Kind, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::with_ownership(
            kind,
            Ownership::Controlled {
                external: value.clone(),
            },
            value,
        )
    }

    fn with_ownership(kind: Kind, ownership: Ownership, internal: String) -> Self {
        Self {
            id: Id::unique(),
            kind,
            clearable: false,
            placeholder: String::new(),
            disabled: false,
            ownership,
            internal,
            password_revealed: false,
        }
    }

    /// Offers a clear control whenever the value is non-empty.
    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Disables editing. Clear and reveal controls stay usable.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the starting value of an uncontrolled field.
    #[must_use]
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        if self.ownership == Ownership::Uncontrolled {
            self.internal = value.into();
        }
        self
    }

    /// Mirrors the host's value into a controlled field.
    ///
    /// Call this on every external update. Ignored in uncontrolled mode.
    pub fn sync(&mut self, value: impl Into<String>) {
        match &mut self.ownership {
            Ownership::Controlled { external } => {
                let value = value.into();
                self.internal.clone_from(&value);
                *external = value;
            }
            Ownership::Uncontrolled => {
                tracing::debug!("ignoring external value on an uncontrolled text field");
            }
        }
    }

    #[must_use]
    pub fn mode(&self) -> ValueMode {
        match self.ownership {
            Ownership::Controlled { .. } => ValueMode::Controlled,
            Ownership::Uncontrolled => ValueMode::Uncontrolled,
        }
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn id(&self) -> Id {
        self.id.clone()
    }

    /// The value shown in the field: the host's in controlled mode,
    /// the locally tracked one otherwise.
    #[must_use]
    pub fn value(&self) -> &str {
        match &self.ownership {
            Ownership::Controlled { external } => external,
            Ownership::Uncontrolled => &self.internal,
        }
    }

    /// The locally tracked value.
    #[must_use]
    pub fn internal_value(&self) -> &str {
        &self.internal
    }

    #[must_use]
    pub fn is_password_revealed(&self) -> bool {
        self.password_revealed
    }

    /// Whether the value is rendered masked.
    #[must_use]
    pub fn is_masked(&self) -> bool {
        self.kind == Kind::Password && !self.password_revealed
    }

    #[must_use]
    pub fn shows_clear_control(&self) -> bool {
        self.clearable && !self.value().is_empty()
    }

    #[must_use]
    pub fn shows_reveal_control(&self) -> bool {
        self.kind == Kind::Password
    }

    /// Handles a field message.
    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Input(value) => {
                if self.disabled {
                    return (Effect::None, Task::none());
                }
                self.internal.clone_from(&value);
                (
                    Effect::Changed(ValueChange {
                        value,
                        source: ChangeSource::User,
                    }),
                    Task::none(),
                )
            }
            Message::Submit => (Effect::Submitted(self.value().to_string()), Task::none()),
            Message::Clear => {
                if !self.shows_clear_control() {
                    return (Effect::None, Task::none());
                }
                self.internal.clear();
                (
                    Effect::Changed(ValueChange {
                        value: String::new(),
                        source: ChangeSource::Clear,
                    }),
                    operation::focus(self.id.clone()),
                )
            }
            Message::TogglePasswordReveal => {
                if self.shows_reveal_control() {
                    self.password_revealed = !self.password_revealed;
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Renders the field and its auxiliary controls.
    pub fn view(&self) -> Element<'_, Message> {
        let mut input = text_input(&self.placeholder, self.value())
            .id(self.id.clone())
            .secure(self.is_masked())
            .padding(spacing::XS)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .style(styles::text_input::field);

        if !self.disabled {
            input = input.on_input(Message::Input).on_submit(Message::Submit);
        }

        let mut actions = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center);

        if self.shows_clear_control() {
            actions = actions.push(icon_button(icons::cross(), CLEAR_LABEL, Message::Clear));
        }

        if self.shows_reveal_control() {
            let (icon, label) = if self.password_revealed {
                (icons::eye_off(), HIDE_PASSWORD_LABEL)
            } else {
                (icons::eye(), SHOW_PASSWORD_LABEL)
            };
            actions = actions.push(icon_button(icon, label, Message::TogglePasswordReveal));
        }

        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .width(Length::Fixed(sizing::TEXT_FIELD_WIDTH))
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .push(input)
            .push(actions)
            .into()
    }
}
