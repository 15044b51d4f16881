// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents and an optional close control.
//! While a notification is exiting, the card is drawn with reduced opacity
//! and, for the slide transition, shifted toward the screen edge.

use super::notification::{Notification, Severity, Transition};
use super::Message;
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::{self, Svg};
use iced::widget::{Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Accessible label of the close control.
pub const CLOSE_LABEL: &str = "Close notification";

/// Renders a single notification, or nothing once it stops being rendered.
pub fn view(notification: &Notification) -> Option<Element<'_, Message>> {
    if !notification.is_rendered() {
        return None;
    }

    let accent = notification.severity().color();
    let alpha = exit_alpha(notification);

    let icon = icons::sized(severity_icon(notification.severity()), sizing::ICON_MD).style(
        move |_theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(iced::Color { a: alpha, ..accent }),
        },
    );

    let message = Text::new(notification.message()).size(typography::BODY);

    // Layout: [icon] [message] [close]
    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if notification.shows_close_control() {
        content = content.push(icon_button(
            icons::cross(),
            CLOSE_LABEL,
            Message::Close(notification.id()),
        ));
    }

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| styles::container::toast(theme, accent, alpha));

    Some(
        Row::new()
            .push(card)
            .push(Space::new().width(Length::Fixed(slide_offset(notification))))
            .into(),
    )
}

/// Card opacity for the current phase and transition style.
fn exit_alpha(notification: &Notification) -> f32 {
    if !notification.is_exiting() {
        return opacity::OPAQUE;
    }
    match notification.transition_style() {
        Transition::Fade => opacity::FADE_EXIT,
        Transition::Slide => opacity::SLIDE_EXIT,
    }
}

/// Trailing gap that shifts an exiting slide toast away from its resting place.
fn slide_offset(notification: &Notification) -> f32 {
    if notification.is_exiting() && notification.transition_style() == Transition::Slide {
        0.0
    } else {
        spacing::SLIDE_EXIT_OFFSET
    }
}

/// Returns the glyph matching the severity level.
fn severity_icon(severity: Severity) -> Svg<'static> {
    match severity {
        Severity::Success => icons::checkmark(),
        Severity::Info => icons::info(),
        Severity::Warning => icons::warning(),
        Severity::Error => icons::alert(),
    }
}
