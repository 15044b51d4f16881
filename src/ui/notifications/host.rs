// SPDX-License-Identifier: MPL-2.0
//! Layout container for a group of toasts.
//!
//! The host stacks whatever notifications it is given in the given order,
//! anchored to the bottom-right corner. It holds no state and never adds,
//! removes or reorders notifications.

use super::{toast, Message, Notification};
use crate::ui::design_tokens::spacing;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

/// Renders the toast overlay.
///
/// Notifications that currently render nothing take no space.
pub fn view<'a>(notifications: &'a [Notification]) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> =
        notifications.iter().filter_map(toast::view).collect();

    if toasts.is_empty() {
        return Container::new(Column::new())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}
