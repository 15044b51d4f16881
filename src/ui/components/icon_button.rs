// SPDX-License-Identifier: MPL-2.0
//! Icon-only button carrying an accessible label.
//!
//! Iced has no ARIA layer, so the label that a screen reader would announce
//! is surfaced as a tooltip instead.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, tooltip, Text};
use iced::Element;

/// Builds a borderless icon button that emits `message` when pressed.
pub fn icon_button<'a, Message>(
    icon: Svg<'static>,
    label: &'a str,
    message: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'static,
{
    let glyph: Element<'static, Message> = icons::sized(icon, sizing::ICON_SM)
        .style(styles::tinted_svg)
        .into();

    let control: Element<'static, Message> = button(glyph)
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::icon_ghost)
        .into();

    tooltip(
        control,
        container(Text::new(label)).padding(spacing::XXS),
        tooltip::Position::Bottom,
    )
    .gap(spacing::XXS)
    .style(styles::container::tooltip)
    .into()
}
