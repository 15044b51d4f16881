// SPDX-License-Identifier: MPL-2.0
//! Container styles for toasts, the sidebar panel and its backdrop.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toast card with a severity accent border.
///
/// `exit_alpha` is applied to the whole card while the exit transition plays.
pub fn toast(theme: &Theme, accent: Color, exit_alpha: f32) -> container::Style {
    let bg = theme.extended_palette().background.base.color;
    let text = theme.palette().text;

    container::Style {
        background: Some(Background::Color(Color { a: exit_alpha, ..bg })),
        border: Border {
            color: Color {
                a: exit_alpha,
                ..accent
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(Color {
            a: exit_alpha,
            ..text
        }),
        ..Default::default()
    }
}

/// Sliding sidebar panel surface.
pub fn sidebar_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dimmed layer behind the sidebar panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Tooltip bubble for icon-only controls.
pub fn tooltip(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.strong.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
