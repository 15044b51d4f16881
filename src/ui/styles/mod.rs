// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all widgets.

pub mod button;
pub mod container;
pub mod text_input;

use iced::widget::svg;
use iced::Theme;

/// Tints a glyph with the theme's text color.
pub fn tinted_svg(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}
