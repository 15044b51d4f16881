// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, radius};
use iced::widget::text_input::{Status, Style};
use iced::{Border, Theme};

/// Bordered single-line field; the border takes the primary color on focus.
pub fn field(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let (background, border_color, value) = match status {
        Status::Active | Status::Hovered => (
            palette.background.base.color,
            palette.background.strong.color,
            palette.background.base.text,
        ),
        Status::Focused { .. } => (
            palette.background.base.color,
            palette.primary.strong.color,
            palette.background.base.text,
        ),
        Status::Disabled => (
            palette.background.weak.color,
            palette.background.strong.color,
            palette.background.strong.text,
        ),
    };

    Style {
        background: background.into(),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        icon: palette.background.weak.text,
        placeholder: palette.background.strong.text,
        value,
        selection: palette.primary.weak.color,
    }
}
