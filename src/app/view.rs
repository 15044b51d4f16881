// SPDX-License-Identifier: MPL-2.0
//! View rendering for the gallery.
//!
//! The window stacks the page, the sidebar menu and the toast host, in that
//! order. While the page scroll lock is held the page is rendered without
//! its scrollable wrapper.

use super::{GalleryField, MenuAction, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{self, Notification, Severity};
use crate::ui::sidebar_menu::{self, MenuEntry};
use crate::ui::state::ScrollLock;
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub fields: &'a [GalleryField],
    pub toasts: &'a [Notification],
    pub menu: &'a sidebar_menu::State,
    pub entries: &'a [MenuEntry<MenuAction>],
    pub scroll_lock: &'a ScrollLock,
    pub status: &'a str,
}

/// Renders the gallery.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header())
        .push(fields_section(ctx.fields))
        .push(toasts_section())
        .push(Text::new(ctx.status).size(typography::CAPTION));

    let page: Element<'_, Message> = if ctx.scroll_lock.is_locked() {
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(sidebar_menu::view(ctx.menu, ctx.entries).map(Message::Menu))
        .push(notifications::host::view(ctx.toasts).map(Message::Toast))
        .into()
}

fn header<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            button(Text::new("Open menu"))
                .on_press(Message::OpenMenu)
                .style(styles::button::primary),
        )
        .push(Text::new("Widget gallery").size(typography::TITLE_MD))
        .into()
}

fn fields_section(fields: &[GalleryField]) -> Element<'_, Message> {
    let rows = fields.iter().enumerate().map(|(slot, field)| {
        Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(
                Text::new(field.label)
                    .size(typography::BODY)
                    .width(Length::Fixed(160.0)),
            )
            .push(
                field
                    .state
                    .view()
                    .map(move |message| Message::Field(slot, message)),
            )
            .into()
    });

    section("Text fields", Column::with_children(rows).spacing(spacing::SM))
}

fn toasts_section<'a>() -> Element<'a, Message> {
    let severities = [
        ("Success", Severity::Success),
        ("Info", Severity::Info),
        ("Warning", Severity::Warning),
        ("Error", Severity::Error),
    ];

    let triggers = severities
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, (label, severity)| {
            row.push(
                button(Text::new(label))
                    .on_press(Message::ShowToast(severity))
                    .style(styles::button::primary),
            )
        })
        .push(
            button(Text::new("Persistent"))
                .on_press(Message::ShowPersistentToast)
                .style(styles::button::primary),
        );

    let visibility = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Hide all")).on_press(Message::SetToastsVisible(false)))
        .push(button(Text::new("Show all")).on_press(Message::SetToastsVisible(true)));

    section(
        "Notifications",
        Column::new()
            .spacing(spacing::SM)
            .push(triggers)
            .push(visibility),
    )
}

fn section<'a>(title: &'a str, body: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body)
        .into()
}
