// SPDX-License-Identifier: MPL-2.0
//! Rendering of the sidebar menu.
//!
//! The open menu is a [`Stack`] of two layers: a full-window backdrop that
//! reports presses, and the panel itself wrapped in [`opaque`] so presses on
//! the panel never reach the backdrop. A closed menu renders an empty,
//! zero-size element.

use super::{MenuEntry, Message, State};
use crate::ui::components::icon_button;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{
    button, container, mouse_area, opaque, scrollable, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, Element, Length};

/// Accessible label of the header close control.
pub const CLOSE_LABEL: &str = "Close menu";
/// Accessible label of the expand control on a collapsed branch.
pub const EXPAND_LABEL: &str = "Expand";
/// Accessible label of the expand control on an expanded branch.
pub const COLLAPSE_LABEL: &str = "Collapse";

/// An entry that is currently rendered, with its nesting depth.
#[derive(Debug)]
pub struct VisibleEntry<'a, A> {
    pub depth: usize,
    pub entry: &'a MenuEntry<A>,
}

/// Flattens the tree into the rows that are currently rendered, in order.
///
/// Children appear only below an expanded parent. Traversal follows the
/// supplied tree, so duplicate ids cannot cause unbounded recursion.
pub fn visible_entries<'a, A>(
    state: &State,
    entries: &'a [MenuEntry<A>],
) -> Vec<VisibleEntry<'a, A>> {
    let mut rows = Vec::new();
    if state.is_open() {
        collect(state, entries, 0, &mut rows);
    }
    rows
}

fn collect<'a, A>(
    state: &State,
    entries: &'a [MenuEntry<A>],
    depth: usize,
    rows: &mut Vec<VisibleEntry<'a, A>>,
) {
    for entry in entries {
        rows.push(VisibleEntry { depth, entry });
        if entry.is_branch() && state.is_expanded(entry.id()) {
            collect(state, entry.child_entries(), depth + 1, rows);
        }
    }
}

/// Renders the menu overlay.
pub fn view<'a, A>(state: &'a State, entries: &'a [MenuEntry<A>]) -> Element<'a, Message<A>>
where
    A: Clone + 'static,
{
    if !state.is_open() {
        return Space::new().into();
    }

    let list = visible_entries(state, entries).into_iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, row| column.push(entry_row(state, row)),
    );

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Text::new(state.menu_title()).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(icon_button(icons::cross(), CLOSE_LABEL, Message::ClosePressed));

    let panel = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(header)
            .push(scrollable(list).height(Length::Fill)),
    )
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::sidebar_panel);

    let mut backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    );
    if state.listens_for_dismissal() {
        backdrop = backdrop.on_press(Message::BackdropPressed);
    }

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(
            Container::new(opaque(panel))
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .into()
}

fn entry_row<'a, A>(state: &State, row: VisibleEntry<'a, A>) -> Element<'a, Message<A>>
where
    A: Clone + 'static,
{
    let VisibleEntry { depth, entry } = row;

    let label = button(Text::new(entry.label()).size(typography::BODY))
        .on_press(entry.activation())
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::menu_item);

    let mut line = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fixed(indent(depth))))
        .push(label);

    if entry.is_branch() {
        let (glyph, hint) = if state.is_expanded(entry.id()) {
            (icons::chevron_down(), COLLAPSE_LABEL)
        } else {
            (icons::chevron_right(), EXPAND_LABEL)
        };
        line = line.push(icon_button(glyph, hint, entry.toggle()));
    }

    line.into()
}

/// Left indentation for a given nesting depth.
fn indent(depth: usize) -> f32 {
    // Depth is bounded by the supplied tree.
    #[allow(clippy::cast_precision_loss)]
    let depth = depth as f32;
    depth * spacing::MENU_INDENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::ScrollLock;

    fn tree() -> Vec<MenuEntry<()>> {
        vec![
            MenuEntry::new("1", "Home").href("#home"),
            MenuEntry::new("2", "More").child(
                MenuEntry::new("2-1", "Sub").child(MenuEntry::new("2-1-1", "Deep")),
            ),
        ]
    }

    fn ids(rows: &[VisibleEntry<'_, ()>]) -> Vec<String> {
        rows.iter().map(|row| row.entry.id().to_string()).collect()
    }

    #[test]
    fn closed_menu_has_no_rows() {
        let state = State::new(ScrollLock::new());
        let entries = tree();
        assert!(visible_entries(&state, &entries).is_empty());
    }

    #[test]
    fn children_appear_under_expanded_parent() {
        let mut state = State::new(ScrollLock::new());
        state.set_open(true);
        let entries = tree();
        assert_eq!(ids(&visible_entries(&state, &entries)), vec!["1", "2"]);

        state.toggle("2");
        let rows = visible_entries(&state, &entries);
        assert_eq!(ids(&rows), vec!["1", "2", "2-1"]);
        assert_eq!(rows[2].depth, 1);

        state.toggle("2-1");
        let rows = visible_entries(&state, &entries);
        assert_eq!(ids(&rows), vec!["1", "2", "2-1", "2-1-1"]);
        assert_eq!(rows[3].depth, 2);
    }

    #[test]
    fn expanded_grandchild_hidden_when_parent_collapses() {
        let mut state = State::new(ScrollLock::new());
        state.set_open(true);
        let entries = tree();
        state.toggle("2");
        state.toggle("2-1");
        state.toggle("2");

        assert_eq!(ids(&visible_entries(&state, &entries)), vec!["1", "2"]);
    }

    #[test]
    fn indentation_grows_with_depth() {
        assert_eq!(indent(0), 0.0);
        assert_eq!(indent(2), 2.0 * spacing::MENU_INDENT);
    }

    #[test]
    fn view_builds_open_and_closed() {
        let mut state = State::new(ScrollLock::new());
        let entries = tree();
        let _ = view(&state, &entries);

        state.set_open(true);
        state.toggle("2");
        let _open = view(&state, &entries);
    }
}
