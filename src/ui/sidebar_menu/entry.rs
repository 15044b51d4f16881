// SPDX-License-Identifier: MPL-2.0
//! Menu entry tree supplied by the host application.
//!
//! Entries are read-only input data. Expand state is never stored inside the
//! tree; the menu [`State`](super::State) keeps it as a flat set of ids.

use super::Message;

/// A node of the navigation tree.
///
/// A node with at least one child is a *branch*, anything else is a *leaf*.
/// `A` is the host's action payload reported when the entry is activated.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry<A> {
    id: String,
    label: String,
    href: Option<String>,
    on_activate: Option<A>,
    children: Vec<MenuEntry<A>>,
}

impl<A> MenuEntry<A> {
    /// Creates a leaf entry.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            href: None,
            on_activate: None,
            children: Vec::new(),
        }
    }

    /// Sets the navigation target.
    ///
    /// Only followed for leaves; a branch toggles instead.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets the action reported on every activation.
    #[must_use]
    pub fn on_activate(mut self, action: A) -> Self {
        self.on_activate = Some(action);
        self
    }

    #[must_use]
    pub fn child(mut self, child: MenuEntry<A>) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = MenuEntry<A>>) -> Self {
        self.children.extend(children);
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn href_target(&self) -> Option<&str> {
        self.href.as_deref()
    }

    #[must_use]
    pub fn action(&self) -> Option<&A> {
        self.on_activate.as_ref()
    }

    #[must_use]
    pub fn child_entries(&self) -> &[MenuEntry<A>] {
        &self.children
    }

    /// Returns whether the entry has children.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<A: Clone> MenuEntry<A> {
    /// Message emitted when the entry's label is pressed.
    #[must_use]
    pub fn activation(&self) -> Message<A> {
        Message::Activate {
            id: self.id.clone(),
            branch: self.is_branch(),
            href: self.href.clone(),
            action: self.on_activate.clone(),
        }
    }

    /// Message emitted by the dedicated expand control.
    #[must_use]
    pub fn toggle(&self) -> Message<A> {
        Message::ToggleExpanded(self.id.clone())
    }
}
