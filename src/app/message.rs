// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::ui::notifications::{self, Severity};
use crate::ui::sidebar_menu;
use crate::ui::text_field;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Actions attached to menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ShowToast(Severity),
    ShowPersistentToast,
    CycleTheme,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// widget messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message from the field at the given gallery slot.
    Field(usize, text_field::Message),
    Toast(notifications::Message),
    Menu(sidebar_menu::Message<MenuAction>),
    /// Push a toast using the configured defaults.
    ShowToast(Severity),
    /// Push a toast that only closes manually.
    ShowPersistentToast,
    /// Flip the external visibility flag of every toast.
    SetToastsVisible(bool),
    OpenMenu,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Theme override; the configured theme is used when absent.
    pub theme_mode: Option<ThemeMode>,
    /// Configuration file override; the platform config dir is used when absent.
    pub config_path: Option<PathBuf>,
}
