// SPDX-License-Identifier: MPL-2.0
//! Widgets and their presentation layer.
//!
//! Every widget follows the Elm-style "state down, messages up" pattern: the
//! host owns the widget state, forwards messages to it and reacts to the
//! events it returns.
//!
//! # Widgets
//!
//! - [`text_field`] - Single-line input with clear and password reveal controls
//! - [`notifications`] - Dismissible toasts and their host layout
//! - [`sidebar_menu`] - Collapsible nested navigation panel
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Timers, auto-dismiss delay and page scroll lock
//! - [`components`] - Icon button with an accessible label
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG glyphs

pub mod components;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod sidebar_menu;
pub mod state;
pub mod styles;
pub mod text_field;
pub mod theming;
