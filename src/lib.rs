// SPDX-License-Identifier: MPL-2.0
//! `iced_ui_kit` is a small set of reusable widgets for the Iced GUI framework.
//!
//! It provides a text field with clear and password reveal controls,
//! dismissible toast notifications and a collapsible sidebar menu, along
//! with a gallery application that hosts all of them.

#![doc(html_root_url = "https://docs.rs/iced_ui_kit/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
