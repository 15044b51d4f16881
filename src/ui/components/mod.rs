// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple widgets.
//!
//! # Components
//!
//! - [`icon_button`] - Icon-only button with an accessible tooltip label

pub mod icon_button;

pub use icon_button::icon_button;
