// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the widget glyphs.
//!
//! Icons are small stroke-only SVG documents embedded as string constants.
//! Handles are created once on first access and cached with `OnceLock`.
//! Glyphs draw with `currentColor`, so callers tint them through
//! [`styles::tinted_svg`](super::styles::tinted_svg).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the glyph's appearance,
//! not the action context (e.g., `cross` not `clear_input`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $source:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory($source.as_bytes()));
            Svg::new(handle.clone())
        }
    };
}

const EYE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/></svg>"#;

const EYE_OFF_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19m-6.72-1.07a3 3 0 1 1-4.24-4.24"/><line x1="1" y1="1" x2="23" y2="23"/></svg>"#;

const CROSS_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/></svg>"#;

const CHEVRON_RIGHT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="9 18 15 12 9 6"/></svg>"#;

const CHEVRON_DOWN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="6 9 12 15 18 9"/></svg>"#;

const CHECK_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polyline points="20 6 9 17 4 12"/></svg>"#;

const INFO_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="16" x2="12" y2="12"/><line x1="12" y1="8" x2="12.01" y2="8"/></svg>"#;

const WARNING_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><line x1="12" y1="9" x2="12" y2="13"/><line x1="12" y1="17" x2="12.01" y2="17"/></svg>"#;

const ALERT_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="12"/><line x1="12" y1="16" x2="12.01" y2="16"/></svg>"#;

define_icon!(eye, EYE_SVG, "Eye icon: password is masked, press to show.");
define_icon!(
    eye_off,
    EYE_OFF_SVG,
    "Crossed-out eye icon: password is shown, press to hide."
);
define_icon!(cross, CROSS_SVG, "Cross icon: two diagonal strokes.");
define_icon!(
    chevron_right,
    CHEVRON_RIGHT_SVG,
    "Chevron pointing right: collapsed branch."
);
define_icon!(
    chevron_down,
    CHEVRON_DOWN_SVG,
    "Chevron pointing down: expanded branch."
);
define_icon!(checkmark, CHECK_SVG, "Checkmark icon: single tick stroke.");
define_icon!(info, INFO_SVG, "Info icon: letter i inside a circle.");
define_icon!(warning, WARNING_SVG, "Warning icon: exclamation in a triangle.");
define_icon!(alert, ALERT_SVG, "Alert icon: exclamation inside a circle.");

/// Sizes an icon to a square of `size` logical pixels.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_build_without_panicking() {
        let _ = eye();
        let _ = eye_off();
        let _ = cross();
        let _ = chevron_right();
        let _ = chevron_down();
        let _ = checkmark();
        let _ = info();
        let _ = warning();
        let _ = alert();
    }

    #[test]
    fn sources_draw_with_current_color() {
        for source in [EYE_SVG, EYE_OFF_SVG, CROSS_SVG, CHEVRON_RIGHT_SVG, ALERT_SVG] {
            assert!(source.contains("currentColor"));
        }
    }
}
