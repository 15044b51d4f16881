// SPDX-License-Identifier: MPL-2.0
use iced_ui_kit::config::{self, Config, DEFAULT_AUTO_DISMISS_MS, MAX_AUTO_DISMISS_MS};
use iced_ui_kit::ui::notifications::Transition;
use iced_ui_kit::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn config_round_trip_preserves_every_section() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("nested").join("widgets.toml");

    let mut saved = Config::default();
    saved.general.theme_mode = ThemeMode::Dark;
    saved.notification.auto_dismiss_ms = Some(0);
    saved.notification.show_close_control = Some(false);
    saved.notification.transition = Some(Transition::Fade);
    saved.text_field.clearable = Some(true);
    saved.menu.title = Some("Navigation".to_string());
    saved.menu.dismiss_on_outside_activation = Some(false);

    config::save_to_path(&saved, &path).expect("Failed to write config file");
    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded, saved);
    assert!(!loaded.notification.auto_dismiss().is_enabled());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("widgets.toml");
    std::fs::write(&path, "[menu]\ntitle = \"Browse\"\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded.menu.title.as_deref(), Some("Browse"));
    assert_eq!(
        loaded.notification.auto_dismiss().millis(),
        DEFAULT_AUTO_DISMISS_MS
    );
    assert_eq!(loaded.general.theme_mode, ThemeMode::System);
}

#[test]
fn oversized_auto_dismiss_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("widgets.toml");
    std::fs::write(&path, "[notification]\nauto_dismiss_ms = 999999\n")
        .expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");

    assert_eq!(loaded.notification.auto_dismiss().millis(), MAX_AUTO_DISMISS_MS);
}

#[test]
fn malformed_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("widgets.toml");
    std::fs::write(&path, "[notification\nauto_dismiss_ms = ").expect("Failed to write config");

    let (loaded, warning) = config::load_or_default(&path);

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}
