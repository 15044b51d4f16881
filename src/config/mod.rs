// SPDX-License-Identifier: MPL-2.0
//! Widget defaults loaded from and saved to a `widgets.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[notification]` - Auto-dismiss delay, close control, transition style
//! - `[text_field]` - Clear action default
//! - `[menu]` - Title and outside-dismiss behavior
//!
//! # Examples
//!
//! ```no_run
//! use iced_ui_kit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notification.auto_dismiss_ms = Some(5000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::Transition;
use crate::ui::state::AutoDismiss;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "widgets.toml";
const APP_NAME: &str = "IcedUiKit";

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Notification defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Auto-dismiss delay in milliseconds (`0` disables auto-dismiss).
    #[serde(
        default = "default_auto_dismiss_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_dismiss_ms: Option<u32>,

    /// Whether the close control is shown.
    #[serde(
        default = "default_show_close_control",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_close_control: Option<bool>,

    /// Enter/exit transition style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<Transition>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: default_auto_dismiss_ms(),
            show_close_control: default_show_close_control(),
            transition: Some(Transition::default()),
        }
    }
}

impl NotificationConfig {
    /// Returns the validated auto-dismiss delay.
    #[must_use]
    pub fn auto_dismiss(&self) -> AutoDismiss {
        self.auto_dismiss_ms
            .map_or_else(AutoDismiss::default, AutoDismiss::clamped)
    }
}

/// Text field defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextFieldConfig {
    /// Whether fields offer a clear action.
    #[serde(default = "default_clearable", skip_serializing_if = "Option::is_none")]
    pub clearable: Option<bool>,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            clearable: default_clearable(),
        }
    }
}

/// Sidebar menu defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuConfig {
    /// Panel title.
    #[serde(default = "default_menu_title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Whether backdrop presses and Escape request the menu to close.
    #[serde(
        default = "default_dismiss_on_outside",
        skip_serializing_if = "Option::is_none"
    )]
    pub dismiss_on_outside_activation: Option<bool>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            title: default_menu_title(),
            dismiss_on_outside_activation: default_dismiss_on_outside(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Widget configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Notification defaults.
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Text field defaults.
    #[serde(default)]
    pub text_field: TextFieldConfig,

    /// Sidebar menu defaults.
    #[serde(default)]
    pub menu: MenuConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_dismiss_ms() -> Option<u32> {
    Some(DEFAULT_AUTO_DISMISS_MS)
}

fn default_show_close_control() -> Option<bool> {
    Some(DEFAULT_SHOW_CLOSE_CONTROL)
}

fn default_clearable() -> Option<bool> {
    Some(DEFAULT_CLEARABLE)
}

fn default_menu_title() -> Option<String> {
    Some(DEFAULT_MENU_TITLE.to_string())
}

fn default_dismiss_on_outside() -> Option<bool> {
    Some(DEFAULT_DISMISS_ON_OUTSIDE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Loads the configuration from the platform config directory.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    match get_default_config_path() {
        Some(path) if path.exists() => load_or_default(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the configuration from `path`, falling back to defaults on error.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "using default widget configuration");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    match get_default_config_path() {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "no platform configuration directory available".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
