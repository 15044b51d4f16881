// SPDX-License-Identifier: MPL-2.0
//! Widget gallery application.
//!
//! The `App` plays the host application for every widget: it owns the
//! field values of controlled fields, adds notifications and removes them
//! once they report dismissal, decides when the sidebar menu is open and
//! reacts to its navigation events.

mod message;
mod subscription;
mod view;

pub use message::{Flags, MenuAction, Message};

use crate::config::{self, Config};
use crate::ui::notifications::{self, Notification, Severity, Transition};
use crate::ui::sidebar_menu::{self, MenuEntry};
use crate::ui::state::{AutoDismiss, ScrollLock};
use crate::ui::text_field::{self, Effect, Kind, ValueMode};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// A labelled text field shown in the gallery.
#[derive(Debug, Clone)]
pub struct GalleryField {
    pub label: &'static str,
    pub state: text_field::State,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    fields: Vec<GalleryField>,
    toasts: Vec<Notification>,
    scroll_lock: ScrollLock,
    menu: sidebar_menu::State,
    entries: Vec<MenuEntry<MenuAction>>,
    /// Last host-level outcome, shown at the bottom of the page.
    status: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("toasts", &self.toasts.len())
            .field("menu_open", &self.menu.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = match &flags.config_path {
            Some(path) if path.exists() => config::load_or_default(path),
            Some(_) => (Config::default(), None),
            None => config::load(),
        };

        let mut app = Self::with_config(config);
        if let Some(mode) = flags.theme_mode {
            app.theme_mode = mode;
        }
        if let Some(warning) = warning {
            let toast = app.configured_toast(
                Severity::Warning,
                format!("Configuration ignored: {warning}"),
            );
            app.push_toast(toast);
        }

        (app, Task::none())
    }

    /// Builds the gallery from a configuration without touching the filesystem.
    fn with_config(config: Config) -> Self {
        let clearable = config.text_field.clearable.unwrap_or(config::DEFAULT_CLEARABLE);
        let scroll_lock = ScrollLock::new();
        let menu = sidebar_menu::State::new(scroll_lock.clone())
            .title(
                config
                    .menu
                    .title
                    .clone()
                    .unwrap_or_else(|| config::DEFAULT_MENU_TITLE.to_string()),
            )
            .dismiss_on_outside_activation(
                config
                    .menu
                    .dismiss_on_outside_activation
                    .unwrap_or(config::DEFAULT_DISMISS_ON_OUTSIDE),
            );

        Self {
            theme_mode: config.general.theme_mode,
            fields: gallery_fields(clearable),
            toasts: Vec::new(),
            scroll_lock,
            menu,
            entries: gallery_menu(),
            status: String::from("Ready"),
            config,
        }
    }

    fn title(&self) -> String {
        String::from("Iced UI Kit")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.toasts, &self.menu)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Field(slot, message) => self.handle_field(slot, message),
            Message::Toast(message) => {
                for event in notifications::update(&mut self.toasts, message) {
                    if let notifications::Event::Dismissed(id) = event {
                        self.toasts.retain(|toast| toast.id() != id);
                    }
                }
                Task::none()
            }
            Message::Menu(message) => {
                for event in self.menu.handle_message(message) {
                    self.handle_menu_event(event);
                }
                Task::none()
            }
            Message::ShowToast(severity) => {
                let toast = self.configured_toast(severity, sample_message(severity));
                self.push_toast(toast);
                Task::none()
            }
            Message::ShowPersistentToast => {
                let toast = self
                    .configured_toast(Severity::Info, "This stays until you close it")
                    .auto_dismiss(AutoDismiss::NEVER)
                    .transition(Transition::Fade);
                self.push_toast(toast);
                Task::none()
            }
            Message::SetToastsVisible(visible) => {
                let now = Instant::now();
                for toast in &mut self.toasts {
                    toast.set_visible(visible, now);
                }
                Task::none()
            }
            Message::OpenMenu => {
                self.menu.set_open(true);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            fields: &self.fields,
            toasts: &self.toasts,
            menu: &self.menu,
            entries: &self.entries,
            scroll_lock: &self.scroll_lock,
            status: &self.status,
        })
    }

    fn handle_field(&mut self, slot: usize, message: text_field::Message) -> Task<Message> {
        let Some(field) = self.fields.get_mut(slot) else {
            tracing::warn!(slot, "message for unknown text field");
            return Task::none();
        };

        let (effect, task) = field.state.handle_message(message);
        match effect {
            Effect::Changed(change) => {
                // Controlled fields only display what the host hands back.
                if field.state.mode() == ValueMode::Controlled {
                    field.state.sync(change.value);
                }
            }
            Effect::Submitted(value) => {
                self.status = format!("{} submitted: {value}", field.label);
            }
            Effect::None => {}
        }
        task.map(move |message| Message::Field(slot, message))
    }

    fn handle_menu_event(&mut self, event: sidebar_menu::Event<MenuAction>) {
        match event {
            sidebar_menu::Event::RequestClose => self.menu.set_open(false),
            sidebar_menu::Event::Navigate(href) => {
                self.status = format!("Navigated to {href}");
            }
            sidebar_menu::Event::Activated(MenuAction::ShowToast(severity)) => {
                let toast = self.configured_toast(severity, sample_message(severity));
                self.push_toast(toast);
            }
            sidebar_menu::Event::Activated(MenuAction::ShowPersistentToast) => {
                let toast = self
                    .configured_toast(Severity::Error, "Menu action failed on purpose")
                    .auto_dismiss(AutoDismiss::NEVER);
                self.push_toast(toast);
            }
            sidebar_menu::Event::Activated(MenuAction::CycleTheme) => {
                self.theme_mode = match self.theme_mode {
                    ThemeMode::Light => ThemeMode::Dark,
                    ThemeMode::Dark => ThemeMode::System,
                    ThemeMode::System => ThemeMode::Light,
                };
                self.status = format!("Theme: {:?}", self.theme_mode);
            }
        }
    }

    /// Builds a notification carrying the configured defaults.
    fn configured_toast(&self, severity: Severity, message: impl Into<String>) -> Notification {
        let defaults = &self.config.notification;
        Notification::new(severity, message)
            .auto_dismiss(defaults.auto_dismiss())
            .show_close_control(
                defaults
                    .show_close_control
                    .unwrap_or(config::DEFAULT_SHOW_CLOSE_CONTROL),
            )
            .transition(defaults.transition.unwrap_or_default())
    }

    /// Starts the notification's lifecycle and appends it to the host list.
    fn push_toast(&mut self, mut notification: Notification) {
        notification.mount(Instant::now());
        self.toasts.push(notification);
    }
}

fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "Profile saved",
        Severity::Info => "A new version is available",
        Severity::Warning => "Storage is almost full",
        Severity::Error => "Could not reach the server",
    }
}

/// One field per kind, plus a controlled search box.
fn gallery_fields(clearable: bool) -> Vec<GalleryField> {
    let uncontrolled = |label, kind, placeholder: &str| GalleryField {
        label,
        state: text_field::State::uncontrolled(kind)
            .clearable(clearable)
            .placeholder(placeholder),
    };

    vec![
        uncontrolled("Name", Kind::Text, "Jane Doe"),
        GalleryField {
            label: "Password",
            state: text_field::State::uncontrolled(Kind::Password)
                .clearable(true)
                .placeholder("Secret"),
        },
        GalleryField {
            label: "Search (controlled)",
            state: text_field::State::controlled(Kind::Text, "abc")
                .clearable(true)
                .placeholder("Search"),
        },
        uncontrolled("Quantity", Kind::Number, "0"),
        uncontrolled("Email", Kind::Email, "jane@example.com"),
        uncontrolled("Phone", Kind::Tel, "+1 555 0100"),
        uncontrolled("Website", Kind::Url, "https://example.com"),
        GalleryField {
            label: "Disabled",
            state: text_field::State::uncontrolled(Kind::Text)
                .initial_value("Read only")
                .disabled(true),
        },
    ]
}

/// Three-level tree covering leaves, branches and a branch with an href.
fn gallery_menu() -> Vec<MenuEntry<MenuAction>> {
    vec![
        MenuEntry::new("home", "Home").href("#home"),
        MenuEntry::new("notify", "Notifications").children([
            MenuEntry::new("notify-success", "Success toast")
                .on_activate(MenuAction::ShowToast(Severity::Success)),
            MenuEntry::new("notify-warning", "Warning toast")
                .on_activate(MenuAction::ShowToast(Severity::Warning)),
            MenuEntry::new("notify-persistent", "Persistent error")
                .on_activate(MenuAction::ShowPersistentToast),
        ]),
        MenuEntry::new("docs", "Documentation")
            .href("#docs")
            .child(
                MenuEntry::new("docs-widgets", "Widgets")
                    .child(MenuEntry::new("docs-text-field", "Text field").href("#text-field"))
                    .child(MenuEntry::new("docs-menu", "Sidebar menu").href("#menu")),
            )
            .child(MenuEntry::new("docs-config", "Configuration").href("#config")),
        MenuEntry::new("theme", "Cycle theme").on_activate(MenuAction::CycleTheme),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn app() -> App {
        App::with_config(Config::default())
    }

    fn tick(app: &mut App, at: Instant) {
        let _ = app.update(Message::Toast(notifications::Message::Tick(at)));
    }

    #[test]
    fn new_with_missing_config_file_uses_defaults() {
        let dir = tempdir().expect("temp dir");
        let (app, _task) = App::new(Flags {
            theme_mode: Some(ThemeMode::Dark),
            config_path: Some(dir.path().join("missing.toml")),
        });

        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.config, Config::default());
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn malformed_config_shows_warning_toast() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("widgets.toml");
        std::fs::write(&path, "not = [valid").expect("write config");

        let (app, _task) = App::new(Flags {
            theme_mode: None,
            config_path: Some(path),
        });

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].severity(), Severity::Warning);
    }

    #[test]
    fn dismissed_toasts_are_removed() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(Severity::Success));
        assert_eq!(app.toasts.len(), 1);

        let start = Instant::now();
        tick(&mut app, start + Duration::from_millis(3000));
        assert_eq!(app.toasts.len(), 1);
        assert!(app.toasts[0].is_exiting());

        tick(&mut app, start + Duration::from_millis(3400));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn configured_auto_dismiss_applies_to_new_toasts() {
        let mut config = Config::default();
        config.notification.auto_dismiss_ms = Some(0);
        let mut app = App::with_config(config);

        let _ = app.update(Message::ShowToast(Severity::Info));
        assert!(!app.toasts[0].has_pending_timer());
    }

    #[test]
    fn hiding_toasts_cancels_timers() {
        let mut app = app();
        let _ = app.update(Message::ShowToast(Severity::Info));
        let _ = app.update(Message::SetToastsVisible(false));
        assert!(!app.toasts[0].has_pending_timer());
    }

    #[test]
    fn controlled_field_follows_host_value() {
        let mut app = app();
        let slot = 2;
        assert_eq!(app.fields[slot].state.value(), "abc");

        let _ = app.update(Message::Field(slot, text_field::Message::Clear));
        assert_eq!(app.fields[slot].state.value(), "");

        let _ = app.update(Message::Field(
            slot,
            text_field::Message::Input("rust".into()),
        ));
        assert_eq!(app.fields[slot].state.value(), "rust");
    }

    #[test]
    fn opening_menu_locks_page_scroll() {
        let mut app = app();
        let _ = app.update(Message::OpenMenu);
        assert!(app.scroll_lock.is_locked());

        let _ = app.update(Message::Menu(sidebar_menu::Message::EscapePressed));
        assert!(!app.menu.is_open());
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn leaf_navigation_closes_menu_and_updates_status() {
        let mut app = app();
        let _ = app.update(Message::OpenMenu);
        let home = app.entries[0].activation();

        let _ = app.update(Message::Menu(home));

        assert!(!app.menu.is_open());
        assert_eq!(app.status, "Navigated to #home");
    }

    #[test]
    fn branch_with_href_toggles_without_navigating() {
        let mut app = app();
        let _ = app.update(Message::OpenMenu);
        let docs = app.entries[2].activation();

        let _ = app.update(Message::Menu(docs));

        assert!(app.menu.is_open());
        assert!(app.menu.is_expanded("docs"));
        assert_eq!(app.status, "Ready");
    }

    #[test]
    fn nested_leaf_action_runs_after_close() {
        let mut app = app();
        let _ = app.update(Message::OpenMenu);
        let success = app.entries[1].child_entries()[0].activation();

        let _ = app.update(Message::Menu(success));

        assert!(!app.menu.is_open());
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].severity(), Severity::Success);
    }
}
