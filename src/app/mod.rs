// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the view controller, the asset store, localization
//! and toasts together and translates messages into side effects (image
//! loading, the resume save dialog, window close).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::controller::ViewController;
use crate::domain::Section;
use crate::i18n::fluent::I18n;
use crate::media::AssetStore;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub struct App {
    pub i18n: I18n,
    controller: ViewController,
    assets: AssetStore,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("section", &self.controller.current_section())
            .field("hovered", &self.controller.hovered_icon())
            .field("assets_root", &self.assets.root())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Builds the window settings. Close requests are routed through `update`
/// so the controller can be torn down first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
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
    /// Loads config, resolves locale and asset root, and starts preloading
    /// the images of the first panel.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        Self::with_config(flags, config::load())
    }

    /// Builds the app from an already loaded config and its load warning.
    pub fn with_config(
        flags: Flags,
        (config, config_warning): (config::Config, Option<String>),
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, &config);
        let assets_root = paths::get_assets_dir(config.assets.root.as_deref());
        tracing::info!(root = %assets_root.display(), locale = %i18n.current_locale(), "starting");

        let mut controller = ViewController::system();
        controller.set_bubbles_enabled(config.bubbles_enabled());
        if let Some(section) = flags.start_section {
            controller.start_at(section);
        }

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let mut app = Self {
            i18n,
            controller,
            assets: AssetStore::new(assets_root),
            notifications,
            theme_mode: config.general.theme_mode,
        };
        let panel = app.controller.visible_panel();
        let mut tasks = vec![update::preload_panel(&mut app.assets, panel)];
        if panel != Section::Home.panel() {
            tasks.push(update::preload_panel(&mut app.assets, Section::Home.panel()));
        }
        (app, Task::batch(tasks))
    }

    /// Window title: the app name, prefixed with the section off the home view.
    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.controller.current_section() {
            Section::Home => app_name,
            section => {
                let key = format!("nav-{}", section.slug());
                format!("{} - {}", self.i18n.tr(&key), app_name)
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.needs_tick()),
        ])
    }

    /// True while the controller has pending timers or live overlays, or
    /// while toasts are on screen.
    fn needs_tick(&self) -> bool {
        subscription::needs_tick(
            self.controller.has_pending_work(),
            self.notifications.has_notifications(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Panel(panel_message) => update::handle_panel_message(
                update::PanelContext {
                    controller: &mut self.controller,
                    assets: &mut self.assets,
                },
                panel_message,
            ),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut self.controller, &mut self.notifications, now)
            }
            Message::AssetLoaded { path, result } => {
                update::handle_asset_loaded(&mut self.assets, path, result)
            }
            Message::ResumeSaveDialogResult(destination) => {
                update::handle_resume_destination(&self.assets, destination)
            }
            Message::ResumeSaved(result) => {
                update::handle_resume_saved(&mut self.notifications, result)
            }
            Message::WindowCloseRequested(_window_id) => {
                self.controller.teardown();
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            assets: &self.assets,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::panels;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn app_in(config_dir: &Path, flags: Flags) -> App {
        App::with_config(
            flags,
            config::load_with_override(Some(config_dir.to_path_buf())),
        )
        .0
    }

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            start_section: None,
        }
    }

    fn app() -> App {
        let temp_dir = tempdir().expect("failed to create temp dir");
        app_in(temp_dir.path(), english())
    }

    #[test]
    fn title_is_app_name_on_home() {
        assert_eq!(app().title(), "Folio");
    }

    #[test]
    fn start_section_is_committed_immediately() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let app = app_in(
            temp_dir.path(),
            Flags {
                start_section: Some(Section::Music),
                ..english()
            },
        );
        assert_eq!(app.controller.current_section(), Section::Music);
        assert_eq!(app.title(), "Music - Folio");
    }

    #[test]
    fn close_request_tears_down_backdrop() {
        let mut app = app();
        let _ = app.update(Message::Panel(panels::Message::Navigate(Section::Resume)));
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(app.controller.root_style().is_empty());
        assert!(!app.controller.has_pending_work());
    }

    #[test]
    fn corrupt_settings_show_a_warning_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "[general\n").unwrap();
        let app = app_in(temp_dir.path(), english());
        let keys: Vec<&str> = app
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec!["notification-config-load-error"]);
        assert!(app.needs_tick());
    }

    #[test]
    fn tick_runs_only_while_something_moves() {
        let mut app = app();
        assert!(!app.needs_tick());

        let _ = app.update(Message::Panel(panels::Message::Navigate(Section::Movies)));
        assert!(app.needs_tick());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.needs_tick());
    }
}
