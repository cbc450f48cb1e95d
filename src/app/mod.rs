// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and lightbox.
//!
//! The `App` struct wires together the catalog, the category filter, and the
//! lightbox, and translates component messages into state changes. Policy
//! decisions (window sizing, manifest resolution, startup filter) stay close
//! to the main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::error::Error;
use crate::filter::{self, CategoryFilter};
use crate::lightbox::Lightbox;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 560;

/// Root Iced application state bridging the catalog, filter, and lightbox.
pub struct App {
    catalog: Catalog,
    filter: CategoryFilter,
    /// Items left visible by the active filter; zero drives the no-results state.
    visible_count: usize,
    lightbox: Lightbox,
    theme_mode: ThemeMode,
    columns: u16,
    thumbnail_height: u16,
    /// Config or manifest problem reported once at the top of the window.
    startup_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("items", &self.catalog.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            filter: CategoryFilter::All,
            visible_count: 0,
            lightbox: Lightbox::new(),
            theme_mode: ThemeMode::System,
            columns: config::DEFAULT_GRID_COLUMNS,
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
            startup_warning: None,
        }
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
    /// Initializes application state from config and the gallery manifest.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));

        let mut app = App {
            theme_mode: config.general.theme_mode,
            columns: config.gallery.columns.unwrap_or(config::DEFAULT_GRID_COLUMNS),
            thumbnail_height: config
                .gallery
                .thumbnail_height
                .unwrap_or(config::DEFAULT_THUMBNAIL_HEIGHT),
            startup_warning: config_warning,
            ..Self::default()
        };

        let manifest_path = flags
            .manifest_path
            .map(PathBuf::from)
            .or_else(|| config.gallery.manifest.clone())
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_MANIFEST_FILE));

        match Catalog::load(&manifest_path) {
            Ok(catalog) => app.catalog = catalog,
            Err(e) => app.note_startup_error(&manifest_path.display().to_string(), &e),
        }

        let startup_filter = config
            .gallery
            .default_filter
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default();
        app.visible_count = filter::apply(&mut app.catalog, &startup_filter);
        app.filter = startup_filter;

        (app, Task::none())
    }

    fn note_startup_error(&mut self, source: &str, error: &Error) {
        let warning = format!("{}: {}", source, error);
        self.startup_warning = match self.startup_warning.take() {
            Some(existing) => Some(format!("{} — {}", existing, warning)),
            None => Some(warning),
        };
    }

    fn title(&self) -> String {
        if self.catalog.is_empty() {
            "Gallery Lens".to_string()
        } else {
            format!(
                "Gallery Lens — {} of {} designs",
                self.visible_count,
                self.catalog.len()
            )
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Keyboard events are ignored entirely while the lightbox is closed.
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_open() {
            subscription::lightbox_keys()
        } else {
            Subscription::none()
        }
    }
}
