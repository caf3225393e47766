// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the chrome and the
//! localization service.
//!
//! The `App` struct wires together the domains (localization, theming,
//! session) and translates component events into side effects like config
//! persistence or dictionary loading. This file intentionally keeps policy
//! decisions (initial locale resolution, last-write-wins dictionary swaps)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

mod message;
mod persistence;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::auth::AuthState;
use crate::config::{self, Config};
use crate::i18n::catalog::{self, I18n};
use crate::i18n::dictionary;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the chrome components,
/// localization, and persisted preferences.
pub struct App {
    i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    auth: AuthState,
    /// Which navbar dropdown is open, if any.
    open_menu: Option<navbar::Menu>,
    /// Latest locale whose dictionary load is in flight. Results for any
    /// other locale are stale and get discarded.
    pending_locale: Option<&'static str>,
    /// Text of the compose area.
    note_draft: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

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
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            theme_mode: ThemeMode::default(),
            auth: AuthState::default(),
            open_menu: None,
            pending_locale: None,
            note_draft: String::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous load of
    /// the initial locale's dictionary.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();

        let cli_locale = flags.lang.as_deref().and_then(catalog::supported_key);
        let locale = cli_locale.unwrap_or_else(|| {
            catalog::resolve_initial_locale(
                config.general.language.as_deref(),
                sys_locale::get_locale().as_deref(),
            )
        });

        let app = App {
            i18n: I18n::new(locale),
            theme_mode: config.general.theme_mode,
            auth: AuthState::default(),
            open_menu: None,
            pending_locale: Some(locale),
            note_draft: String::new(),
            config,
        };

        let task = Task::perform(
            async move { dictionary::load_dictionary(locale) },
            move |result| Message::DictionaryLoaded { locale, result },
        );

        (app, task)
    }

    fn title(&self) -> String {
        if self.i18n.is_ready() {
            self.i18n.tr("app.title")
        } else {
            String::from("Enclave")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                let mut ctx = self.update_context();
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Footer(footer_message) => update::handle_footer_message(&footer_message),
            Message::Banner(banner_message) => update::handle_banner_message(&banner_message),
            Message::DraftChanged(draft) => {
                self.note_draft = draft;
                Task::none()
            }
            Message::DictionaryLoaded { locale, result } => {
                let mut ctx = self.update_context();
                update::handle_dictionary_loaded(&mut ctx, locale, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            theme_mode: self.theme_mode,
            auth: &self.auth,
            open_menu: self.open_menu,
            note_draft: &self.note_draft,
        })
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            auth: &mut self.auth,
            open_menu: &mut self.open_menu,
            pending_locale: &mut self.pending_locale,
            note_draft: &mut self.note_draft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DictionaryError, Error};
    use crate::i18n::catalog::FALLBACK_LOCALE;

    fn loaded(locale: &'static str) -> Message {
        let table = dictionary::load_dictionary(locale).expect("dictionary must load");
        Message::DictionaryLoaded {
            locale,
            result: Ok(table),
        }
    }

    #[test]
    fn language_selection_records_the_pending_locale() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected("en")));

        assert_eq!(app.pending_locale, Some("en"));
        // Nothing installed until the load completes
        assert_eq!(app.i18n.current_locale(), FALLBACK_LOCALE);
    }

    #[test]
    fn dictionary_loaded_installs_the_new_table() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected("en")));

        let _ = app.update(loaded("en"));

        assert_eq!(app.pending_locale, None);
        assert_eq!(app.i18n.current_locale(), "en");
        assert_eq!(app.i18n.tr("navbar.new-note"), "New note");
    }

    #[test]
    fn stale_dictionary_load_is_discarded() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected("en")));
        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected("fr")));

        // The "en" result arrives after "fr" was requested: last write wins
        let _ = app.update(loaded("en"));
        assert_eq!(app.i18n.current_locale(), FALLBACK_LOCALE);
        assert_eq!(app.pending_locale, Some("fr"));

        let _ = app.update(loaded("fr"));
        assert_eq!(app.i18n.current_locale(), "fr");
        assert_eq!(app.i18n.tr("navbar.new-note"), "Nouvelle note");
    }

    #[test]
    fn failed_load_keeps_the_previous_dictionary() {
        let mut app = App::default();
        let before = app.i18n.tr("navbar.new-note");

        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected("en")));
        let _ = app.update(Message::DictionaryLoaded {
            locale: "en",
            result: Err(Error::Dictionary(DictionaryError::MissingResource(
                "en".to_string(),
            ))),
        });

        assert_eq!(app.pending_locale, None);
        assert_eq!(app.i18n.current_locale(), FALLBACK_LOCALE);
        assert_eq!(app.i18n.tr("navbar.new-note"), before);
        assert!(app.i18n.is_ready());
    }

    #[test]
    fn reselecting_the_active_locale_does_nothing() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::LocaleSelected(
            FALLBACK_LOCALE,
        )));

        assert_eq!(app.pending_locale, None);
    }

    #[test]
    fn theme_selection_updates_the_mode() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ThemeSelected(
            ThemeMode::Dark,
        )));

        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn logout_clears_the_session() {
        let mut app = App {
            auth: AuthState::new(true),
            ..Default::default()
        };

        let _ = app.update(Message::Navbar(navbar::Message::Logout));

        assert!(!app.auth.is_authenticated());
    }

    #[test]
    fn new_note_clears_the_draft() {
        let mut app = App::default();
        app.note_draft = "half-written note".to_string();

        let _ = app.update(Message::Navbar(navbar::Message::NewNote));

        assert!(app.note_draft.is_empty());
    }

    #[test]
    fn draft_changes_are_stored() {
        let mut app = App::default();

        let _ = app.update(Message::DraftChanged("hello".to_string()));

        assert_eq!(app.note_draft, "hello");
    }

    #[test]
    fn title_uses_the_installed_dictionary() {
        let app = App::default();
        assert_eq!(app.title(), "Enclave");
    }

    #[test]
    fn title_falls_back_while_loading() {
        let app = App {
            i18n: I18n::new("en"),
            ..Default::default()
        };
        assert_eq!(app.title(), "Enclave");
    }

    #[test]
    fn view_renders_when_ready_and_while_loading() {
        let ready = App::default();
        let _element = ready.view();

        let loading = App {
            i18n: I18n::new("en"),
            ..Default::default()
        };
        let _element = loading.view();
    }
}
