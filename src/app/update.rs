// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Component events are translated here into state changes and side effects:
//! preference persistence, dictionary loads, and opening external links.

use super::persistence;
use super::Message;
use crate::auth::AuthState;
use crate::error::Error;
use crate::i18n::catalog::I18n;
use crate::i18n::dictionary::{self, FlattenedDictionary};
use crate::ui::banner;
use crate::ui::footer;
use crate::ui::navbar;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable slices of `App` state needed by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub auth: &'a mut AuthState,
    pub open_menu: &'a mut Option<navbar::Menu>,
    pub pending_locale: &'a mut Option<&'static str>,
    pub note_draft: &'a mut String,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext, message: navbar::Message) -> Task<Message> {
    let event = navbar::update(message, ctx.open_menu);
    match event {
        navbar::Event::None => Task::none(),
        navbar::Event::ThemeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_theme_mode(mode);
            Task::none()
        }
        navbar::Event::LocaleSelected(locale) => request_locale(ctx, locale),
        navbar::Event::NewNoteRequested => {
            ctx.note_draft.clear();
            Task::none()
        }
        navbar::Event::LogoutRequested => {
            ctx.auth.logout();
            Task::none()
        }
    }
}

pub fn handle_footer_message(message: &footer::Message) -> Task<Message> {
    let footer::Event::OpenUrl(url) = footer::update(message);
    open_url(url);
    Task::none()
}

pub fn handle_banner_message(message: &banner::Message) -> Task<Message> {
    let banner::Event::OpenUrl(url) = banner::update(message);
    open_url(url);
    Task::none()
}

/// Starts an asynchronous dictionary load for `locale` and persists the
/// selection. The locale is recorded as pending so that results from loads
/// it supersedes are discarded (last-write-wins).
pub fn request_locale(ctx: &mut UpdateContext, locale: &'static str) -> Task<Message> {
    if *ctx.pending_locale == Some(locale) {
        return Task::none();
    }
    if ctx.i18n.current_locale() == locale && ctx.i18n.is_ready() {
        return Task::none();
    }

    *ctx.pending_locale = Some(locale);
    persistence::persist_locale(locale);

    Task::perform(
        async move { dictionary::load_dictionary(locale) },
        move |result| Message::DictionaryLoaded { locale, result },
    )
}

/// Applies a completed dictionary load.
///
/// Results for anything but the latest requested locale are dropped. A
/// failed load leaves the previously installed dictionary untouched.
pub fn handle_dictionary_loaded(
    ctx: &mut UpdateContext,
    locale: &'static str,
    result: Result<FlattenedDictionary, Error>,
) -> Task<Message> {
    if *ctx.pending_locale != Some(locale) {
        return Task::none();
    }
    *ctx.pending_locale = None;

    match result {
        Ok(table) => ctx.i18n.install(locale, table),
        Err(error) => eprintln!("Failed to load dictionary for {}: {}", locale, error),
    }

    Task::none()
}

fn open_url(url: &str) {
    if cfg!(test) {
        return;
    }
    if webbrowser::open(url).is_err() {
        eprintln!("Failed to open {}", url);
    }
}
