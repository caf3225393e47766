// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the chrome (banner, navbar, content, footer) through the layout
//! shell, mapping each component's messages into the top-level [`Message`].

use super::Message;
use crate::auth::AuthState;
use crate::config::Config;
use crate::i18n::catalog::I18n;
use crate::ui::banner::{self, ViewContext as BannerViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::layout;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{text_input, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub theme_mode: ThemeMode,
    pub auth: &'a AuthState,
    pub open_menu: Option<navbar::Menu>,
    pub note_draft: &'a str,
}

/// Renders the application: a loading placeholder until the first
/// dictionary is installed, the full chrome afterwards.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if !ctx.i18n.is_ready() {
        return view_loading();
    }

    let banner = (!ctx.config.server.is_secure()).then(|| {
        banner::view(BannerViewContext { i18n: ctx.i18n }).map(Message::Banner)
    });

    let nav = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
        open_menu: ctx.open_menu,
        is_authenticated: ctx.auth.is_authenticated(),
        authentication_required: ctx.config.server.authentication_required,
    })
    .map(Message::Navbar);

    let content = view_compose(ctx.i18n, ctx.note_draft);

    let foot = footer::view(FooterViewContext { i18n: ctx.i18n }).map(Message::Footer);

    layout::view(banner, nav, content, foot)
}

/// Placeholder shown while the first dictionary load is in flight.
fn view_loading<'a>() -> Element<'a, Message> {
    Container::new(Text::new("…").size(typography::TITLE_MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// Minimal compose area wrapped by the chrome. Note handling itself lives
/// with the service client; the shell only keeps the draft text.
fn view_compose<'a>(i18n: &'a I18n, draft: &'a str) -> Element<'a, Message> {
    let welcome = Text::new(i18n.tr("content.welcome")).size(typography::BODY);

    let placeholder = i18n.tr("content.placeholder");
    let input = text_input(placeholder.as_str(), draft)
        .on_input(Message::DraftChanged)
        .padding(spacing::SM);

    let column = Column::new()
        .spacing(spacing::MD)
        .push(welcome)
        .push(input);

    Container::new(
        Container::new(column)
            .width(Length::Fill)
            .max_width(sizing::CONTENT_MAX_WIDTH),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding(spacing::LG)
    .into()
}
