// SPDX-License-Identifier: MPL-2.0
//! Warning banner shown when the configured endpoint is not a secure context.

use crate::i18n::catalog::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Docs page explaining why the warning appears and how to fix it.
const TROUBLESHOOTING_URL: &str =
    "https://docs.enclave-app.org/self-hosting/troubleshooting#insecure-connection";

/// Contextual data needed to render the banner.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the banner.
#[derive(Debug, Clone)]
pub enum Message {
    LearnMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(&'static str),
}

/// Process a banner message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::LearnMore => Event::OpenUrl(TROUBLESHOOTING_URL),
    }
}

/// Render the warning banner.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let description =
        Text::new(ctx.i18n.tr("insecure-warning.description")).size(typography::BODY);

    let learn_more = button(
        Text::new(ctx.i18n.tr("insecure-warning.learn-more")).size(typography::BODY),
    )
    .on_press(Message::LearnMore)
    .style(styles::button::link)
    .padding(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(description)
        .push(learn_more);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::warning_banner)
        .into()
}
