// SPDX-License-Identifier: MPL-2.0
//! Footer module with links to the project's external channels.

use crate::i18n::catalog::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Repository URL.
const REPOSITORY_URL: &str = "https://codeberg.org/enclave-app/iced_enclave";

/// Project blog URL.
const BLOG_URL: &str = "https://blog.enclave-app.org";

/// Twitter/X channel URL.
const TWITTER_URL: &str = "https://twitter.com/enclave_app";

/// Telegram community URL.
const TELEGRAM_URL: &str = "https://t.me/enclave_app";

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    OpenLink(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenUrl(&'static str),
}

/// Process a footer message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::OpenLink(url) => Event::OpenUrl(url),
    }
}

/// Render the footer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let links = [
        ("Codeberg".to_string(), REPOSITORY_URL),
        (ctx.i18n.tr("footer.blog"), BLOG_URL),
        ("Twitter".to_string(), TWITTER_URL),
        (ctx.i18n.tr("footer.telegram"), TELEGRAM_URL),
    ];

    let mut row = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for (index, (label, url)) in links.into_iter().enumerate() {
        if index > 0 {
            row = row.push(Text::new("·").size(typography::BODY));
        }
        row = row.push(build_link_item(label, url));
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .style(styles::container::surface)
        .into()
}

/// Build a link item with label and target URL.
fn build_link_item<'a>(label: String, url: &'static str) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(Message::OpenLink(url))
        .style(styles::button::link)
        .padding(spacing::XXS)
        .into()
}
