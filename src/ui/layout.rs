// SPDX-License-Identifier: MPL-2.0
//! Top-level layout shell.
//!
//! Stacks the optional warning banner, the navbar, the content region, and
//! the footer. The shell owns no state; callers map each section to their
//! own message type before composing.

use iced::{
    widget::{rule, Column, Container},
    Element, Length,
};

/// Compose the application chrome around `content`.
pub fn view<'a, Message: 'a>(
    banner: Option<Element<'a, Message>>,
    navbar: Element<'a, Message>,
    content: Element<'a, Message>,
    footer: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill).height(Length::Fill);

    if let Some(banner) = banner {
        column = column.push(banner);
    }

    column
        .push(navbar)
        .push(rule::horizontal(1))
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(rule::horizontal(1))
        .push(footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Text;

    fn section<'a>(label: &'a str) -> Element<'a, ()> {
        Text::new(label).into()
    }

    #[test]
    fn layout_renders_without_banner() {
        let _element = view(None, section("nav"), section("content"), section("footer"));
    }

    #[test]
    fn layout_renders_with_banner() {
        let _element = view(
            Some(section("banner")),
            section("nav"),
            section("content"),
            section("footer"),
        );
    }
}
