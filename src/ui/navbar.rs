// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! This module provides the top bar with the app title, the "new note"
//! button, and three dropdown menus: theme switching, language switching,
//! and account actions. Menu selections are propagated to the parent
//! application as events.

use crate::i18n::catalog::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Currently selected theme mode (marks the active menu entry).
    pub theme_mode: ThemeMode,
    /// Which dropdown menu is open, if any.
    pub open_menu: Option<Menu>,
    pub is_authenticated: bool,
    /// Whether the configured service requires a signed-in session.
    pub authentication_required: bool,
}

/// The navbar's dropdown menus. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Theme,
    Language,
    Account,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu(Menu),
    CloseMenus,
    ThemeSelected(ThemeMode),
    LocaleSelected(&'static str),
    NewNote,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ThemeSelected(ThemeMode),
    LocaleSelected(&'static str),
    NewNoteRequested,
    LogoutRequested,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, open_menu: &mut Option<Menu>) -> Event {
    match message {
        Message::ToggleMenu(menu) => {
            *open_menu = if *open_menu == Some(menu) {
                None
            } else {
                Some(menu)
            };
            Event::None
        }
        Message::CloseMenus => {
            *open_menu = None;
            Event::None
        }
        Message::ThemeSelected(mode) => {
            *open_menu = None;
            Event::ThemeSelected(mode)
        }
        Message::LocaleSelected(locale) => {
            *open_menu = None;
            Event::LocaleSelected(locale)
        }
        Message::NewNote => {
            *open_menu = None;
            Event::NewNoteRequested
        }
        Message::Logout => {
            *open_menu = None;
            Event::LogoutRequested
        }
    }
}

/// Render the navigation bar.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    // Dropdown menu (if open)
    if let Some(menu) = ctx.open_menu {
        let dropdown = build_dropdown(&ctx, menu);
        content = content.push(dropdown);
    }

    content.into()
}

/// Build the top bar with the title, tagline, and menu triggers.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = button(Text::new(ctx.i18n.tr("app.title")).size(typography::TITLE_MD))
        .on_press(Message::NewNote)
        .style(styles::button::link)
        .padding(spacing::XXS);

    let tagline = Text::new(ctx.i18n.tr("app.description")).size(typography::BODY_SM);

    let new_note_button = button(Text::new(ctx.i18n.tr("navbar.new-note")))
        .on_press(Message::NewNote)
        .padding([spacing::XXS, spacing::SM]);

    let theme_trigger = build_trigger(
        ctx.i18n.tr("navbar.theme.label"),
        Menu::Theme,
        ctx.open_menu,
    );
    let language_trigger = build_trigger(
        ctx.i18n.tr("navbar.language"),
        Menu::Language,
        ctx.open_menu,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(title)
        .push(tagline)
        .push(Space::new().width(Length::Fill))
        .push(new_note_button)
        .push(theme_trigger)
        .push(language_trigger);

    // The account menu only carries the logout entry, so it is hidden
    // entirely when the service never signs anyone in.
    if ctx.authentication_required && ctx.is_authenticated {
        row = row.push(build_trigger(
            ctx.i18n.tr("navbar.account.label"),
            Menu::Account,
            ctx.open_menu,
        ));
    }

    let inner = Container::new(row)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::surface)
        .into()
}

/// Build one dropdown trigger button.
fn build_trigger<'a>(
    label: String,
    menu: Menu,
    open_menu: Option<Menu>,
) -> Element<'a, Message> {
    let trigger = button(Text::new(label))
        .on_press(Message::ToggleMenu(menu))
        .padding([spacing::XXS, spacing::SM]);

    if open_menu == Some(menu) {
        trigger.style(styles::button::selected).into()
    } else {
        trigger.style(styles::button::ghost).into()
    }
}

/// Build the open dropdown panel for `menu`.
fn build_dropdown<'a>(ctx: &ViewContext<'a>, menu: Menu) -> Element<'a, Message> {
    let items = match menu {
        Menu::Theme => build_theme_items(ctx),
        Menu::Language => build_language_items(ctx),
        Menu::Account => build_account_items(ctx),
    };

    let panel = Container::new(items)
        .padding(spacing::XS)
        .width(sizing::MENU_WIDTH)
        .style(styles::container::menu_panel);

    Container::new(panel)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding([0.0, spacing::SM])
        .into()
}

/// Build the theme menu items (light, dark, system), with the active mode
/// highlighted.
fn build_theme_items<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let modes = [
        (ThemeMode::Light, "navbar.theme.light"),
        (ThemeMode::Dark, "navbar.theme.dark"),
        (ThemeMode::System, "navbar.theme.system"),
    ];

    let mut column = Column::new().spacing(spacing::XXS);
    for (mode, key) in modes {
        column = column.push(build_menu_item(
            ctx.i18n.tr(key),
            Message::ThemeSelected(mode),
            ctx.theme_mode == mode,
        ));
    }
    column.into()
}

/// Build the language menu items, one per supported locale, with the
/// active locale highlighted. Names are shown in their own language.
fn build_language_items<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS);
    for locale in ctx.i18n.locales() {
        let is_current = ctx.i18n.current_locale() == locale.key;
        column = column.push(build_menu_item(
            locale.name.to_string(),
            Message::LocaleSelected(locale.key),
            is_current,
        ));
    }
    column.into()
}

/// Build the account menu items.
fn build_account_items<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(build_menu_item(
            ctx.i18n.tr("navbar.account.logout"),
            Message::Logout,
            false,
        ))
        .into()
}

/// Build a single menu item.
fn build_menu_item<'a>(
    label: String,
    message: Message,
    highlighted: bool,
) -> Element<'a, Message> {
    let item = button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill);

    if highlighted {
        item.style(styles::button::selected).into()
    } else {
        item.style(menu_item_style).into()
    }
}

/// Style function for menu items.
fn menu_item_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.primary.strong.color.into()),
            text_color: palette.primary.strong.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(i18n: &I18n, open_menu: Option<Menu>) -> ViewContext<'_> {
        ViewContext {
            i18n,
            theme_mode: ThemeMode::System,
            open_menu,
            is_authenticated: false,
            authentication_required: false,
        }
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let _element = view(ctx(&i18n, None));
    }

    #[test]
    fn navbar_view_renders_with_each_menu_open() {
        let i18n = I18n::default();
        for menu in [Menu::Theme, Menu::Language, Menu::Account] {
            let _element = view(ctx(&i18n, Some(menu)));
        }
    }

    #[test]
    fn navbar_view_renders_with_account_menu_available() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::Dark,
            open_menu: Some(Menu::Account),
            is_authenticated: true,
            authentication_required: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_opens_and_closes() {
        let mut open_menu = None;

        let event = update(Message::ToggleMenu(Menu::Theme), &mut open_menu);
        assert_eq!(open_menu, Some(Menu::Theme));
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu(Menu::Theme), &mut open_menu);
        assert_eq!(open_menu, None);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn opening_another_menu_replaces_the_open_one() {
        let mut open_menu = Some(Menu::Theme);

        let _ = update(Message::ToggleMenu(Menu::Language), &mut open_menu);
        assert_eq!(open_menu, Some(Menu::Language));
    }

    #[test]
    fn selections_close_the_menu_and_emit_events() {
        let mut open_menu = Some(Menu::Theme);
        let event = update(Message::ThemeSelected(ThemeMode::Dark), &mut open_menu);
        assert_eq!(open_menu, None);
        assert!(matches!(event, Event::ThemeSelected(ThemeMode::Dark)));

        open_menu = Some(Menu::Language);
        let event = update(Message::LocaleSelected("en"), &mut open_menu);
        assert_eq!(open_menu, None);
        assert!(matches!(event, Event::LocaleSelected("en")));

        open_menu = Some(Menu::Account);
        let event = update(Message::Logout, &mut open_menu);
        assert_eq!(open_menu, None);
        assert!(matches!(event, Event::LogoutRequested));
    }

    #[test]
    fn new_note_closes_menus_and_emits_event() {
        let mut open_menu = Some(Menu::Language);
        let event = update(Message::NewNote, &mut open_menu);
        assert_eq!(open_menu, None);
        assert!(matches!(event, Event::NewNoteRequested));
    }
}
