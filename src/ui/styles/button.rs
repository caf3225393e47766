// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius};
use iced::widget::button;
use iced::{Border, Theme};

/// Text-only link button (footer links, "learn more").
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => extended.primary.strong.color,
        _ => extended.primary.base.color,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Low-emphasis trigger button for the navbar menus.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(extended.background.weak.color.into()),
            text_color: extended.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: extended.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Highlight for the currently active menu entry.
pub fn selected(theme: &Theme, _status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    button::Style {
        background: Some(extended.primary.weak.color.into()),
        text_color: extended.primary.weak.text,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}
