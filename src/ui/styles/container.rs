// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bar surface for the navbar and footer.
pub fn surface(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        ..Default::default()
    }
}

/// Floating dropdown panel under a navbar trigger.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: extended.background.strong.color,
        },
        ..Default::default()
    }
}

/// Soft warning strip for the insecure-transport banner.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    let tint = Color {
        a: opacity::TINT,
        ..palette::WARNING_500
    };

    container::Style {
        background: Some(Background::Color(tint)),
        text_color: Some(palette::WARNING_500),
        ..Default::default()
    }
}
