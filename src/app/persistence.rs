// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! This module handles saving user preferences to disk: the selected
//! language and the theme mode. Failures are reported to stderr and never
//! interrupt the UI.

use crate::config;
use crate::ui::theming::ThemeMode;

/// Persists the newly selected locale.
///
/// Guarded during tests to keep isolation: unit tests exercise the update
/// logic without touching the real config directory.
pub fn persist_locale(locale: &str) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

/// Persists the newly selected theme mode.
pub fn persist_theme_mode(mode: ThemeMode) {
    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.general.theme_mode = mode;

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}
