// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities backed by nested JSON
//! dictionaries embedded in the binary, one per supported locale.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, persisted preference, or system settings
//! - Per-locale dictionaries merged over the fallback locale, so untranslated
//!   keys never go missing
//! - Dotted-path lookup (`"navbar.theme.light"`) over a flattened table
//! - Runtime language switching

pub mod catalog;
pub mod dictionary;
