// SPDX-License-Identifier: MPL-2.0
//! `iced_enclave` is the desktop client shell for the Enclave encrypted
//! note-sharing service, built with the Iced GUI framework.
//!
//! It provides the top-level page chrome (navbar, theme and language menus,
//! footer, insecure-transport warning) and demonstrates internationalization
//! with embedded JSON dictionaries, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_enclave/0.1.0")]

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
