// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::i18n::dictionary::FlattenedDictionary;
use crate::ui::banner;
use crate::ui::footer;
use crate::ui::navbar;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Footer(footer::Message),
    Banner(banner::Message),
    /// The compose area's text changed.
    DraftChanged(String),
    /// Result of an asynchronous dictionary load. Applied only while
    /// `locale` is still the latest requested one.
    DictionaryLoaded {
        locale: &'static str,
        result: Result<FlattenedDictionary, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `zh-CN`).
    pub lang: Option<String>,
}
