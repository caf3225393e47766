// SPDX-License-Identifier: MPL-2.0
//! Locale enumeration, initial-locale resolution, and the translation service.

use crate::i18n::dictionary::{self, FlattenedDictionary};
use unic_langid::LanguageIdentifier;

/// One supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleDescriptor {
    /// BCP-47 tag, unique across the enumeration.
    pub key: &'static str,
    /// Stem of the dictionary file under `locales/`.
    pub file: &'static str,
    /// Native display name, shown untranslated in the language menu.
    pub name: &'static str,
}

/// Supported locales. Order matters: primary-subtag matching picks the first
/// key with a matching prefix, so `zh` resolves to `zh-CN`.
pub const LOCALES: &[LocaleDescriptor] = &[
    LocaleDescriptor {
        key: "zh-CN",
        file: "zh-CN",
        name: "简体中文",
    },
    LocaleDescriptor {
        key: "zh-TW",
        file: "zh-TW",
        name: "繁體中文",
    },
    LocaleDescriptor {
        key: "en",
        file: "en",
        name: "English",
    },
    LocaleDescriptor {
        key: "de",
        file: "de",
        name: "Deutsch",
    },
    LocaleDescriptor {
        key: "fr",
        file: "fr",
        name: "Français",
    },
    LocaleDescriptor {
        key: "es",
        file: "es",
        name: "Español",
    },
    LocaleDescriptor {
        key: "ru",
        file: "ru",
        name: "Русский",
    },
];

/// Locale used when nothing else resolves; also the merge base for every
/// other dictionary.
pub const FALLBACK_LOCALE: &str = "zh-CN";

/// Returns the canonical static key if `key` names an enumerated locale.
#[must_use]
pub fn supported_key(key: &str) -> Option<&'static str> {
    LOCALES
        .iter()
        .find(|descriptor| descriptor.key == key)
        .map(|descriptor| descriptor.key)
}

/// Resolves the locale to use at startup.
///
/// A persisted preference wins if it names an enumerated key. Otherwise the
/// system language tag is matched exactly, then by primary subtag against
/// the prefix of enumerated keys. Anything else resolves to
/// [`FALLBACK_LOCALE`]; this function never fails.
#[must_use]
pub fn resolve_initial_locale(
    persisted: Option<&str>,
    system_tag: Option<&str>,
) -> &'static str {
    if let Some(saved) = persisted {
        if let Some(key) = supported_key(saved) {
            return key;
        }
    }

    if let Some(tag) = system_tag {
        if let Some(key) = match_tag(tag) {
            return key;
        }
    }

    FALLBACK_LOCALE
}

/// Matches a BCP-47 tag against the enumerated locales.
fn match_tag(tag: &str) -> Option<&'static str> {
    let parsed: LanguageIdentifier = tag.parse().ok()?;

    let canonical = parsed.to_string();
    if let Some(key) = supported_key(&canonical) {
        return Some(key);
    }

    let primary = parsed.language.as_str();
    LOCALES
        .iter()
        .find(|descriptor| descriptor.key.starts_with(primary))
        .map(|descriptor| descriptor.key)
}

/// Translation service owned by the application and passed by reference into
/// every view that renders text.
///
/// The table starts empty and is swapped in whole once a dictionary load
/// completes; a failed load leaves the previous table untouched.
pub struct I18n {
    current_locale: &'static str,
    table: FlattenedDictionary,
    ready: bool,
}

impl Default for I18n {
    fn default() -> Self {
        let table = dictionary::load_dictionary(FALLBACK_LOCALE).unwrap_or_default();
        let ready = !table.is_empty();
        Self {
            current_locale: FALLBACK_LOCALE,
            table,
            ready,
        }
    }
}

impl I18n {
    /// Creates a service for `locale` with no dictionary installed yet.
    #[must_use]
    pub fn new(locale: &'static str) -> Self {
        Self {
            current_locale: locale,
            table: FlattenedDictionary::new(),
            ready: false,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &'static str {
        self.current_locale
    }

    /// Whether a dictionary has been installed since startup.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[must_use]
    pub fn locales(&self) -> &'static [LocaleDescriptor] {
        LOCALES
    }

    /// Swaps in a freshly loaded dictionary for `locale`.
    pub fn install(&mut self, locale: &'static str, table: FlattenedDictionary) {
        self.current_locale = locale;
        self.table = table;
        self.ready = true;
    }

    /// Looks up `key` in the flattened table. An absent key returns the key
    /// itself verbatim, so untranslated UI stays legible instead of failing.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.table
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Like [`I18n::tr`], substituting positional `{0}`, `{1}`… placeholders.
    #[must_use]
    pub fn tr_with(&self, key: &str, args: &[&str]) -> String {
        let mut result = self.tr(key);
        for (index, arg) in args.iter().enumerate() {
            result = result.replace(&format!("{{{index}}}"), arg);
        }
        result
    }
}
