// SPDX-License-Identifier: MPL-2.0
//! Dictionary loading, merging, and flattening.
//!
//! Each locale ships as one nested JSON file under `locales/`, embedded in
//! the binary. Loading a locale merges its tree over the fallback locale's
//! tree and flattens the result into a dotted-path lookup table, so every
//! table contains at least the full fallback key set.

use crate::error::{DictionaryError, Result};
use crate::i18n::catalog::{FALLBACK_LOCALE, LOCALES};
use rust_embed::RustEmbed;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Asset;

/// Nested JSON tree as it appears in a locale file.
pub type RawDictionary = Map<String, Value>;

/// Dotted-path lookup table derived from a merged [`RawDictionary`].
pub type FlattenedDictionary = HashMap<String, String>;

/// Loads the flattened dictionary for `locale`.
///
/// The locale's raw tree is merged over a clone of the fallback locale's
/// tree before flattening, so keys missing from a translation resolve to the
/// fallback strings. A missing or malformed dictionary file is an error; the
/// caller decides what to do with the previously installed table.
pub fn load_dictionary(locale: &str) -> Result<FlattenedDictionary> {
    let mut merged = read_raw(FALLBACK_LOCALE)?;
    if locale != FALLBACK_LOCALE {
        deep_merge(&mut merged, read_raw(locale)?);
    }
    Ok(flatten(&merged))
}

/// Reads and parses the embedded JSON file for one locale.
fn read_raw(locale: &str) -> Result<RawDictionary> {
    let file = LOCALES
        .iter()
        .find(|descriptor| descriptor.key == locale)
        .map_or(locale, |descriptor| descriptor.file);
    let filename = format!("{file}.json");

    let content = Asset::get(&filename)
        .ok_or_else(|| DictionaryError::MissingResource(locale.to_string()))?;
    let value: Value = serde_json::from_slice(content.data.as_ref())?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DictionaryError::NotAnObject(filename).into()),
    }
}

/// Deep-merges `overlay` onto `base`.
///
/// Nested objects merge key by key; any other value from the overlay
/// (string, array, number) replaces the base value wholesale.
pub fn deep_merge(base: &mut RawDictionary, overlay: RawDictionary) {
    for (key, incoming) in overlay {
        match (base.remove(&key), incoming) {
            (Some(Value::Object(mut existing)), Value::Object(nested)) => {
                deep_merge(&mut existing, nested);
                base.insert(key, Value::Object(existing));
            }
            (_, incoming) => {
                base.insert(key, incoming);
            }
        }
    }
}

/// Flattens a nested tree into dotted-path keys, keeping string leaves only.
///
/// `{"navbar": {"theme": {"light": "…"}}}` becomes `{"navbar.theme.light": "…"}`.
pub fn flatten(raw: &RawDictionary) -> FlattenedDictionary {
    let mut table = HashMap::new();
    flatten_into(raw, "", &mut table);
    table
}

fn flatten_into(node: &RawDictionary, prefix: &str, table: &mut FlattenedDictionary) {
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(nested, &path, table),
            Value::String(text) => {
                table.insert(path, text.clone());
            }
            // Non-string leaves are not translatable content.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn object(value: Value) -> RawDictionary {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn merge_overrides_leaves_and_keeps_siblings() {
        let mut base = object(json!({ "a": { "b": "y", "c": "z" } }));
        let overlay = object(json!({ "a": { "b": "x" } }));

        deep_merge(&mut base, overlay);
        let table = flatten(&base);

        assert_eq!(table.get("a.b").map(String::as_str), Some("x"));
        assert_eq!(table.get("a.c").map(String::as_str), Some("z"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn merge_replaces_object_with_leaf_wholesale() {
        let mut base = object(json!({ "a": { "b": "y" } }));
        let overlay = object(json!({ "a": "flat" }));

        deep_merge(&mut base, overlay);
        let table = flatten(&base);

        assert_eq!(table.get("a").map(String::as_str), Some("flat"));
        assert!(!table.contains_key("a.b"));
    }

    #[test]
    fn merge_adds_keys_absent_from_base() {
        let mut base = object(json!({ "a": "1" }));
        let overlay = object(json!({ "b": { "c": "2" } }));

        deep_merge(&mut base, overlay);
        let table = flatten(&base);

        assert_eq!(table.get("a").map(String::as_str), Some("1"));
        assert_eq!(table.get("b.c").map(String::as_str), Some("2"));
    }

    #[test]
    fn flatten_skips_non_string_leaves() {
        let raw = object(json!({ "a": 3, "b": { "c": "ok", "d": [1, 2] } }));
        let table = flatten(&raw);

        assert_eq!(table.get("b.c").map(String::as_str), Some("ok"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn load_dictionary_for_fallback_locale_succeeds() {
        let table = load_dictionary(FALLBACK_LOCALE).expect("fallback dictionary must load");
        assert!(table.contains_key("app.title"));
    }

    #[test]
    fn every_locale_flattens_to_a_superset_of_the_fallback() {
        let fallback = load_dictionary(FALLBACK_LOCALE).expect("fallback dictionary must load");

        for descriptor in LOCALES {
            let table = load_dictionary(descriptor.key)
                .unwrap_or_else(|_| panic!("dictionary for {} must load", descriptor.key));
            for key in fallback.keys() {
                assert!(
                    table.contains_key(key),
                    "locale {} is missing key {} after merge",
                    descriptor.key,
                    key
                );
            }
        }
    }

    #[test]
    fn partial_translation_falls_back_to_default_strings() {
        // es.json intentionally omits the content section
        let fallback = load_dictionary(FALLBACK_LOCALE).expect("fallback dictionary must load");
        let table = load_dictionary("es").expect("es dictionary must load");

        assert_eq!(table.get("content.placeholder"), fallback.get("content.placeholder"));
        assert_ne!(table.get("navbar.new-note"), fallback.get("navbar.new-note"));
    }

    #[test]
    fn load_dictionary_for_unknown_locale_fails() {
        let result = load_dictionary("xx");
        assert!(matches!(
            result,
            Err(Error::Dictionary(DictionaryError::MissingResource(_)))
        ));
    }
}
