// SPDX-License-Identifier: MPL-2.0
use iced_enclave::config::{self, Config, GeneralConfig};
use iced_enclave::i18n::catalog::{self, I18n, FALLBACK_LOCALE, LOCALES};
use iced_enclave::i18n::dictionary;
use iced_enclave::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn system_tag_with_exact_match_wins() {
    for descriptor in LOCALES {
        assert_eq!(
            catalog::resolve_initial_locale(None, Some(descriptor.key)),
            descriptor.key
        );
    }
}

#[test]
fn system_tag_with_region_falls_back_to_base_language() {
    assert_eq!(catalog::resolve_initial_locale(None, Some("en-US")), "en");
    assert_eq!(catalog::resolve_initial_locale(None, Some("fr-CA")), "fr");
}

#[test]
fn unsupported_system_tag_resolves_to_the_fallback() {
    assert_eq!(
        catalog::resolve_initial_locale(None, Some("ja-JP")),
        FALLBACK_LOCALE
    );
}

#[test]
fn persisted_language_survives_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // First session: the user switches to Spanish
    let chosen = Config {
        general: GeneralConfig {
            language: Some("es".to_string()),
            theme_mode: ThemeMode::System,
        },
        ..Config::default()
    };
    config::save_to_path(&chosen, &config_path).expect("Failed to write config file");

    // Next session: the persisted preference beats system detection
    let reloaded = config::load_from_path(&config_path).expect("Failed to load config");
    let resolved =
        catalog::resolve_initial_locale(reloaded.general.language.as_deref(), Some("en-US"));
    assert_eq!(resolved, "es");
}

#[test]
fn every_locale_covers_the_fallback_key_set() {
    let fallback = dictionary::load_dictionary(FALLBACK_LOCALE).expect("fallback must load");

    for descriptor in LOCALES {
        let table = dictionary::load_dictionary(descriptor.key)
            .unwrap_or_else(|_| panic!("dictionary for {} must load", descriptor.key));
        for key in fallback.keys() {
            assert!(
                table.contains_key(key),
                "locale {} lost key {} in the merge",
                descriptor.key,
                key
            );
        }
    }
}

#[test]
fn untranslated_keys_resolve_to_fallback_strings() {
    // ru.json carries no footer section
    let fallback = dictionary::load_dictionary(FALLBACK_LOCALE).expect("fallback must load");
    let russian = dictionary::load_dictionary("ru").expect("ru must load");

    assert_eq!(russian.get("footer.blog"), fallback.get("footer.blog"));
    assert_ne!(
        russian.get("navbar.language"),
        fallback.get("navbar.language")
    );
}

#[test]
fn language_switch_end_to_end() {
    let mut i18n = I18n::default();
    assert_eq!(i18n.tr("navbar.language"), "语言");

    let resolved = catalog::resolve_initial_locale(Some("de"), None);
    let table = dictionary::load_dictionary(resolved).expect("de must load");
    i18n.install(resolved, table);

    assert_eq!(i18n.current_locale(), "de");
    assert_eq!(i18n.tr("navbar.language"), "Sprache");
}
