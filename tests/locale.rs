// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use uloc::{canonicalize, canonicalize_name, LocaleExpander, LocaleId};

const CORPUS: &[&str] = &[
    "",
    "en",
    "en_US",
    "EN_us",
    "sr-latn-rs",
    "zh_Hant_TW",
    "es_419",
    "de__PHONEBOOK",
    "en_US_POSIX",
    "fr_FR_EURO",
    "th_TH_TRADITIONAL",
    "nb_NO_NY",
    "sl_rozaj_biske",
    "zh_TW@collation=stroke",
    "de_DE@currency=EUR;collation=phonebook",
    "en@attribute=foo-bar;calendar=japanese;x=private",
    "english_US",
    "_US",
    "xx_YY",
];

#[test]
fn serialization_round_trips() {
    for name in CORPUS {
        let locale = LocaleId::from_name(name);
        let reparsed = LocaleId::from_name(&locale.to_string());
        assert_eq!(reparsed, locale, "{name:?}");
    }
}

#[test]
fn canonicalization_is_idempotent() {
    for name in CORPUS {
        let once = canonicalize_name(name);
        assert_eq!(canonicalize_name(&once), once, "{name:?}");
    }
}

#[test]
fn maximize_after_minimize_is_a_fixpoint() {
    let lc = LocaleExpander::new_common();
    for name in CORPUS {
        let mut maximized = LocaleId::from_name(name);
        lc.maximize(&mut maximized);

        let mut minimized = maximized.clone();
        lc.minimize(&mut minimized);

        let mut again = minimized.clone();
        lc.maximize(&mut again);
        assert_eq!(again, maximized, "{name:?}");
    }
}

#[test]
fn language_tags_round_trip_canonical_locales() {
    for name in CORPUS {
        let mut locale = LocaleId::from_name(name);
        canonicalize(&mut locale);
        let tag = locale.to_language_tag();
        assert_eq!(
            LocaleId::from_language_tag(&tag),
            locale,
            "{name:?} via {tag:?}"
        );
    }
}

#[test]
fn pipeline_from_tag_to_minimal_form() {
    let lc = LocaleExpander::new_common();

    let mut locale = LocaleId::from_name("th-TH-u-ca-buddhist");
    assert_eq!(locale.to_string(), "th_TH@calendar=buddhist");
    lc.maximize(&mut locale);
    assert_eq!(locale.to_string(), "th_Thai_TH@calendar=buddhist");
    lc.minimize(&mut locale);
    assert_eq!(locale.to_string(), "th@calendar=buddhist");
    assert_eq!(locale.to_language_tag(), "th-u-ca-buddhist");
}

#[test]
fn deprecated_names_reach_modern_tags() {
    for (name, tag) in [
        ("de__PHONEBOOK", "de-u-co-phonebk"),
        ("fr_FR_EURO", "fr-FR-u-cu-eur"),
        ("th_TH_TRADITIONAL", "th-TH-u-ca-buddhist"),
        ("zh_CHS", "zh-Hans"),
        ("C", "en-US-u-va-posix"),
    ] {
        let mut locale = LocaleId::from_name(name);
        canonicalize(&mut locale);
        assert_eq!(locale.to_language_tag(), tag, "{name:?}");
    }
}
