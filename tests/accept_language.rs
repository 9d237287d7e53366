// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use uloc::{accept_language, LocaleExpander, LocaleId};

fn locales(names: &[&str]) -> Vec<LocaleId> {
    names.iter().map(|name| LocaleId::from_name(name)).collect()
}

#[test]
fn weighted_header_against_available_set() {
    let available = locales(&["fr", "de", "en_US"]);
    let lc = LocaleExpander::new_common();

    let hit = accept_language("en-us;q=0.3,fr;q=0.9,de", &available, &lc)
        .unwrap()
        .unwrap();
    assert_eq!(hit.locale.to_string(), "fr");
    assert!(!hit.fallback);

    let available = locales(&["fr", "de", "en"]);
    let hit = accept_language("en-gb", &available, &lc).unwrap().unwrap();
    assert_eq!(hit.locale.to_string(), "en");
    assert!(hit.fallback);
}

#[test]
fn wildcard_only_header_matches_nothing() {
    let available = locales(&["en"]);
    let lc = LocaleExpander::new_common();
    assert_eq!(accept_language("*;q=0.9", &available, &lc).unwrap(), None);
}

#[test]
fn malformed_header_is_rejected_whole() {
    let available = locales(&["en"]);
    let lc = LocaleExpander::new_common();
    let err = accept_language("en, fr;q=!", &available, &lc).unwrap_err();
    assert_eq!(err.offset, 9);
}

#[test]
fn deprecated_ranges_match_canonical_availables() {
    // The header carries a deprecated name; canonicalization makes it
    // comparable to the modern available entry.
    let available = locales(&["zh_Hant", "en"]);
    let lc = LocaleExpander::new_common();
    let hit = accept_language("zh-cht", &available, &lc).unwrap().unwrap();
    assert_eq!(hit.locale.to_string(), "zh_Hant");
    assert!(!hit.fallback);
}
