// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! Bridging to a host platform's native locale names.
//!
//! Hosts differ in which textual form they hand over: older platforms
//! use underscore names, newer ones BCP 47 language tags. Rather than
//! probing the host at every call, the style is a process-wide
//! capability pinned the first time anything consults it.

use crate::locale::LocaleId;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// The textual form a host platform uses for locale names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HostTagStyle {
    /// Underscore names only (`en_US_POSIX`).
    Legacy,
    /// BCP 47 language tags (`en-US-u-va-posix`).
    Bcp47,
}

static HOST_STYLE: OnceLock<HostTagStyle> = OnceLock::new();

/// Requests a host tag style for this process and returns the style
/// actually in effect. The first caller wins; once pinned, the style
/// never changes.
pub fn set_host_tag_style(style: HostTagStyle) -> HostTagStyle {
    *HOST_STYLE.get_or_init(|| style)
}

/// The pinned host tag style, defaulting to [`HostTagStyle::Bcp47`] when
/// nothing was requested before first use.
pub fn host_tag_style() -> HostTagStyle {
    *HOST_STYLE.get_or_init(|| HostTagStyle::Bcp47)
}

/// Parses a host-supplied locale name according to the pinned style.
///
/// Results are memoized per input string in a process-wide cache, as
/// hosts tend to report the same handful of names over and over.
pub fn from_host(name: &str) -> LocaleId {
    static HOST_CACHE: OnceLock<Mutex<HashMap<String, LocaleId>>> = OnceLock::new();

    let cache = HOST_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    if let Ok(guard) = cache.lock() {
        if let Some(hit) = guard.get(name) {
            return hit.clone();
        }
    }
    let parsed = match host_tag_style() {
        HostTagStyle::Legacy => LocaleId::from_legacy_name(name),
        HostTagStyle::Bcp47 => LocaleId::from_language_tag(name),
    };
    if let Ok(mut guard) = cache.lock() {
        guard.insert(name.to_owned(), parsed.clone());
    }
    parsed
}

/// Serializes an identifier in the form the pinned host style expects.
pub fn to_host(locale: &LocaleId) -> String {
    match host_tag_style() {
        HostTagStyle::Legacy => locale.to_string(),
        HostTagStyle::Bcp47 => locale.to_language_tag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Everything in one test body: the style pins process-wide, so
    // separate tests would race on it.
    #[test]
    fn style_pins_once_and_drives_both_directions() {
        assert_eq!(set_host_tag_style(HostTagStyle::Bcp47), HostTagStyle::Bcp47);
        assert_eq!(set_host_tag_style(HostTagStyle::Legacy), HostTagStyle::Bcp47);
        assert_eq!(host_tag_style(), HostTagStyle::Bcp47);

        assert_eq!(from_host("en-US-u-va-posix").to_string(), "en_US_POSIX");
        // Second call hits the cache.
        assert_eq!(from_host("en-US-u-va-posix").to_string(), "en_US_POSIX");
        assert_eq!(from_host("de-u-co-phonebk").to_string(), "de@collation=phonebook");

        let locale = LocaleId::from_name("en_US_POSIX");
        assert_eq!(to_host(&locale), "en-US-u-va-posix");
    }
}
