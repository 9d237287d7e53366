// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::langtag;
use crate::parser::{self, SubtagIterator};
use crate::provider;
use crate::subtags::{Language, Region, Script};
use core::fmt;
use core::str::FromStr;
use litemap::LiteMap;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};
use writeable::Writeable;

/// Reserved keyword key carrying Unicode locale attributes in the legacy
/// form.
pub(crate) const ATTRIBUTE_KEY: &str = "attribute";

/// A locale identifier: language, script, region, variants, plus the
/// keyword section of the legacy underscore form.
///
/// The canonical string form is the legacy one,
/// `lang[_Scrp][_RG][_VARIANT]...[@key=value;...]`, with a doubled
/// separator before a variant when the region is empty. Keywords,
/// attributes and single-character extensions are merged into one
/// `@`-section sorted by key, so equal identifiers always serialize
/// identically.
///
/// Parsing via [`LocaleId::from_name`] is lenient and never fails;
/// unrecognized trailing material is preserved as variant strings. Inputs
/// that look like BCP 47 language tags (no `@`, and a one-character
/// segment somewhere) are routed to the language-tag parser.
///
/// # Examples
///
/// ```
/// use uloc::LocaleId;
///
/// let loc = LocaleId::from_name("sr-latn_rs_latin");
/// assert_eq!(loc.to_string(), "sr_Latn_RS_LATIN");
///
/// let loc = LocaleId::from_name("de_DE@collation=phonebook;currency=EUR");
/// assert_eq!(loc.keyword("collation"), Some("phonebook"));
/// assert_eq!(loc.to_string(), "de_DE@collation=phonebook;currency=eur");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct LocaleId {
    /// Language subtag; the root language when absent.
    pub language: Language,
    /// Script subtag.
    pub script: Option<Script>,
    /// Region subtag.
    pub region: Option<Region>,
    pub(crate) variants: Vec<String>,
    pub(crate) keywords: LiteMap<String, String>,
    pub(crate) attributes: Vec<String>,
    pub(crate) extensions: LiteMap<char, String>,
}

#[derive(PartialEq, Clone, Copy)]
enum ParserPosition {
    Script,
    Region,
    Variant,
}

impl LocaleId {
    /// The root identifier; serializes to the empty string.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses any locale name, legacy or BCP 47, never failing.
    pub fn from_name(name: &str) -> Self {
        if parser::is_language_tag(name) {
            return langtag::from_language_tag(name, &provider::KEY_TYPE_DATA);
        }
        Self::from_legacy_name(name)
    }

    /// Parses a legacy underscore name without BCP 47 autodetection.
    pub(crate) fn from_legacy_name(name: &str) -> Self {
        let (base, keyword_section) = match name.split_once('@') {
            Some((base, keywords)) => (base, Some(keywords)),
            None => (name, None),
        };
        let mut id = Self::parse_base(base);
        if let Some(section) = keyword_section {
            id.parse_keyword_section(section);
        }
        id
    }

    /// Parses a BCP 47 language tag leniently (ill-formed trailing subtags
    /// are truncated), decomposing the Unicode extension into keywords and
    /// attributes with the compiled-in key/type data.
    pub fn from_language_tag(tag: &str) -> Self {
        langtag::from_language_tag(tag, &provider::KEY_TYPE_DATA)
    }

    /// Serializes this identifier as a BCP 47 language tag using the
    /// compiled-in key/type data.
    pub fn to_language_tag(&self) -> String {
        langtag::to_language_tag(self, &provider::KEY_TYPE_DATA)
    }

    /// Parses and reserializes a name into its normalized legacy form.
    /// Results are memoized in a process-wide cache.
    pub fn normalize(name: &str) -> String {
        static NAME_CACHE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();

        let cache = NAME_CACHE.get_or_init(|| Mutex::new(HashMap::new()));
        if let Ok(guard) = cache.lock() {
            if let Some(hit) = guard.get(name) {
                return hit.clone();
            }
        }
        let normalized = Self::from_name(name).to_string();
        if let Ok(mut guard) = cache.lock() {
            guard.insert(name.to_owned(), normalized.clone());
        }
        normalized
    }

    fn parse_base(base: &str) -> Self {
        let mut id = Self::default();
        let mut iter = SubtagIterator::new(base.as_bytes());
        let mut position = ParserPosition::Script;

        match iter.next() {
            None => return id,
            Some(first) => match Language::try_from_utf8(first) {
                Ok(language) => id.language = language,
                Err(_) => {
                    // A first segment the model cannot hold as a language
                    // degrades to the root language; the material is kept.
                    id.push_raw_variant(first);
                    position = ParserPosition::Variant;
                }
            },
        }

        for subtag in iter {
            if subtag.is_empty() {
                // Doubled separator: serialization doubles it only for
                // an empty region before a variant, so everything after
                // is variant material.
                position = ParserPosition::Variant;
                continue;
            }
            if position == ParserPosition::Script {
                if let Ok(script) = Script::try_from_utf8(subtag) {
                    id.script = Some(script);
                    position = ParserPosition::Region;
                    continue;
                }
                position = ParserPosition::Region;
            }
            if position == ParserPosition::Region {
                position = ParserPosition::Variant;
                if let Ok(region) = Region::try_from_utf8(subtag) {
                    id.region = Some(region);
                    continue;
                }
            }
            id.push_raw_variant(subtag);
        }
        id
    }

    fn parse_keyword_section(&mut self, section: &str) {
        for pair in section.split(';') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            if key.is_empty() || value.is_empty() {
                continue;
            }
            if key == ATTRIBUTE_KEY {
                self.set_attributes(value.split(['-', '_']).map(str::to_owned).collect());
            } else if key.len() == 1 {
                // Single-character keys are extension stubs; `u` never
                // appears here since its content lives in keywords.
                if let Some(k) = key.chars().next() {
                    if k != 'u' {
                        self.extensions.insert(k, value);
                    }
                }
            } else {
                self.keywords.insert(key, value);
            }
        }
    }

    pub(crate) fn push_raw_variant(&mut self, subtag: &[u8]) {
        if subtag.is_empty() {
            return;
        }
        let mut variant = String::from_utf8_lossy(subtag).into_owned();
        variant.make_ascii_uppercase();
        self.variants.push(variant);
    }

    pub(crate) fn set_attributes(&mut self, mut attributes: Vec<String>) {
        attributes.retain(|attribute| !attribute.is_empty());
        attributes.sort();
        attributes.dedup();
        self.attributes = attributes;
    }

    /// Whether language, script, region and variants are all empty.
    pub fn is_root(&self) -> bool {
        self.language.is_root()
            && self.script.is_none()
            && self.region.is_none()
            && self.variants.is_empty()
    }

    /// The ordered variant subtags, in their stored uppercase form.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    /// The value for a keyword key, if set. Keys are matched in their
    /// lowercase form.
    pub fn keyword(&self, key: &str) -> Option<&str> {
        self.keywords.get(key.to_ascii_lowercase().as_str()).map(String::as_str)
    }

    /// All keywords in canonical (sorted) key order.
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keywords.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets a keyword; key and value are lowercased. Empty keys or values
    /// are ignored.
    pub fn set_keyword(&mut self, key: &str, value: &str) {
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim().to_ascii_lowercase();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.keywords.insert(key, value);
    }

    /// Removes a keyword, returning its previous value.
    pub fn remove_keyword(&mut self, key: &str) -> Option<String> {
        self.keywords.remove(key.to_ascii_lowercase().as_str())
    }

    /// The sorted Unicode locale attributes.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// All single-character extensions other than `u`, in key order.
    pub fn extensions(&self) -> impl Iterator<Item = (char, &str)> {
        self.extensions.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// The raw value of a single-character extension.
    pub fn extension(&self, key: char) -> Option<&str> {
        self.extensions.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    /// The legacy form without the keyword section.
    pub fn base_name(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_base(&mut out);
        out
    }

    /// The inheritance parent: the identifier with its most specific
    /// populated field removed (last variant, then region, then script,
    /// then language). The root has no parent.
    pub fn fallback(&self) -> Option<Self> {
        let mut parent = self.clone();
        if parent.variants.pop().is_some() {
            return Some(parent);
        }
        if parent.region.take().is_some() {
            return Some(parent);
        }
        if parent.script.take().is_some() {
            return Some(parent);
        }
        if !parent.language.is_root() {
            parent.language = Language::ROOT;
            return Some(parent);
        }
        None
    }

    fn write_base<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        sink.write_str(self.language.as_str())?;
        if let Some(script) = self.script {
            sink.write_char('_')?;
            sink.write_str(script.as_str())?;
        }
        if let Some(region) = self.region {
            sink.write_char('_')?;
            sink.write_str(region.as_str())?;
        }
        if !self.variants.is_empty() {
            if self.region.is_none() {
                sink.write_char('_')?;
            }
            for variant in &self.variants {
                sink.write_char('_')?;
                sink.write_str(variant)?;
            }
        }
        Ok(())
    }

    fn keyword_entries(&self) -> Vec<(String, String)> {
        let mut entries: Vec<(String, String)> = Vec::new();
        for (key, value) in self.extensions.iter() {
            entries.push((key.to_string(), value.clone()));
        }
        for (key, value) in self.keywords.iter() {
            entries.push((key.clone(), value.clone()));
        }
        if !self.attributes.is_empty() {
            entries.push((ATTRIBUTE_KEY.to_owned(), self.attributes.join("-")));
        }
        entries.sort();
        entries
    }
}

impl Writeable for LocaleId {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.write_base(sink)?;
        let entries = self.keyword_entries();
        if !entries.is_empty() {
            sink.write_char('@')?;
            let mut first = true;
            for (key, value) in entries {
                if !first {
                    sink.write_char(';')?;
                }
                first = false;
                sink.write_str(&key)?;
                sink.write_char('=')?;
                sink.write_str(&value)?;
            }
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        writeable::LengthHint::at_least(self.language.as_str().len())
    }
}

writeable::impl_display_with_writeable!(LocaleId);

impl FromStr for LocaleId {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}
