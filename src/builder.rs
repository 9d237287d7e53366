// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::langtag;
use crate::locale::LocaleId;
use crate::parser::{Field, SyntaxError};
use crate::provider;
use crate::subtags::{Language, Region, Script, Variant};
use litemap::LiteMap;

/// Strict, validating construction of [`LocaleId`] values.
///
/// Unlike [`LocaleId::from_name`], which accepts anything, every setter
/// here checks well-formedness and reports the offending field and byte
/// offset. The Unicode keyword state is held in its BCP 47 shape (`co` /
/// `phonebk`) and mapped to legacy keywords when [`build`] runs.
///
/// # Examples
///
/// ```
/// use uloc::LocaleBuilder;
///
/// let mut builder = LocaleBuilder::new();
/// let locale = builder
///     .set_language("de")?
///     .set_region("DE")?
///     .set_unicode_keyword_value("co", "phonebk")?
///     .build();
/// assert_eq!(locale.to_string(), "de_DE@collation=phonebook");
/// # Ok::<(), uloc::SyntaxError>(())
/// ```
///
/// [`build`]: Self::build
#[derive(Debug, Default, Clone)]
pub struct LocaleBuilder {
    language: Language,
    script: Option<Script>,
    region: Option<Region>,
    variants: Vec<Variant>,
    attributes: Vec<String>,
    keywords: LiteMap<String, String>,
    extensions: LiteMap<char, String>,
}

fn is_alnum(subtag: &str) -> bool {
    !subtag.is_empty() && subtag.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_alpha(subtag: &str) -> bool {
    !subtag.is_empty() && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

impl LocaleBuilder {
    /// An empty builder; [`build`](Self::build) yields the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the language. Accepts the empty string (root) or 2 to 8
    /// letters; only 2 and 3 letter codes are representable and longer
    /// well-formed codes degrade to the root language, as in tag parsing.
    pub fn set_language(&mut self, language: &str) -> Result<&mut Self, SyntaxError> {
        if language.is_empty() {
            self.language = Language::ROOT;
            return Ok(self);
        }
        if !is_alpha(language) || language.len() > 8 {
            return Err(SyntaxError::new(Field::Language, 0));
        }
        self.language = Language::try_from_str(language).unwrap_or(Language::ROOT);
        Ok(self)
    }

    /// Sets the script; the empty string clears it.
    pub fn set_script(&mut self, script: &str) -> Result<&mut Self, SyntaxError> {
        if script.is_empty() {
            self.script = None;
            return Ok(self);
        }
        match Script::try_from_str(script) {
            Ok(script) => {
                self.script = Some(script);
                Ok(self)
            }
            Err(_) => Err(SyntaxError::new(Field::Script, 0)),
        }
    }

    /// Sets the region; the empty string clears it.
    pub fn set_region(&mut self, region: &str) -> Result<&mut Self, SyntaxError> {
        if region.is_empty() {
            self.region = None;
            return Ok(self);
        }
        match Region::try_from_str(region) {
            Ok(region) => {
                self.region = Some(region);
                Ok(self)
            }
            Err(_) => Err(SyntaxError::new(Field::Region, 0)),
        }
    }

    /// Replaces the variant list with a `-` or `_` separated list of
    /// well-formed variant subtags, keeping their order.
    pub fn set_variant(&mut self, variants: &str) -> Result<&mut Self, SyntaxError> {
        if variants.is_empty() {
            self.variants.clear();
            return Ok(self);
        }
        let mut parsed = Vec::new();
        let mut offset = 0usize;
        for item in variants.split(['-', '_']) {
            match Variant::try_from_str(item) {
                Ok(variant) => parsed.push(variant),
                Err(_) => return Err(SyntaxError::new(Field::Variant, offset)),
            }
            offset += item.len() + 1;
        }
        self.variants = parsed;
        Ok(self)
    }

    /// Adds a Unicode locale attribute (3 to 8 alphanumerics).
    pub fn add_attribute(&mut self, attribute: &str) -> Result<&mut Self, SyntaxError> {
        if !is_alnum(attribute) || !(3..=8).contains(&attribute.len()) {
            return Err(SyntaxError::new(Field::Attribute, 0));
        }
        let attribute = attribute.to_ascii_lowercase();
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
            self.attributes.sort();
        }
        Ok(self)
    }

    /// Removes a Unicode locale attribute; unknown attributes are fine.
    pub fn remove_attribute(&mut self, attribute: &str) -> Result<&mut Self, SyntaxError> {
        if !is_alnum(attribute) || !(3..=8).contains(&attribute.len()) {
            return Err(SyntaxError::new(Field::Attribute, 0));
        }
        let attribute = attribute.to_ascii_lowercase();
        self.attributes.retain(|a| *a != attribute);
        Ok(self)
    }

    /// Sets a Unicode keyword by its BCP 47 key and type.
    ///
    /// The key is 2 alphanumerics. An empty type removes the keyword; the
    /// word `true` stands for a typeless key; anything else is a `-` or
    /// `_` separated list of 3 to 8 alphanumeric subtags.
    pub fn set_unicode_keyword_value(
        &mut self,
        key: &str,
        value: &str,
    ) -> Result<&mut Self, SyntaxError> {
        if key.len() != 2 || !is_alnum(key) {
            return Err(SyntaxError::new(Field::Key, 0));
        }
        let key = key.to_ascii_lowercase();
        if value.is_empty() {
            self.keywords.remove(key.as_str());
            return Ok(self);
        }
        let value = value.to_ascii_lowercase();
        if value != "true" {
            let mut offset = 0usize;
            for part in value.split(['-', '_']) {
                if !is_alnum(part) || !(3..=8).contains(&part.len()) {
                    return Err(SyntaxError::new(Field::Type, offset));
                }
                offset += part.len() + 1;
            }
        }
        self.keywords.insert(key, value.replace('_', "-"));
        Ok(self)
    }

    /// Sets an extension by singleton.
    ///
    /// `u` content is decomposed into attributes and keywords, replacing
    /// the prior Unicode state; `x` takes 1 to 8 alphanumerics per
    /// subtag; other singletons take 2 to 8. An empty value removes the
    /// extension (for `u`, the whole Unicode state).
    pub fn set_extension(&mut self, singleton: char, value: &str) -> Result<&mut Self, SyntaxError> {
        if !singleton.is_ascii_alphanumeric() {
            return Err(SyntaxError::new(Field::Extension, 0));
        }
        let singleton = singleton.to_ascii_lowercase();
        let value = value.to_ascii_lowercase();
        if value.is_empty() {
            if singleton == 'u' {
                self.attributes.clear();
                self.keywords.clear();
            } else {
                self.extensions.remove(&singleton);
            }
            return Ok(self);
        }

        let min_len = if singleton == 'x' { 1 } else { 2 };
        let mut subtags = Vec::new();
        let mut offset = 0usize;
        for part in value.split(['-', '_']) {
            if !is_alnum(part) || !(min_len..=8).contains(&part.len()) {
                return Err(SyntaxError::new(Field::Extension, offset));
            }
            subtags.push(part.to_owned());
            offset += part.len() + 1;
        }

        if singleton == 'u' {
            self.attributes.clear();
            self.keywords.clear();
            let mut idx = 0usize;
            while let Some(subtag) = subtags.get(idx) {
                if subtag.len() == 2 {
                    break;
                }
                self.add_attribute(subtag)?;
                idx += 1;
            }
            while let Some(key) = subtags.get(idx).cloned() {
                idx += 1;
                let mut type_parts: Vec<&str> = Vec::new();
                while let Some(part) = subtags.get(idx) {
                    if part.len() == 2 {
                        break;
                    }
                    type_parts.push(part);
                    idx += 1;
                }
                let value = if type_parts.is_empty() {
                    "true".to_owned()
                } else {
                    type_parts.join("-")
                };
                self.set_unicode_keyword_value(&key, &value)?;
            }
        } else {
            self.extensions.insert(singleton, subtags.join("-"));
        }
        Ok(self)
    }

    /// Replaces all state with a strict parse of a language tag.
    pub fn set_language_tag(&mut self, tag: &str) -> Result<&mut Self, SyntaxError> {
        let parsed = langtag::parse_language_tag(tag, &provider::KEY_TYPE_DATA)?;
        self.set_locale(&parsed)
    }

    /// Replaces all state with the fields of an existing identifier.
    ///
    /// Fails when the identifier carries a variant that is not a
    /// well-formed BCP 47 subtag, or a keyword with no BCP 47 form.
    pub fn set_locale(&mut self, locale: &LocaleId) -> Result<&mut Self, SyntaxError> {
        let mut next = Self {
            language: locale.language,
            script: locale.script,
            region: locale.region,
            ..Self::default()
        };
        for variant in locale.variants() {
            match Variant::try_from_str(variant) {
                Ok(variant) => next.variants.push(variant),
                Err(_) => return Err(SyntaxError::new(Field::Variant, 0)),
            }
        }
        next.attributes = locale.attributes().map(str::to_owned).collect();
        for (key, value) in locale.keywords() {
            let bcp_key = langtag::key_to_bcp47(key, &provider::KEY_TYPE_DATA)
                .ok_or_else(|| SyntaxError::new(Field::Key, 0))?;
            let bcp_type = langtag::type_to_bcp47(key, value, &provider::KEY_TYPE_DATA)
                .ok_or_else(|| SyntaxError::new(Field::Type, 0))?;
            next.keywords.insert(bcp_key, bcp_type);
        }
        for (singleton, value) in locale.extensions() {
            next.extensions.insert(singleton, value.to_owned());
        }
        *self = next;
        Ok(self)
    }

    /// Resets the builder to its empty state.
    pub fn clear(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    /// Drops all extensions, attributes and Unicode keywords, keeping
    /// language, script, region and variants.
    pub fn clear_extensions(&mut self) -> &mut Self {
        self.attributes.clear();
        self.keywords.clear();
        self.extensions.clear();
        self
    }

    /// Assembles the identifier, mapping the Unicode keyword state to
    /// legacy keywords through the compiled-in key/type data.
    pub fn build(&self) -> LocaleId {
        let mut locale = LocaleId::root();
        locale.language = self.language;
        locale.script = self.script;
        locale.region = self.region;
        for variant in &self.variants {
            locale.push_raw_variant(variant.as_str().as_bytes());
        }
        for (singleton, value) in self.extensions.iter() {
            locale.extensions.insert(*singleton, value.clone());
        }
        let pairs: Vec<(String, String)> = self
            .keywords
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        langtag::apply_unicode_pairs(
            &mut locale,
            self.attributes.clone(),
            &pairs,
            &provider::KEY_TYPE_DATA,
        );
        locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_base_fields() -> Result<(), SyntaxError> {
        let locale = LocaleBuilder::new()
            .set_language("sr")?
            .set_script("latn")?
            .set_region("rs")?
            .set_variant("1994-biske")?
            .build();
        assert_eq!(locale.to_string(), "sr_Latn_RS_1994_BISKE");
        Ok(())
    }

    #[test]
    fn empty_builder_builds_root() {
        assert!(LocaleBuilder::new().build().is_root());
    }

    #[test]
    fn setters_reject_ill_formed_input() {
        let mut builder = LocaleBuilder::new();
        let err = builder.set_language("123").unwrap_err();
        assert_eq!(err.field, Field::Language);
        let err = builder.set_script("latin").unwrap_err();
        assert_eq!(err.field, Field::Script);
        let err = builder.set_region("USA1").unwrap_err();
        assert_eq!(err.field, Field::Region);
        let err = builder.set_variant("1994-x").unwrap_err();
        assert_eq!(err.field, Field::Variant);
        assert_eq!(err.offset, 5);
        let err = builder.set_unicode_keyword_value("co", "p!").unwrap_err();
        assert_eq!(err.field, Field::Type);
        let err = builder.add_attribute("no").unwrap_err();
        assert_eq!(err.field, Field::Attribute);
    }

    #[test]
    fn long_language_degrades_to_root() -> Result<(), SyntaxError> {
        let locale = LocaleBuilder::new()
            .set_language("english")?
            .set_region("US")?
            .build();
        assert!(locale.language.is_root());
        assert_eq!(locale.to_string(), "_US");
        Ok(())
    }

    #[test]
    fn unicode_keywords_map_to_legacy_form() -> Result<(), SyntaxError> {
        let locale = LocaleBuilder::new()
            .set_language("th")?
            .set_region("TH")?
            .set_unicode_keyword_value("ca", "buddhist")?
            .set_unicode_keyword_value("nu", "thai")?
            .build();
        assert_eq!(locale.to_string(), "th_TH@calendar=buddhist;numbers=thai");
        Ok(())
    }

    #[test]
    fn typeless_keyword_and_removal() -> Result<(), SyntaxError> {
        let mut builder = LocaleBuilder::new();
        builder.set_language("en")?.set_unicode_keyword_value("co", "true")?;
        assert_eq!(builder.build().to_string(), "en@collation=true");
        builder.set_unicode_keyword_value("co", "")?;
        assert_eq!(builder.build().to_string(), "en");
        Ok(())
    }

    #[test]
    fn va_posix_becomes_variant() -> Result<(), SyntaxError> {
        let locale = LocaleBuilder::new()
            .set_language("en")?
            .set_region("US")?
            .set_unicode_keyword_value("va", "posix")?
            .build();
        assert_eq!(locale.to_string(), "en_US_POSIX");
        Ok(())
    }

    #[test]
    fn attributes_sort_and_dedup() -> Result<(), SyntaxError> {
        let mut builder = LocaleBuilder::new();
        builder
            .set_language("en")?
            .add_attribute("foo")?
            .add_attribute("bar")?
            .add_attribute("FOO")?;
        assert_eq!(builder.build().to_string(), "en@attribute=bar-foo");
        builder.remove_attribute("bar")?;
        assert_eq!(builder.build().to_string(), "en@attribute=foo");
        Ok(())
    }

    #[test]
    fn u_extension_replaces_unicode_state() -> Result<(), SyntaxError> {
        let mut builder = LocaleBuilder::new();
        builder
            .set_language("de")?
            .add_attribute("foo")?
            .set_unicode_keyword_value("cu", "eur")?
            .set_extension('u', "attr-co-phonebk")?;
        assert_eq!(builder.build().to_string(), "de@attribute=attr;collation=phonebook");
        Ok(())
    }

    #[test]
    fn other_extensions_and_private_use() -> Result<(), SyntaxError> {
        let locale = LocaleBuilder::new()
            .set_language("en")?
            .set_extension('a', "ext")?
            .set_extension('x', "a-b")?
            .build();
        assert_eq!(locale.to_string(), "en@a=ext;x=a-b");
        Ok(())
    }

    #[test]
    fn language_tag_replaces_state() -> Result<(), SyntaxError> {
        let mut builder = LocaleBuilder::new();
        builder.set_language("fr")?;
        builder.set_language_tag("de-u-co-phonebk")?;
        assert_eq!(builder.build().to_string(), "de@collation=phonebook");
        assert!(builder.set_language_tag("de-!").is_err());
        Ok(())
    }

    #[test]
    fn set_locale_round_trips() -> Result<(), SyntaxError> {
        for name in [
            "sr_Latn_RS",
            "en_US_POSIX",
            "th_TH@calendar=buddhist",
            "en@a=ext;attribute=foo;x=private",
        ] {
            let locale = LocaleId::from_name(name);
            let rebuilt = LocaleBuilder::new().set_locale(&locale)?.build();
            assert_eq!(rebuilt, locale, "{name:?}");
        }
        Ok(())
    }

    #[test]
    fn set_locale_rejects_unrepresentable_fields() {
        let locale = LocaleId::from_name("de__PHONEBOOK");
        let err = LocaleBuilder::new().set_locale(&locale).unwrap_err();
        assert_eq!(err.field, Field::Variant);
    }

    #[test]
    fn clear_and_clear_extensions() -> Result<(), SyntaxError> {
        let mut builder = LocaleBuilder::new();
        builder
            .set_language("en")?
            .set_region("US")?
            .set_unicode_keyword_value("ca", "gregory")?;
        builder.clear_extensions();
        assert_eq!(builder.build().to_string(), "en_US");
        builder.clear();
        assert!(builder.build().is_root());
        Ok(())
    }
}
