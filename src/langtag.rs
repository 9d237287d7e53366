// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! Conversion between legacy locale names and BCP 47 language tags.
//!
//! The tag side is case-insensitive; the legacy side carries keywords and
//! attributes, which map to and from the Unicode (`u`) extension through
//! the key/type tables of [`crate::provider`].

use crate::locale::LocaleId;
use crate::parser::{is_separator, Field, SyntaxError};
use crate::provider::SubtagLookup;
use crate::subtags::{Language, Region, Script, Variant};

/// Grandfathered tags and their preferred modern replacements.
static GRANDFATHERED: &[(&str, &str)] = &[
    ("art-lojban", "jbo"),
    ("cel-gaulish", "xtg-x-cel-gaulish"),
    ("en-gb-oed", "en-GB-x-oed"),
    ("i-ami", "ami"),
    ("i-bnn", "bnn"),
    ("i-default", "en-x-i-default"),
    ("i-enochian", "und-x-i-enochian"),
    ("i-hak", "hak"),
    ("i-klingon", "tlh"),
    ("i-lux", "lb"),
    ("i-mingo", "see-x-i-mingo"),
    ("i-navajo", "nv"),
    ("i-pwn", "pwn"),
    ("i-tao", "tao"),
    ("i-tay", "tay"),
    ("i-tsu", "tsu"),
    ("no-bok", "nb"),
    ("no-nyn", "nn"),
    ("sgn-be-fr", "sfb"),
    ("sgn-be-nl", "vgt"),
    ("sgn-ch-de", "sgg"),
    ("zh-guoyu", "cmn"),
    ("zh-hakka", "hak"),
    ("zh-min", "nan-x-zh-min"),
    ("zh-min-nan", "nan"),
    ("zh-xiang", "hsn"),
];

/// Serializes an identifier as a BCP 47 language tag.
///
/// The root language becomes `und`. A sole `POSIX` variant is carried as
/// the Unicode keyword `va=posix` unless `va` is already set; other
/// variants that are not well-formed BCP 47 subtags move into the private
/// use extension after the `lvariant` marker. Keywords map through the
/// key/type table with a literal fallback for well-formed unmapped keys
/// and types; unmappable keywords are omitted.
pub fn to_language_tag(locale: &LocaleId, key_type: &impl SubtagLookup) -> String {
    let mut tag = String::new();
    if locale.language.is_root() {
        tag.push_str("und");
    } else {
        tag.push_str(locale.language.as_str());
    }
    if let Some(script) = locale.script {
        tag.push('-');
        tag.push_str(script.as_str());
    }
    if let Some(region) = locale.region {
        tag.push('-');
        tag.push_str(region.as_str());
    }

    let mut posix = false;
    let mut ill_formed: Vec<String> = Vec::new();
    if locale.variants == ["POSIX"] {
        posix = true;
    } else {
        let mut truncated = false;
        for variant in &locale.variants {
            if !truncated {
                if let Ok(variant) = Variant::try_from_str(variant) {
                    tag.push('-');
                    tag.push_str(variant.as_str());
                    continue;
                }
                truncated = true;
            }
            ill_formed.push(variant.to_ascii_lowercase());
        }
    }

    let mut unicode_parts: Vec<String> = locale.attributes.clone();
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in locale.keywords.iter() {
        let Some(bcp_key) = key_to_bcp47(key, key_type) else {
            continue;
        };
        let Some(bcp_type) = type_to_bcp47(key, value, key_type) else {
            continue;
        };
        pairs.push((bcp_key, bcp_type));
    }
    if posix && !locale.keywords.contains_key("va") {
        pairs.push(("va".to_owned(), "posix".to_owned()));
    }
    pairs.sort();
    for (key, bcp_type) in pairs {
        unicode_parts.push(key);
        if bcp_type != "true" {
            for part in bcp_type.split('-') {
                unicode_parts.push(part.to_owned());
            }
        }
    }

    let mut sections: Vec<(char, String)> = Vec::new();
    for (key, value) in locale.extensions.iter() {
        if *key != 'x' {
            sections.push((*key, value.replace('_', "-")));
        }
    }
    if !unicode_parts.is_empty() {
        sections.push(('u', unicode_parts.join("-")));
    }
    sections.sort_by_key(|(key, _)| *key);
    for (key, value) in sections {
        tag.push('-');
        tag.push(key);
        tag.push('-');
        tag.push_str(&value);
    }

    let mut private_parts: Vec<String> = Vec::new();
    if let Some(private) = locale.extensions.get(&'x') {
        private_parts.extend(private.replace('_', "-").split('-').map(str::to_owned));
    }
    if !ill_formed.is_empty() {
        private_parts.push("lvariant".to_owned());
        private_parts.extend(ill_formed);
    }
    if !private_parts.is_empty() {
        tag.push_str("-x");
        for part in private_parts {
            tag.push('-');
            tag.push_str(&part);
        }
    }
    tag
}

/// Parses a BCP 47 language tag leniently: the first ill-formed subtag
/// truncates the remainder of the tag.
pub fn from_language_tag(tag: &str, key_type: &impl SubtagLookup) -> LocaleId {
    match scan(tag, key_type, false) {
        Ok(locale) => locale,
        Err(_) => LocaleId::root(),
    }
}

/// Parses a BCP 47 language tag strictly, reporting the byte offset of
/// the first ill-formed subtag.
pub fn parse_language_tag(
    tag: &str,
    key_type: &impl SubtagLookup,
) -> Result<LocaleId, SyntaxError> {
    scan(tag, key_type, true)
}

fn segments(tag: &str) -> Vec<(&str, usize)> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for (idx, byte) in tag.bytes().enumerate() {
        if is_separator(byte) {
            out.push((tag.get(start..idx).unwrap_or(""), start));
            start = idx + 1;
        }
    }
    out.push((tag.get(start..).unwrap_or(""), start));
    out
}

fn is_alnum(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn is_alpha(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_alphabetic())
}

fn scan(tag: &str, key_type: &impl SubtagLookup, strict: bool) -> Result<LocaleId, SyntaxError> {
    let mut locale = LocaleId::root();
    if tag.is_empty() {
        return Ok(locale);
    }

    let lowered = tag.to_ascii_lowercase();
    if let Some(preferred) = GRANDFATHERED.lookup(&lowered) {
        return scan(preferred, key_type, strict);
    }

    let segs = segments(&lowered);
    let mut idx = 0usize;

    // Language, or a private-use-only tag.
    let mut private_only = false;
    match segs.first() {
        Some(("x", _)) => private_only = true,
        Some((first, offset)) => {
            if *first == "und" {
                locale.language = Language::ROOT;
            } else if let Ok(language) = Language::try_from_str(first) {
                if language.is_root() {
                    return if strict {
                        Err(SyntaxError::new(Field::Language, *offset))
                    } else {
                        Ok(locale)
                    };
                }
                locale.language = language;
            } else if is_alpha(first) && first.len() <= 8 {
                // Well-formed but not representable; degrade to root.
                locale.language = Language::ROOT;
            } else {
                return if strict {
                    Err(SyntaxError::new(Field::Language, *offset))
                } else {
                    Ok(locale)
                };
            }
        }
        None => return Ok(locale),
    }
    idx += 1;

    if !private_only {
        // Extended language subtags: the first replaces the language,
        // the rest carry no information.
        let mut extlangs = 0;
        while extlangs < 3 {
            let Some((seg, _)) = segs.get(idx) else { break };
            if seg.len() != 3 || !is_alpha(seg) {
                break;
            }
            if extlangs == 0 {
                if let Ok(language) = Language::try_from_str(seg) {
                    locale.language = language;
                }
            }
            extlangs += 1;
            idx += 1;
        }

        if let Some((seg, _)) = segs.get(idx) {
            if let Ok(script) = Script::try_from_str(seg) {
                locale.script = Some(script);
                idx += 1;
            }
        }

        if let Some((seg, _)) = segs.get(idx) {
            if seg.len() != 4 {
                if let Ok(region) = Region::try_from_str(seg) {
                    locale.region = Some(region);
                    idx += 1;
                }
            }
        }

        while let Some((seg, _)) = segs.get(idx) {
            if Variant::try_from_str(seg).is_err() {
                break;
            }
            locale.push_raw_variant(seg.as_bytes());
            idx += 1;
        }
    }

    // Extensions and private use.
    let mut unicode_subtags: Option<Vec<String>> = None;
    while let Some((seg, offset)) = segs.get(idx) {
        let singleton = if private_only {
            'x'
        } else {
            if seg.len() != 1 || !is_alnum(seg) {
                return truncate_or(strict, &mut locale, unicode_subtags, key_type, Field::Extension, *offset);
            }
            idx += 1;
            seg.chars().next().unwrap_or('x')
        };
        if singleton != 'x' {
            let duplicate = (singleton == 'u' && unicode_subtags.is_some())
                || locale.extensions.contains_key(&singleton);
            if duplicate {
                return truncate_or(strict, &mut locale, unicode_subtags, key_type, Field::Extension, *offset);
            }
            let mut value_parts: Vec<String> = Vec::new();
            while let Some((part, _)) = segs.get(idx) {
                if part.len() < 2 || part.len() > 8 || !is_alnum(part) {
                    break;
                }
                value_parts.push((*part).to_owned());
                idx += 1;
            }
            if value_parts.is_empty() {
                return truncate_or(strict, &mut locale, unicode_subtags, key_type, Field::Extension, *offset);
            }
            if singleton == 'u' {
                unicode_subtags = Some(value_parts);
            } else {
                locale.extensions.insert(singleton, value_parts.join("-"));
            }
        } else {
            // Private use runs to the end of the tag. Subtags after an
            // lvariant marker carry legacy variant material, which may be
            // longer than 8 characters; lenient mode accepts it so that
            // emitted tags parse back.
            let mut private_parts: Vec<String> = Vec::new();
            let mut seen_marker = false;
            while let Some((part, part_offset)) = segs.get(idx) {
                let too_long = part.len() > 8 && (strict || !seen_marker);
                if part.is_empty() || too_long || !is_alnum(part) {
                    if strict {
                        return Err(SyntaxError::new(Field::Extension, *part_offset));
                    }
                    break;
                }
                seen_marker = seen_marker || *part == "lvariant";
                private_parts.push((*part).to_owned());
                idx += 1;
            }
            if private_parts.is_empty() {
                return truncate_or(strict, &mut locale, unicode_subtags, key_type, Field::Extension, *offset);
            }
            apply_private_use(&mut locale, private_parts);
            break;
        }
    }

    if let Some(subtags) = unicode_subtags {
        apply_unicode_section(&mut locale, &subtags, key_type);
    }
    Ok(locale)
}

/// In lenient mode an ill-formed subtag truncates the rest of the tag;
/// in strict mode it is an error. Unicode-extension content gathered so
/// far is still applied on truncation.
fn truncate_or(
    strict: bool,
    locale: &mut LocaleId,
    unicode_subtags: Option<Vec<String>>,
    key_type: &impl SubtagLookup,
    field: Field,
    offset: usize,
) -> Result<LocaleId, SyntaxError> {
    if strict {
        return Err(SyntaxError::new(field, offset));
    }
    if let Some(subtags) = unicode_subtags {
        apply_unicode_section(locale, &subtags, key_type);
    }
    Ok(locale.clone())
}

fn apply_private_use(locale: &mut LocaleId, parts: Vec<String>) {
    let mut x_parts: Vec<String> = Vec::new();
    let mut variant_parts: Vec<String> = Vec::new();
    let mut seen_marker = false;
    for part in parts {
        if seen_marker {
            variant_parts.push(part);
        } else if part == "lvariant" {
            seen_marker = true;
        } else {
            x_parts.push(part);
        }
    }
    if seen_marker && variant_parts.is_empty() {
        // A trailing marker with nothing after it is ordinary content.
        x_parts.push("lvariant".to_owned());
    }
    for variant in variant_parts {
        locale.push_raw_variant(variant.as_bytes());
    }
    if !x_parts.is_empty() {
        locale.extensions.insert('x', x_parts.join("-"));
    }
}

/// Decomposes the subtags of a `u` extension into attributes and legacy
/// keywords.
fn apply_unicode_section(
    locale: &mut LocaleId,
    subtags: &[String],
    key_type: &impl SubtagLookup,
) {
    let mut idx = 0usize;
    let mut attributes: Vec<String> = Vec::new();
    while let Some(subtag) = subtags.get(idx) {
        if subtag.len() == 2 {
            break;
        }
        attributes.push(subtag.clone());
        idx += 1;
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    while let Some(key) = subtags.get(idx) {
        idx += 1;
        let mut type_parts: Vec<String> = Vec::new();
        while let Some(part) = subtags.get(idx) {
            if part.len() == 2 {
                break;
            }
            type_parts.push(part.clone());
            idx += 1;
        }
        let bcp_type = if type_parts.is_empty() {
            "true".to_owned()
        } else {
            type_parts.join("-")
        };
        pairs.push((key.clone(), bcp_type));
    }

    apply_unicode_pairs(locale, attributes, &pairs, key_type);
}

/// Applies attributes and BCP 47 (key, type) pairs to an identifier,
/// mapping them to legacy keywords. Shared by the tag parser and the
/// builder.
pub(crate) fn apply_unicode_pairs(
    locale: &mut LocaleId,
    attributes: Vec<String>,
    pairs: &[(String, String)],
    key_type: &impl SubtagLookup,
) {
    if !attributes.is_empty() {
        locale.set_attributes(attributes);
    }
    for (bcp_key, bcp_type) in pairs {
        let Some(legacy_key) = key_from_bcp47(bcp_key, key_type) else {
            continue;
        };
        if legacy_key == "va" && bcp_type == "posix" && locale.variants.is_empty() {
            locale.push_raw_variant(b"posix");
            continue;
        }
        let Some(legacy_type) = type_from_bcp47(&legacy_key, bcp_type, key_type) else {
            continue;
        };
        locale.set_keyword(&legacy_key, &legacy_type);
    }
}

pub(crate) fn key_to_bcp47(key: &str, key_type: &impl SubtagLookup) -> Option<String> {
    let mut search = String::with_capacity(4 + key.len());
    search.push_str("key/");
    search.push_str(key);
    if let Some(hit) = key_type.lookup(&search) {
        return Some(hit.to_owned());
    }
    (key.len() == 2 && is_alnum(key)).then(|| key.to_owned())
}

fn key_from_bcp47(key: &str, key_type: &impl SubtagLookup) -> Option<String> {
    let mut search = String::with_capacity(8 + key.len());
    search.push_str("key-inv/");
    search.push_str(key);
    if let Some(hit) = key_type.lookup(&search) {
        return Some(hit.to_owned());
    }
    (key.len() == 2 && is_alnum(key)).then(|| key.to_owned())
}

fn is_well_formed_type(value: &str) -> bool {
    value
        .split('-')
        .all(|part| (3..=8).contains(&part.len()) && is_alnum(part))
}

fn type_search(key: &str, legacy_type: &str, prefix: &str) -> String {
    let mut search = String::with_capacity(prefix.len() + key.len() + legacy_type.len() + 2);
    search.push_str(prefix);
    search.push('/');
    search.push_str(key);
    search.push('/');
    search.push_str(&legacy_type.replace('/', ":"));
    search
}

pub(crate) fn type_to_bcp47(
    key: &str,
    legacy_type: &str,
    key_type: &impl SubtagLookup,
) -> Option<String> {
    if legacy_type == "true" {
        return Some("true".to_owned());
    }
    if let Some(hit) = key_type.lookup(&type_search(key, legacy_type, "type")) {
        return Some(hit.to_owned());
    }
    if let Some(canonical) = key_type.lookup(&type_search(key, legacy_type, "type-alias")) {
        let canonical = canonical.to_ascii_lowercase();
        if let Some(hit) = key_type.lookup(&type_search(key, &canonical, "type")) {
            return Some(hit.to_owned());
        }
    }
    is_well_formed_type(legacy_type).then(|| legacy_type.to_owned())
}

fn type_from_bcp47(key: &str, bcp_type: &str, key_type: &impl SubtagLookup) -> Option<String> {
    if bcp_type == "true" {
        return Some("true".to_owned());
    }
    if let Some(hit) = key_type.lookup(&type_search(key, bcp_type, "type-inv")) {
        return Some(hit.to_owned());
    }
    is_well_formed_type(bcp_type).then(|| bcp_type.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::KEY_TYPE_DATA;

    fn to_tag(name: &str) -> String {
        to_language_tag(&LocaleId::from_name(name), &KEY_TYPE_DATA)
    }

    fn from_tag(tag: &str) -> String {
        from_language_tag(tag, &KEY_TYPE_DATA).to_string()
    }

    #[test]
    fn base_names_to_tags() {
        assert_eq!(to_tag(""), "und");
        assert_eq!(to_tag("en"), "en");
        assert_eq!(to_tag("en_US"), "en-US");
        assert_eq!(to_tag("sr_Latn_RS"), "sr-Latn-RS");
        assert_eq!(to_tag("es_419"), "es-419");
        assert_eq!(to_tag("de_DE_1901"), "de-DE-1901");
    }

    #[test]
    fn posix_variant_becomes_va_keyword() {
        assert_eq!(to_tag("en_US_POSIX"), "en-US-u-va-posix");
        assert_eq!(to_tag("en_US_POSIX@va=alt"), "en-US-u-va-alt");
    }

    #[test]
    fn keywords_map_to_unicode_extension() {
        assert_eq!(to_tag("de@collation=phonebook"), "de-u-co-phonebk");
        assert_eq!(
            to_tag("th_TH@calendar=buddhist;numbers=thai"),
            "th-TH-u-ca-buddhist-nu-thai"
        );
        assert_eq!(
            to_tag("en@timezone=america/new_york"),
            "en-u-tz-usnyc"
        );
        // Unmapped but well-formed keys and types pass through.
        assert_eq!(to_tag("en@aa=bbbb"), "en-u-aa-bbbb");
        // Unmappable keywords are omitted.
        assert_eq!(to_tag("en@verylongkey=value"), "en");
    }

    #[test]
    fn attributes_and_extensions_to_tag() {
        assert_eq!(
            to_tag("en@attribute=foo-bar;calendar=japanese"),
            "en-u-bar-foo-ca-japanese"
        );
        assert_eq!(to_tag("en@a=ext;x=private"), "en-a-ext-x-private");
    }

    #[test]
    fn ill_formed_variants_move_to_private_use() {
        assert_eq!(to_tag("de__PHONEBOOK"), "de-x-lvariant-phonebook");
        assert_eq!(to_tag("sl__ROZAJ_BISKE"), "sl-rozaj-biske");
    }

    #[test]
    fn tags_to_base_names() {
        assert_eq!(from_tag("und"), "");
        assert_eq!(from_tag("en"), "en");
        assert_eq!(from_tag("en-US"), "en_US");
        assert_eq!(from_tag("sr-latn-rs"), "sr_Latn_RS");
        assert_eq!(from_tag("de-DE-1901"), "de_DE_1901");
        assert_eq!(from_tag("es-419"), "es_419");
    }

    #[test]
    fn extlang_replaces_language() {
        assert_eq!(from_tag("zh-cmn-Hans-CN"), "cmn_Hans_CN");
        assert_eq!(from_tag("zh-cmn-yue-Hans"), "cmn_Hans");
    }

    #[test]
    fn unicode_extension_decomposes() {
        assert_eq!(from_tag("de-u-co-phonebk"), "de@collation=phonebook");
        assert_eq!(
            from_tag("th-TH-u-ca-buddhist-nu-thai"),
            "th_TH@calendar=buddhist;numbers=thai"
        );
        assert_eq!(from_tag("en-u-tz-usnyc"), "en@timezone=america/new_york");
        assert_eq!(from_tag("en-US-u-va-posix"), "en_US_POSIX");
        assert_eq!(from_tag("en-US-1901-u-va-posix"), "en_US_1901@va=posix");
        assert_eq!(from_tag("en-u-foo-bar-ca-japanese"), "en@attribute=bar-foo;calendar=japanese");
        assert_eq!(from_tag("en-u-co"), "en@collation=true");
    }

    #[test]
    fn private_use_and_lvariant() {
        assert_eq!(from_tag("de-x-lvariant-phonebook"), "de__PHONEBOOK");
        assert_eq!(from_tag("en-x-private"), "en@x=private");
        assert_eq!(from_tag("x-here-there"), "@x=here-there");
        assert_eq!(from_tag("de-a-ext-x-private"), "de@a=ext;x=private");
    }

    #[test]
    fn long_lvariant_subtags_parse_back() {
        let locale = LocaleId::from_name("ja_JP_TRADITIONAL");
        let tag = to_language_tag(&locale, &KEY_TYPE_DATA);
        assert_eq!(tag, "ja-JP-x-lvariant-traditional");
        assert_eq!(from_language_tag(&tag, &KEY_TYPE_DATA), locale);
        // Strict parsing keeps the 8-character subtag limit.
        assert!(parse_language_tag("de-x-lvariant-phonebook", &KEY_TYPE_DATA).is_err());
    }

    #[test]
    fn grandfathered_tags() {
        assert_eq!(from_tag("i-klingon"), "tlh");
        assert_eq!(from_tag("no-bok"), "nb");
        assert_eq!(from_tag("zh-min-nan"), "nan");
        assert_eq!(from_tag("en-GB-oed"), "en_GB@x=oed");
    }

    #[test]
    fn lenient_truncation() {
        assert_eq!(from_tag("en-US-toolongsubtag1"), "en_US");
        assert_eq!(from_tag("en-a"), "en");
        assert_eq!(from_tag("en-a-bbb-a-ccc"), "en@a=bbb");
        assert_eq!(from_tag(""), "");
    }

    #[test]
    fn strict_errors_carry_offsets() {
        let err = parse_language_tag("en-US-!", &KEY_TYPE_DATA).unwrap_err();
        assert_eq!(err.offset, 6);
        let err = parse_language_tag("1n", &KEY_TYPE_DATA).unwrap_err();
        assert_eq!(err.field, Field::Language);
        assert_eq!(err.offset, 0);
        let err = parse_language_tag("en-a-bbb-a-ccc", &KEY_TYPE_DATA).unwrap_err();
        assert_eq!(err.field, Field::Extension);
        assert_eq!(err.offset, 9);
        assert!(parse_language_tag("en-US", &KEY_TYPE_DATA).is_ok());
    }

    #[test]
    fn tag_round_trips() {
        for name in [
            "en_US",
            "sr_Latn_RS",
            "de@collation=phonebook",
            "en_US_POSIX",
            "th_TH@calendar=buddhist",
            "en@attribute=foo;calendar=japanese;x=private",
        ] {
            let locale = LocaleId::from_name(name);
            let tag = to_language_tag(&locale, &KEY_TYPE_DATA);
            let back = from_language_tag(&tag, &KEY_TYPE_DATA);
            assert_eq!(back, locale, "{name:?} via {tag:?}");
        }
    }
}
