// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::locale::LocaleId;
use crate::TransformResult;

/// Variant-suffix rules, applied before the alias table in declaration
/// order; the first match strips the suffix and defaults a keyword.
static VARIANT_RULES: &[(&str, &str, &str)] = &[
    ("EURO", "currency", "EUR"),
    ("PINYIN", "collation", "pinyin"),
    ("STROKE", "collation", "stroke"),
];

/// Exact-match base-name aliases, keyed by the normalized (serialized)
/// base name. The first column is the alias, the second the canonical
/// base name, and the optional pair a keyword that is defaulted when
/// absent. Sources: the POSIX `C` locale, old ICU names, .NET names,
/// Linux names and registered legacy forms. Registered forms that only
/// need their separator normalized (`sl_ROZAJ`, `zh_GAN`, ...) are
/// already handled by the parser and carry no entry here.
static ALIASES: &[(&str, &str, Option<(&str, &str)>)] = &[
    ("__C", "en_US_POSIX", None),
    ("art__LOJBAN", "jbo", None),
    ("az_AZ_CYRL", "az_Cyrl_AZ", None),
    ("az_AZ_LATN", "az_Latn_AZ", None),
    ("ca_ES_PREEURO", "ca_ES", Some(("currency", "ESP"))),
    ("de__PHONEBOOK", "de", Some(("collation", "phonebook"))),
    ("de_AT_PREEURO", "de_AT", Some(("currency", "ATS"))),
    ("de_DE_PREEURO", "de_DE", Some(("currency", "DEM"))),
    ("de_LU_PREEURO", "de_LU", Some(("currency", "EUR"))),
    ("el_GR_PREEURO", "el_GR", Some(("currency", "GRD"))),
    ("en_BE_PREEURO", "en_BE", Some(("currency", "BEF"))),
    ("en_IE_PREEURO", "en_IE", Some(("currency", "IEP"))),
    ("es__TRADITIONAL", "es", Some(("collation", "traditional"))),
    ("es_ES_PREEURO", "es_ES", Some(("currency", "ESP"))),
    ("eu_ES_PREEURO", "eu_ES", Some(("currency", "ESP"))),
    ("fi_FI_PREEURO", "fi_FI", Some(("currency", "FIM"))),
    ("fr_BE_PREEURO", "fr_BE", Some(("currency", "BEF"))),
    ("fr_FR_PREEURO", "fr_FR", Some(("currency", "FRF"))),
    ("fr_LU_PREEURO", "fr_LU", Some(("currency", "LUF"))),
    ("ga_IE_PREEURO", "ga_IE", Some(("currency", "IEP"))),
    ("gl_ES_PREEURO", "gl_ES", Some(("currency", "ESP"))),
    ("hi__DIRECT", "hi", Some(("collation", "direct"))),
    ("it_IT_PREEURO", "it_IT", Some(("currency", "ITL"))),
    ("ja_JP_TRADITIONAL", "ja_JP", Some(("calendar", "japanese"))),
    ("nl_BE_PREEURO", "nl_BE", Some(("currency", "BEF"))),
    ("nl_NL_PREEURO", "nl_NL", Some(("currency", "NLG"))),
    ("pt_PT_PREEURO", "pt_PT", Some(("currency", "PTE"))),
    ("sr_SP_CYRL", "sr_Cyrl_RS", None),
    ("sr_SP_LATN", "sr_Latn_RS", None),
    ("sr_YU_CYRILLIC", "sr_Cyrl_RS", None),
    ("th_TH_TRADITIONAL", "th_TH", Some(("calendar", "buddhist"))),
    ("uz_UZ_CYRILLIC", "uz_Cyrl_UZ", None),
    ("uz_UZ_CYRL", "uz_Cyrl_UZ", None),
    ("uz_UZ_LATN", "uz_Latn_UZ", None),
    ("zh__CHS", "zh_Hans", None),
    ("zh__CHT", "zh_Hant", None),
    ("zh__GUOYU", "zh", None),
    ("zh__MIN_NAN", "zh__MINNAN", None),
];

/// Canonicalizes an identifier in place and reports whether it changed.
///
/// The base name is rewritten through three table-driven steps (variant
/// suffix rules, exact aliases, the standalone `nb`+`NY` rule); keywords
/// ride along, and an alias may default a keyword that is not already
/// set. The empty identifier canonicalizes to itself. The operation is
/// idempotent.
///
/// # Examples
///
/// ```
/// use uloc::{canonicalize, LocaleId, TransformResult};
///
/// let mut loc = LocaleId::from_name("de__PHONEBOOK");
/// assert_eq!(canonicalize(&mut loc), TransformResult::Modified);
/// assert_eq!(loc.to_string(), "de@collation=phonebook");
/// ```
pub fn canonicalize(locale: &mut LocaleId) -> TransformResult {
    if *locale == LocaleId::default() {
        return TransformResult::Unmodified;
    }

    let original = locale.clone();
    let base = locale.base_name();
    let mut new_base: Option<String> = None;
    let mut defaulted: Option<(&str, &str)> = None;

    for (variant, key, value) in VARIANT_RULES {
        if let Some(head) = base
            .strip_suffix(variant)
            .and_then(|head| head.strip_suffix('_'))
        {
            new_base = Some(head.trim_end_matches('_').to_owned());
            defaulted = Some((key, value));
            break;
        }
    }

    if new_base.is_none() && defaulted.is_none() {
        for (alias, canonical, keyword) in ALIASES {
            if base == *alias {
                new_base = Some((*canonical).to_owned());
                defaulted = *keyword;
                break;
            }
        }
    }

    if let Some(new_base) = new_base {
        let replacement = LocaleId::from_legacy_name(&new_base);
        locale.language = replacement.language;
        locale.script = replacement.script;
        locale.region = replacement.region;
        locale.variants = replacement.variants;
    } else if locale.language == "nb" && locale.variants().eq(["NY"]) {
        // Standalone rule: nb with the sole variant NY is nn.
        if let Ok(nn) = "nn".parse() {
            locale.language = nn;
            locale.variants.clear();
        }
    }

    if let Some((key, value)) = defaulted {
        if locale.keyword(key).is_none() {
            locale.set_keyword(key, value);
        }
    }

    if *locale == original {
        TransformResult::Unmodified
    } else {
        TransformResult::Modified
    }
}

/// Canonicalizes a locale name string: parse, canonicalize, reserialize.
///
/// ```
/// use uloc::canonicalize_name;
///
/// assert_eq!(canonicalize_name("fr_FR_EURO"), "fr_FR@currency=eur");
/// assert_eq!(canonicalize_name(""), "");
/// ```
pub fn canonicalize_name(name: &str) -> String {
    let mut locale = LocaleId::from_name(name);
    canonicalize(&mut locale);
    locale.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, expected: &str) {
        let mut locale = LocaleId::from_name(input);
        let unmodified = locale.clone();
        let result = canonicalize(&mut locale);
        assert_eq!(locale.to_string(), expected, "{input:?}");
        if result == TransformResult::Modified {
            assert_ne!(locale, unmodified, "{input:?}");
        } else {
            assert_eq!(locale, unmodified, "{input:?}");
        }
    }

    #[test]
    fn variant_rules() {
        check("fr_FR_EURO", "fr_FR@currency=eur");
        check("de__EURO", "de@currency=eur");
        check("zh__PINYIN", "zh@collation=pinyin");
        check("zh_TW_STROKE", "zh_TW@collation=stroke");
    }

    #[test]
    fn variant_rule_keeps_existing_keyword() {
        check(
            "fr_FR_EURO@currency=frf",
            "fr_FR@currency=frf",
        );
    }

    #[test]
    fn alias_table() {
        check("C", "en_US_POSIX");
        check("art_LOJBAN", "jbo");
        check("az_AZ_CYRL", "az_Cyrl_AZ");
        check("de__PHONEBOOK", "de@collation=phonebook");
        check("es__TRADITIONAL", "es@collation=traditional");
        check("hi__DIRECT", "hi@collation=direct");
        check("ja_JP_TRADITIONAL", "ja_JP@calendar=japanese");
        check("th_TH_TRADITIONAL", "th_TH@calendar=buddhist");
        check("sr_SP_CYRL", "sr_Cyrl_RS");
        check("sr_YU_CYRILLIC", "sr_Cyrl_RS");
        check("zh_CHS", "zh_Hans");
        check("zh_MIN_NAN", "zh__MINNAN");
        check("de_1901", "de__1901");
        check("fr_FR_PREEURO", "fr_FR@currency=frf");
    }

    #[test]
    fn nb_ny_rule() {
        check("nb__NY", "nn");
        check("nb_NO_NY", "nn_NO");
        // Only the sole variant NY triggers the rule.
        check("nb_NO_NY_MORE", "nb_NO_NY_MORE");
    }

    #[test]
    fn untouched_inputs() {
        check("", "");
        check("en_US", "en_US");
        check("de@collation=phonebook", "de@collation=phonebook");
        check("xx_YY", "xx_YY");
    }

    #[test]
    fn idempotent() {
        for input in ["fr_FR_EURO", "de__PHONEBOOK", "nb_NO_NY", "C", "en_US"] {
            let once = canonicalize_name(input);
            assert_eq!(canonicalize_name(&once), once, "{input:?}");
        }
    }
}
