// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! The contract through which external data reaches the engines.
//!
//! Both data-driven engines (likely subtags and the BCP 47 key/type
//! mapping) see their tables through a single shape: a string search tag
//! in, an optional string out. How a table was loaded, baked, or cached is
//! the caller's business; this crate ships compiled-in defaults covering
//! the common CLDR entries.
//!
//! Likely-subtags tables are keyed by legacy-form search tags built from
//! the identifier fields, with `und` standing in for the root language:
//! `zh_Hant`, `und_TW`, `sr`.
//!
//! Key/type tables use path-shaped search tags:
//!
//! - `key/{legacy_key}` → BCP 47 key (`key/collation` → `co`)
//! - `key-inv/{bcp47_key}` → legacy key
//! - `type/{legacy_key}/{legacy_type}` → BCP 47 type
//! - `type-inv/{legacy_key}/{bcp47_type}` → legacy type
//! - `type-alias/{legacy_key}/{alias}` → canonical legacy type
//!
//! Search tags are all-lowercase on the path side; a `/` inside a legacy
//! type (timezone ids such as `America/New_York`) is written as `:` so it
//! cannot collide with the path separator.

use litemap::LiteMap;

/// Looks up replacement strings for locale search tags.
///
/// Implemented for sorted static slices and for [`LiteMap`], so callers
/// can feed the engines from compiled-in data, runtime-loaded maps, or
/// their own table types.
pub trait SubtagLookup {
    /// Returns the value for a search tag, or `None` when the table has
    /// no entry for it.
    fn lookup(&self, search_tag: &str) -> Option<&str>;
}

impl SubtagLookup for [(&'static str, &'static str)] {
    fn lookup(&self, search_tag: &str) -> Option<&str> {
        self.binary_search_by(|(key, _)| (*key).cmp(search_tag))
            .ok()
            .and_then(|idx| self.get(idx))
            .map(|(_, value)| *value)
    }
}

impl SubtagLookup for LiteMap<String, String> {
    fn lookup(&self, search_tag: &str) -> Option<&str> {
        self.get(search_tag).map(String::as_str)
    }
}

impl<T: SubtagLookup + ?Sized> SubtagLookup for &T {
    fn lookup(&self, search_tag: &str) -> Option<&str> {
        (**self).lookup(search_tag)
    }
}

/// Compiled-in likely-subtags table, sorted by search tag.
///
/// Covers the common CLDR entries; callers tracking newer CLDR releases
/// can supply their own table.
pub static LIKELY_SUBTAGS: &[(&str, &str)] = &[
    ("af", "af_Latn_ZA"),
    ("am", "am_Ethi_ET"),
    ("ar", "ar_Arab_EG"),
    ("az", "az_Latn_AZ"),
    ("az_Cyrl", "az_Cyrl_AZ"),
    ("be", "be_Cyrl_BY"),
    ("bg", "bg_Cyrl_BG"),
    ("bn", "bn_Beng_BD"),
    ("bs", "bs_Latn_BA"),
    ("ca", "ca_Latn_ES"),
    ("cs", "cs_Latn_CZ"),
    ("da", "da_Latn_DK"),
    ("de", "de_Latn_US"),
    ("el", "el_Grek_GR"),
    ("en", "en_Latn_US"),
    ("es", "es_Latn_ES"),
    ("et", "et_Latn_EE"),
    ("fa", "fa_Arab_IR"),
    ("fi", "fi_Latn_FI"),
    ("fil", "fil_Latn_PH"),
    ("fr", "fr_Latn_FR"),
    ("ga", "ga_Latn_IE"),
    ("gl", "gl_Latn_ES"),
    ("ha", "ha_Latn_NG"),
    ("he", "he_Hebr_IL"),
    ("hi", "hi_Deva_IN"),
    ("hr", "hr_Latn_HR"),
    ("hu", "hu_Latn_HU"),
    ("hy", "hy_Armn_AM"),
    ("id", "id_Latn_ID"),
    ("it", "it_Latn_IT"),
    ("ja", "ja_Jpan_JP"),
    ("ka", "ka_Geor_GE"),
    ("kk", "kk_Cyrl_KZ"),
    ("ko", "ko_Kore_KR"),
    ("lt", "lt_Latn_LT"),
    ("lv", "lv_Latn_LV"),
    ("mk", "mk_Cyrl_MK"),
    ("mn", "mn_Cyrl_MN"),
    ("ms", "ms_Latn_MY"),
    ("nb", "nb_Latn_NO"),
    ("nl", "nl_Latn_NL"),
    ("nn", "nn_Latn_NO"),
    ("no", "no_Latn_NO"),
    ("pa", "pa_Guru_IN"),
    ("pl", "pl_Latn_PL"),
    ("pt", "pt_Latn_BR"),
    ("ro", "ro_Latn_RO"),
    ("ru", "ru_Cyrl_RU"),
    ("sh", "sr_Latn_RS"),
    ("sk", "sk_Latn_SK"),
    ("sl", "sl_Latn_SI"),
    ("sq", "sq_Latn_AL"),
    ("sr", "sr_Cyrl_RS"),
    ("sr_ME", "sr_Latn_ME"),
    ("sv", "sv_Latn_SE"),
    ("sw", "sw_Latn_TZ"),
    ("ta", "ta_Taml_IN"),
    ("th", "th_Thai_TH"),
    ("tr", "tr_Latn_TR"),
    ("uk", "uk_Cyrl_UA"),
    ("und", "en_Latn_US"),
    ("und_Arab", "ar_Arab_EG"),
    ("und_CN", "zh_Hans_CN"),
    ("und_Cyrl", "ru_Cyrl_RU"),
    ("und_Deva", "hi_Deva_IN"),
    ("und_HK", "zh_Hant_HK"),
    ("und_Hans", "zh_Hans_CN"),
    ("und_Hant", "zh_Hant_TW"),
    ("und_IN", "hi_Deva_IN"),
    ("und_JP", "ja_Jpan_JP"),
    ("und_Latn", "en_Latn_US"),
    ("und_MO", "zh_Hant_MO"),
    ("und_RU", "ru_Cyrl_RU"),
    ("und_TH", "th_Thai_TH"),
    ("und_TW", "zh_Hant_TW"),
    ("ur", "ur_Arab_PK"),
    ("uz", "uz_Latn_UZ"),
    ("uz_Cyrl", "uz_Cyrl_UZ"),
    ("vi", "vi_Latn_VN"),
    ("yue", "yue_Hant_HK"),
    ("zh", "zh_Hans_CN"),
    ("zh_HK", "zh_Hant_HK"),
    ("zh_Hant", "zh_Hant_TW"),
    ("zh_MO", "zh_Hant_MO"),
    ("zh_TW", "zh_Hant_TW"),
    ("zu", "zu_Latn_ZA"),
];

/// Compiled-in key/type mapping table, sorted by search tag.
pub static KEY_TYPE_DATA: &[(&str, &str)] = &[
    ("key-inv/ca", "calendar"),
    ("key-inv/co", "collation"),
    ("key-inv/cu", "currency"),
    ("key-inv/nu", "numbers"),
    ("key-inv/tz", "timezone"),
    ("key-inv/va", "va"),
    ("key/calendar", "ca"),
    ("key/collation", "co"),
    ("key/currency", "cu"),
    ("key/numbers", "nu"),
    ("key/timezone", "tz"),
    ("key/va", "va"),
    ("type-alias/timezone/asia:calcutta", "Asia/Kolkata"),
    ("type-alias/timezone/asia:saigon", "Asia/Ho_Chi_Minh"),
    ("type-inv/calendar/buddhist", "buddhist"),
    ("type-inv/calendar/chinese", "chinese"),
    ("type-inv/calendar/gregory", "gregorian"),
    ("type-inv/calendar/islamicc", "islamic-civil"),
    ("type-inv/calendar/japanese", "japanese"),
    ("type-inv/collation/direct", "direct"),
    ("type-inv/collation/phonebk", "phonebook"),
    ("type-inv/collation/pinyin", "pinyin"),
    ("type-inv/collation/stroke", "stroke"),
    ("type-inv/collation/trad", "traditional"),
    ("type-inv/numbers/latn", "latn"),
    ("type-inv/numbers/thai", "thai"),
    ("type-inv/timezone/cnsha", "Asia/Shanghai"),
    ("type-inv/timezone/frpar", "Europe/Paris"),
    ("type-inv/timezone/gblon", "Europe/London"),
    ("type-inv/timezone/inccu", "Asia/Kolkata"),
    ("type-inv/timezone/jptyo", "Asia/Tokyo"),
    ("type-inv/timezone/uslax", "America/Los_Angeles"),
    ("type-inv/timezone/usnyc", "America/New_York"),
    ("type-inv/timezone/vnsgn", "Asia/Ho_Chi_Minh"),
    ("type/calendar/buddhist", "buddhist"),
    ("type/calendar/chinese", "chinese"),
    ("type/calendar/gregorian", "gregory"),
    ("type/calendar/islamic-civil", "islamicc"),
    ("type/calendar/japanese", "japanese"),
    ("type/collation/direct", "direct"),
    ("type/collation/phonebook", "phonebk"),
    ("type/collation/pinyin", "pinyin"),
    ("type/collation/stroke", "stroke"),
    ("type/collation/traditional", "trad"),
    ("type/numbers/latn", "latn"),
    ("type/numbers/thai", "thai"),
    ("type/timezone/america:los_angeles", "uslax"),
    ("type/timezone/america:new_york", "usnyc"),
    ("type/timezone/asia:ho_chi_minh", "vnsgn"),
    ("type/timezone/asia:kolkata", "inccu"),
    ("type/timezone/asia:shanghai", "cnsha"),
    ("type/timezone/asia:tokyo", "jptyo"),
    ("type/timezone/europe:london", "gblon"),
    ("type/timezone/europe:paris", "frpar"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        for table in [LIKELY_SUBTAGS, KEY_TYPE_DATA] {
            for window in table.windows(2) {
                assert!(window[0].0 < window[1].0, "{:?}", window);
            }
        }
    }

    #[test]
    fn slice_lookup() {
        assert_eq!(LIKELY_SUBTAGS.lookup("zh_Hant"), Some("zh_Hant_TW"));
        assert_eq!(LIKELY_SUBTAGS.lookup("zz"), None);
        assert_eq!(KEY_TYPE_DATA.lookup("key/collation"), Some("co"));
    }

    #[test]
    fn litemap_lookup() {
        let mut map: LiteMap<String, String> = LiteMap::new();
        map.insert("en".to_owned(), "en_Latn_US".to_owned());
        assert_eq!(map.lookup("en"), Some("en_Latn_US"));
        assert_eq!(map.lookup("de"), None);
    }
}
