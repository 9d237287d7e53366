// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::locale::LocaleId;
use crate::provider::{self, SubtagLookup};
use crate::subtags::{Language, Region, Script};
use crate::TransformResult;

/// Maximizes and minimizes locale identifiers with a likely-subtags table.
///
/// # Examples
///
/// ```
/// use uloc::{LocaleExpander, LocaleId, TransformResult};
///
/// let lc = LocaleExpander::new_common();
///
/// let mut locale = LocaleId::from_name("en");
/// assert_eq!(lc.maximize(&mut locale), TransformResult::Modified);
/// assert_eq!(locale.to_string(), "en_Latn_US");
///
/// let mut locale = LocaleId::from_name("zh_Hant_TW");
/// assert_eq!(lc.minimize(&mut locale), TransformResult::Modified);
/// assert_eq!(locale.to_string(), "zh_TW");
/// ```
#[derive(Debug)]
pub struct LocaleExpander<P = &'static [(&'static str, &'static str)]> {
    likely: P,
}

impl LocaleExpander {
    /// An expander over the compiled-in likely-subtags table.
    pub fn new_common() -> Self {
        Self {
            likely: provider::LIKELY_SUBTAGS,
        }
    }
}

impl Default for LocaleExpander {
    fn default() -> Self {
        Self::new_common()
    }
}

impl<P: SubtagLookup> LocaleExpander<P> {
    /// An expander over a caller-supplied likely-subtags table.
    pub fn new_with_table(likely: P) -> Self {
        Self { likely }
    }

    /// Runs the add-likely-subtags algorithm in place.
    ///
    /// Search tags are tried in the order language+script+region,
    /// language+script, language+region, language; the first hit wins.
    /// The hit's language always replaces the input language, while
    /// script and region are only filled in where the input lacked them.
    /// Variants and the keyword section ride along untouched. Without a
    /// hit the identifier is left unmodified.
    pub fn maximize(&self, locale: &mut LocaleId) -> TransformResult {
        let Some((language, script, region)) =
            self.maximized(locale.language, locale.script, locale.region)
        else {
            return TransformResult::Unmodified;
        };
        let mut modified = false;
        if locale.language != language {
            locale.language = language;
            modified = true;
        }
        if locale.script != script {
            locale.script = script;
            modified = true;
        }
        if locale.region != region {
            locale.region = region;
            modified = true;
        }
        if modified {
            TransformResult::Modified
        } else {
            TransformResult::Unmodified
        }
    }

    /// Runs the remove-likely-subtags algorithm in place.
    ///
    /// The identifier is first maximized to obtain the expansion target;
    /// candidates built from the identifier's own subtags are then tested
    /// in the order language, language+region, language+script, and the
    /// first one whose maximization matches the target wins (region is
    /// favored over script, and the language is never rewritten). When
    /// maximization fails or no candidate matches, the identifier is left
    /// as given.
    pub fn minimize(&self, locale: &mut LocaleId) -> TransformResult {
        let Some(maximized) = self.maximized(locale.language, locale.script, locale.region)
        else {
            return TransformResult::Unmodified;
        };
        let language = locale.language;
        let script = locale.script;
        let region = locale.region;

        let mut candidate = None;
        if self.maximized(language, None, None) == Some(maximized) {
            candidate = Some((language, None, None));
        } else if region.is_some() && self.maximized(language, None, region) == Some(maximized) {
            candidate = Some((language, None, region));
        } else if script.is_some() && self.maximized(language, script, None) == Some(maximized) {
            candidate = Some((language, script, None));
        }

        let Some((language, script, region)) = candidate else {
            return TransformResult::Unmodified;
        };
        if locale.language == language && locale.script == script && locale.region == region {
            return TransformResult::Unmodified;
        }
        locale.language = language;
        locale.script = script;
        locale.region = region;
        TransformResult::Modified
    }

    /// The fully expanded (language, script, region) triple, or `None`
    /// when no search tag matches.
    fn maximized(
        &self,
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> Option<(Language, Option<Script>, Option<Region>)> {
        // The unknown placeholders never participate in lookups.
        let script = script.filter(|s| s.as_str() != "Zzzz");
        let region = region.filter(|r| r.as_str() != "ZZ");

        let hit = self.lookup_likely(language, script, region)?;
        let merged_language = if hit.language.is_root() {
            language
        } else {
            hit.language
        };
        Some((merged_language, script.or(hit.script), region.or(hit.region)))
    }

    fn lookup_likely(
        &self,
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> Option<LocaleId> {
        let language = if language.is_root() {
            "und"
        } else {
            language.as_str()
        };
        let mut search = String::with_capacity(12);
        for (with_script, with_region) in [(true, true), (true, false), (false, true), (false, false)]
        {
            if (with_script && script.is_none()) || (with_region && region.is_none()) {
                continue;
            }
            search.clear();
            search.push_str(language);
            if with_script {
                if let Some(script) = script {
                    search.push('_');
                    search.push_str(script.as_str());
                }
            }
            if with_region {
                if let Some(region) = region {
                    search.push('_');
                    search.push_str(region.as_str());
                }
            }
            if let Some(hit) = self.likely.lookup(&search) {
                return Some(LocaleId::from_legacy_name(hit));
            }
        }
        None
    }
}
