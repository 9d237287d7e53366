// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::parser::ParseError;
use tinystr::TinyAsciiStr;

/// A language subtag: the root (empty) language, or 2 to 3 ASCII letters.
///
/// The canonical form is lowercase. The root language serializes to the
/// empty string in the legacy underscore form and to `und` in a language
/// tag.
///
/// # Examples
///
/// ```
/// use uloc::subtags::Language;
///
/// let language: Language = "EN".parse().expect("valid language");
/// assert_eq!(language.as_str(), "en");
/// assert_eq!(Language::try_from_str("").unwrap(), Language::ROOT);
/// assert!("threeplus".parse::<Language>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Language(TinyAsciiStr<3>);

impl Default for Language {
    fn default() -> Self {
        Self::ROOT
    }
}

impl Language {
    /// The root language, whose canonical string form is empty.
    pub const ROOT: Self = match TinyAsciiStr::try_from_utf8(b"") {
        Ok(empty) => Self(empty),
        Err(_) => unreachable!(),
    };

    /// Parses and canonicalizes a language subtag from a string slice.
    pub const fn try_from_str(s: &str) -> Result<Self, ParseError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// Parses and canonicalizes a language subtag from UTF-8 code units.
    pub const fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        if code_units.is_empty() {
            return Ok(Self::ROOT);
        }
        if code_units.len() < 2 || code_units.len() > 3 {
            return Err(ParseError::InvalidLanguage);
        }
        let tiny = match TinyAsciiStr::try_from_utf8(code_units) {
            Ok(tiny) => tiny,
            Err(_) => return Err(ParseError::InvalidLanguage),
        };
        if !tiny.is_ascii_alphabetic() {
            return Err(ParseError::InvalidLanguage);
        }
        Ok(Self(tiny.to_ascii_lowercase()))
    }

    /// Whether this is the root language.
    #[inline]
    pub const fn is_root(self) -> bool {
        self.0.is_empty()
    }

    /// The canonical lowercase form; empty for the root language.
    #[inline]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl_subtag_traits!(Language);
