// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::parser::ParseError;
use tinystr::TinyAsciiStr;

/// A script subtag: exactly 4 ASCII letters, canonically titlecased.
///
/// # Examples
///
/// ```
/// use uloc::subtags::Script;
///
/// let script: Script = "latn".parse().expect("valid script");
/// assert_eq!(script.as_str(), "Latn");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Script(TinyAsciiStr<4>);

impl Script {
    /// Parses and canonicalizes a script subtag from a string slice.
    pub const fn try_from_str(s: &str) -> Result<Self, ParseError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// Parses and canonicalizes a script subtag from UTF-8 code units.
    pub const fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        if code_units.len() != 4 {
            return Err(ParseError::InvalidSubtag);
        }
        let tiny = match TinyAsciiStr::try_from_utf8(code_units) {
            Ok(tiny) => tiny,
            Err(_) => return Err(ParseError::InvalidSubtag),
        };
        if !tiny.is_ascii_alphabetic() {
            return Err(ParseError::InvalidSubtag);
        }
        Ok(Self(tiny.to_ascii_titlecase()))
    }

    /// The canonical titlecase form.
    #[inline]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl_subtag_traits!(Script);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_titlecases() {
        assert_eq!(Script::try_from_str("LATN").unwrap().as_str(), "Latn");
        assert_eq!(Script::try_from_str("hant").unwrap().as_str(), "Hant");
    }

    #[test]
    fn rejects_bad_shapes() {
        for bad in ["", "Lat", "Latin", "La1n"] {
            assert!(Script::try_from_str(bad).is_err(), "{bad:?}");
        }
    }
}
