// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::parser::ParseError;
use tinystr::TinyAsciiStr;

/// A region subtag: 2 ASCII letters (canonically uppercase) or 3 digits.
///
/// # Examples
///
/// ```
/// use uloc::subtags::Region;
///
/// let region: Region = "us".parse().expect("valid region");
/// assert_eq!(region.as_str(), "US");
/// assert_eq!("419".parse::<Region>().expect("valid region").as_str(), "419");
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Region(TinyAsciiStr<3>);

impl Region {
    /// Parses and canonicalizes a region subtag from a string slice.
    pub const fn try_from_str(s: &str) -> Result<Self, ParseError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// Parses and canonicalizes a region subtag from UTF-8 code units.
    pub const fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        let tiny = match TinyAsciiStr::try_from_utf8(code_units) {
            Ok(tiny) => tiny,
            Err(_) => return Err(ParseError::InvalidSubtag),
        };
        match code_units.len() {
            2 if tiny.is_ascii_alphabetic() => Ok(Self(tiny.to_ascii_uppercase())),
            3 if tiny.is_ascii_numeric() => Ok(Self(tiny)),
            _ => Err(ParseError::InvalidSubtag),
        }
    }

    /// Whether this region is a 3-digit (UN M.49) code.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        self.0.is_ascii_numeric()
    }

    /// The canonical form: uppercase for alphabetic codes.
    #[inline]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl_subtag_traits!(Region);
