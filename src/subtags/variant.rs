// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use crate::parser::ParseError;
use tinystr::TinyAsciiStr;

/// A well-formed BCP 47 variant subtag: 5 to 8 alphanumerics, or 4
/// characters starting with a digit. The canonical form is lowercase.
///
/// Legacy locale names may carry variant material that does not fit this
/// shape (`PHONEBOOK`, `TRADITIONAL`); such material stays on
/// [`LocaleId`](crate::LocaleId) as raw strings and only well-formed
/// subtags cross into language tags.
///
/// # Examples
///
/// ```
/// use uloc::subtags::Variant;
///
/// let variant: Variant = "POSIX".parse().expect("valid variant");
/// assert_eq!(variant.as_str(), "posix");
/// assert!("phonebook".parse::<Variant>().is_err());
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Variant(TinyAsciiStr<8>);

impl Variant {
    /// Parses and canonicalizes a variant subtag from a string slice.
    pub const fn try_from_str(s: &str) -> Result<Self, ParseError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// Parses and canonicalizes a variant subtag from UTF-8 code units.
    pub const fn try_from_utf8(code_units: &[u8]) -> Result<Self, ParseError> {
        let len_ok = match code_units.len() {
            4 => match code_units {
                [b, ..] => b.is_ascii_digit(),
                [] => false,
            },
            5..=8 => true,
            _ => false,
        };
        if !len_ok {
            return Err(ParseError::InvalidSubtag);
        }
        let tiny = match TinyAsciiStr::try_from_utf8(code_units) {
            Ok(tiny) => tiny,
            Err(_) => return Err(ParseError::InvalidSubtag),
        };
        if !tiny.is_ascii_alphanumeric() {
            return Err(ParseError::InvalidSubtag);
        }
        Ok(Self(tiny.to_ascii_lowercase()))
    }

    /// The canonical lowercase form.
    #[inline]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl_subtag_traits!(Variant);
