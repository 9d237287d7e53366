// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

use displaydoc::Display;

/// List of parser errors that can be generated while validating subtags.
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone)]
#[non_exhaustive]
pub enum ParseError {
    /// The given language subtag is invalid
    #[displaydoc("The given language subtag is invalid")]
    InvalidLanguage,
    /// Invalid subtag
    #[displaydoc("Invalid subtag")]
    InvalidSubtag,
    /// Invalid extension
    #[displaydoc("Invalid extension")]
    InvalidExtension,
}

impl core::error::Error for ParseError {}

/// The field a strict scanner was working on when it rejected its input.
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone)]
#[non_exhaustive]
pub enum Field {
    /// language
    Language,
    /// script
    Script,
    /// region
    Region,
    /// variant
    Variant,
    /// extension
    Extension,
    /// attribute
    Attribute,
    /// key
    Key,
    /// type
    Type,
    /// Accept-Language
    AcceptLanguage,
}

/// An error raised by the strict scanners (builder, strict language-tag
/// parsing, Accept-Language), carrying the byte offset at which the input
/// was rejected.
#[derive(Display, Debug, PartialEq, Eq, Clone)]
#[displaydoc("ill-formed {field} at offset {offset}")]
#[non_exhaustive]
pub struct SyntaxError {
    /// Which field was being scanned.
    pub field: Field,
    /// Byte offset into the input at which scanning failed.
    pub offset: usize,
}

impl SyntaxError {
    pub(crate) fn new(field: Field, offset: usize) -> Self {
        Self { field, offset }
    }
}

impl core::error::Error for SyntaxError {}
