// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! Parsing, canonicalization and negotiation of locale identifiers.
//!
//! This crate models the legacy underscore locale form
//! (`lang[_Scrp][_RG][_VARIANT]...[@key=value;...]`) alongside BCP 47
//! language tags and converts between the two. On top of the identifier
//! model it offers table-driven canonicalization of deprecated names,
//! the CLDR likely-subtags algorithms, a strict validating builder, and
//! Accept-Language parsing with negotiation.
//!
//! Parsing an identifier never fails; anything unrecognized degrades to
//! the root language or is carried as raw variant material. The strict
//! surfaces ([`LocaleBuilder`], [`parse_accept_language`]) instead
//! reject ill-formed input with a [`SyntaxError`] naming the field and
//! byte offset.
//!
//! # Examples
//!
//! ```
//! use uloc::{canonicalize, LocaleExpander, LocaleId};
//!
//! let mut loc = LocaleId::from_name("de__PHONEBOOK");
//! canonicalize(&mut loc);
//! assert_eq!(loc.to_string(), "de@collation=phonebook");
//! assert_eq!(loc.to_language_tag(), "de-u-co-phonebk");
//!
//! let mut loc = LocaleId::from_name("sh");
//! LocaleExpander::new_common().maximize(&mut loc);
//! assert_eq!(loc.to_string(), "sr_Latn_RS");
//! ```

#![cfg_attr(
    not(test),
    deny(
        clippy::indexing_slicing,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::exhaustive_structs,
        clippy::exhaustive_enums,
        missing_debug_implementations,
    )
)]
#![warn(missing_docs)]

#[macro_use]
mod helpers;

mod accept;
mod builder;
mod canonicalizer;
mod expander;
mod interop;
mod langtag;
mod locale;
mod parser;
pub mod provider;
pub mod subtags;

pub use accept::{accept_language, negotiate, parse_accept_language, Negotiated};
pub use builder::LocaleBuilder;
pub use canonicalizer::{canonicalize, canonicalize_name};
pub use expander::LocaleExpander;
pub use interop::{from_host, host_tag_style, set_host_tag_style, to_host, HostTagStyle};
pub use locale::LocaleId;
pub use parser::{Field, ParseError, SyntaxError};

/// Used to track the result of a transformation operation that potentially
/// modifies its argument in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_enums)] // this enum is stable
pub enum TransformResult {
    /// The transformation changed the argument.
    Modified,
    /// The transformation left the argument untouched.
    Unmodified,
}
