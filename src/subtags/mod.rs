// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! Validated, fixed-memory subtag types.
//!
//! The types in this module hold canonically cased, length-checked subtags
//! backed by [`tinystr::TinyAsciiStr`]. The lenient locale-name parser uses
//! them for the positional fields it can recognize; everything it cannot is
//! carried as raw variant material on [`LocaleId`](crate::LocaleId).

mod language;
mod region;
mod script;
mod variant;

pub use language::Language;
pub use region::Region;
pub use script::Script;
pub use variant::Variant;
