// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

//! Accept-Language parsing and negotiation.

use crate::canonicalizer;
use crate::expander::LocaleExpander;
use crate::locale::LocaleId;
use crate::parser::{Field, SyntaxError};
use crate::provider::SubtagLookup;

/// The outcome of a successful negotiation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Negotiated {
    /// The agreed-on identifier.
    pub locale: LocaleId,
    /// Whether the match happened on an inheritance parent of the
    /// requested range rather than the range itself.
    pub fallback: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum ScanState {
    BeforeRange,
    InRange,
    Wildcard,
    RangeEnd,
    BeforeQ,
    BeforeEquals,
    BeforeValue,
    ValueStart,
    BeforeFraction,
    Fraction,
    AfterValue,
}

/// Parses an Accept-Language header into canonicalized identifiers
/// ordered by descending quality, ties kept in input order.
///
/// The scanner walks the header byte by byte; any unexpected byte aborts
/// with its offset. Wildcard (`*`) ranges are parsed but excluded from
/// the result. A range without an explicit quality inherits the most
/// recent explicit quality (1.0 when none precedes it), and a quality
/// whose integer part is `1` admits only zero fraction digits.
///
/// # Examples
///
/// ```
/// use uloc::parse_accept_language;
///
/// let list = parse_accept_language("en-us;q=0.3, de;q=0.8").unwrap();
/// let names: Vec<String> = list.iter().map(|l| l.to_string()).collect();
/// assert_eq!(names, ["de", "en_US"]);
/// ```
pub fn parse_accept_language(header: &str) -> Result<Vec<LocaleId>, SyntaxError> {
    use ScanState::*;

    let mut entries: Vec<(LocaleId, f64)> = Vec::new();
    let mut range = String::new();
    let mut qval = String::new();
    let mut state = BeforeRange;
    let mut sub_tag = false;
    let mut leading_one = false;
    let mut inherited_q = 1.0f64;

    // A trailing comma uniformly flushes the final range.
    for (offset, c) in header.bytes().chain(core::iter::once(b',')).enumerate() {
        let err = || Err(SyntaxError::new(Field::AcceptLanguage, offset));
        let mut flush = false;
        match state {
            BeforeRange => {
                if c.is_ascii_alphabetic() {
                    range.push(char::from(c));
                    sub_tag = false;
                    state = InRange;
                } else if c == b'*' {
                    range.push('*');
                    state = Wildcard;
                } else if c != b' ' && c != b'\t' {
                    return err();
                }
            }
            InRange => {
                if c.is_ascii_alphabetic() {
                    range.push(char::from(c));
                } else if c == b'-' || c == b'_' {
                    sub_tag = true;
                    range.push('-');
                } else if c.is_ascii_digit() {
                    // Digits are legal only past the primary language.
                    if !sub_tag {
                        return err();
                    }
                    range.push(char::from(c));
                } else if c == b',' {
                    flush = true;
                } else if c == b' ' || c == b'\t' {
                    state = RangeEnd;
                } else if c == b';' {
                    state = BeforeQ;
                } else {
                    return err();
                }
            }
            Wildcard | RangeEnd => {
                if c == b',' {
                    flush = true;
                } else if c == b';' {
                    state = BeforeQ;
                } else if c == b' ' || c == b'\t' {
                    state = RangeEnd;
                } else {
                    return err();
                }
            }
            BeforeQ => {
                if c == b'q' {
                    state = BeforeEquals;
                } else if c != b' ' && c != b'\t' {
                    return err();
                }
            }
            BeforeEquals => {
                if c == b'=' {
                    state = BeforeValue;
                } else if c != b' ' && c != b'\t' {
                    return err();
                }
            }
            BeforeValue => {
                if c == b'0' || c == b'1' {
                    leading_one = c == b'1';
                    qval.push(char::from(c));
                    state = ValueStart;
                } else if c == b'.' {
                    leading_one = false;
                    qval.push('.');
                    state = BeforeFraction;
                } else if c != b' ' && c != b'\t' {
                    return err();
                }
            }
            ValueStart => {
                if c == b'.' {
                    qval.push('.');
                    state = BeforeFraction;
                } else if c == b',' {
                    flush = true;
                } else if c == b' ' || c == b'\t' {
                    state = AfterValue;
                } else {
                    return err();
                }
            }
            BeforeFraction | Fraction => {
                if c.is_ascii_digit() {
                    // An integer part of 1 admits only zero fractions.
                    if leading_one && c != b'0' {
                        return err();
                    }
                    qval.push(char::from(c));
                    state = Fraction;
                } else if state == Fraction && c == b',' {
                    flush = true;
                } else if state == Fraction && (c == b' ' || c == b'\t') {
                    state = AfterValue;
                } else {
                    return err();
                }
            }
            AfterValue => {
                if c == b',' {
                    flush = true;
                } else if c != b' ' && c != b'\t' {
                    return err();
                }
            }
        }
        if flush {
            let q = if qval.is_empty() {
                inherited_q
            } else {
                let parsed: f64 = qval.parse().unwrap_or(1.0);
                inherited_q = parsed.min(1.0);
                inherited_q
            };
            if !range.starts_with('*') {
                let mut locale = LocaleId::from_name(&range);
                canonicalizer::canonicalize(&mut locale);
                entries.push((locale, q));
            }
            range.clear();
            qval.clear();
            state = BeforeRange;
        }
    }

    // Stable sort keeps equal qualities in input order.
    entries.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(core::cmp::Ordering::Equal));
    Ok(entries.into_iter().map(|(locale, _)| locale).collect())
}

/// Negotiates an ordered desired list against an available set.
///
/// Each desired range is tried, then its successive [`fallback`]
/// parents down to and including the root, before moving to the next
/// range. A structural match returns the available entry. An available
/// entry that differs only by carrying an explicit script also matches,
/// provided minimizing it drops that script; in that case the range
/// itself is returned. The `fallback` flag is set unless the match
/// happened on an unstripped range.
///
/// [`fallback`]: LocaleId::fallback
pub fn negotiate<P: SubtagLookup>(
    desired: &[LocaleId],
    available: &[LocaleId],
    expander: &LocaleExpander<P>,
) -> Option<Negotiated> {
    for wanted in desired {
        let mut current = wanted.clone();
        let mut first_pass = true;
        loop {
            for entry in available {
                if *entry == current {
                    return Some(Negotiated {
                        locale: entry.clone(),
                        fallback: !first_pass,
                    });
                }
                if current.script.is_none()
                    && entry.script.is_some()
                    && entry.language == current.language
                    && entry.region == current.region
                    && entry.variants().eq(current.variants())
                {
                    let mut minimized = entry.clone();
                    expander.minimize(&mut minimized);
                    if minimized.script.is_none() {
                        return Some(Negotiated {
                            locale: current.clone(),
                            fallback: !first_pass,
                        });
                    }
                }
            }
            match current.fallback() {
                Some(parent) => current = parent,
                None => break,
            }
            first_pass = false;
        }
    }
    None
}

/// Parses a header and negotiates it against an available set.
pub fn accept_language<P: SubtagLookup>(
    header: &str,
    available: &[LocaleId],
    expander: &LocaleExpander<P>,
) -> Result<Option<Negotiated>, SyntaxError> {
    let desired = parse_accept_language(header)?;
    Ok(negotiate(&desired, available, expander))
}
