// This file is part of the uloc project. For terms of use, please see the
// file called LICENSE at the top level of the uloc source tree.

pub(crate) mod errors;

pub use errors::{Field, ParseError, SyntaxError};

#[inline]
pub(crate) const fn is_separator(b: u8) -> bool {
    b == b'-' || b == b'_'
}

/// Iterates over the `-`/`_` separated segments of a locale name,
/// yielding empty segments for doubled separators.
#[derive(Debug, Clone)]
pub(crate) struct SubtagIterator<'a> {
    rest: Option<&'a [u8]>,
}

impl<'a> SubtagIterator<'a> {
    pub(crate) const fn new(input: &'a [u8]) -> Self {
        Self { rest: Some(input) }
    }
}

impl<'a> Iterator for SubtagIterator<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.iter().position(|b| is_separator(*b)) {
            Some(idx) => {
                let (head, tail) = rest.split_at(idx);
                self.rest = tail.get(1..);
                Some(head)
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}

/// Whether a locale name should be routed to the language-tag parser: no
/// keyword section, at least two segments, and the shortest segment is a
/// single character (the legacy form never produces one-character
/// fields, while tags only do so for singletons, which never stand
/// alone).
pub(crate) fn is_language_tag(name: &str) -> bool {
    if name.is_empty() || name.contains('@') || !name.contains(['-', '_']) {
        return false;
    }
    name.split(['-', '_'])
        .map(str::len)
        .min()
        .is_some_and(|shortest| shortest == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtag_iterator_keeps_empty_segments() {
        let segments: Vec<&[u8]> = SubtagIterator::new(b"de__PHONEBOOK").collect();
        assert_eq!(segments, vec![&b"de"[..], &b""[..], &b"PHONEBOOK"[..]]);

        let segments: Vec<&[u8]> = SubtagIterator::new(b"_US").collect();
        assert_eq!(segments, vec![&b""[..], &b"US"[..]]);

        let segments: Vec<&[u8]> = SubtagIterator::new(b"").collect();
        assert_eq!(segments, vec![&b""[..]]);
    }

    #[test]
    fn subtag_iterator_handles_both_separators() {
        let segments: Vec<&[u8]> = SubtagIterator::new(b"sr-Latn_RS").collect();
        assert_eq!(segments, vec![&b"sr"[..], &b"Latn"[..], &b"RS"[..]]);
    }

    #[test]
    fn language_tag_detection() {
        assert!(is_language_tag("en-a-bbb"));
        assert!(is_language_tag("x-private"));
        assert!(is_language_tag("i-klingon"));
        assert!(!is_language_tag("en-US"));
        assert!(!is_language_tag("de__PHONEBOOK"));
        assert!(!is_language_tag("en-a-bbb@currency=eur"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("_US"));
        assert!(!is_language_tag("C"));
    }
}
