//! Codepoint iteration over decoded text.

use crate::codepoint::Codepoint;
use std::str::CharIndices;

/// One scalar value of a string, with the text it occupied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedCodepoint<'a> {
    pub codepoint: Codepoint,
    /// The exact fragment of the source string (1-4 bytes).
    pub text: &'a str,
    pub byte_offset: usize,
}

/// Iterator over the codepoints of a string, in order.
pub struct CodepointIterator<'a> {
    source: &'a str,
    inner: CharIndices<'a>,
}

impl<'a> Iterator for CodepointIterator<'a> {
    type Item = DecodedCodepoint<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (byte_offset, c) = self.inner.next()?;
        Some(DecodedCodepoint {
            codepoint: Codepoint::from_char(c),
            text: &self.source[byte_offset..byte_offset + c.len_utf8()],
            byte_offset,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for CodepointIterator<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (byte_offset, c) = self.inner.next_back()?;
        Some(DecodedCodepoint {
            codepoint: Codepoint::from_char(c),
            text: &self.source[byte_offset..byte_offset + c.len_utf8()],
            byte_offset,
        })
    }
}

/// Iterate over the codepoints of a string.
#[must_use]
pub fn codepoints(s: &str) -> CodepointIterator<'_> {
    CodepointIterator {
        source: s,
        inner: s.char_indices(),
    }
}

/// Count the codepoints in a string.
#[must_use]
pub fn codepoint_count(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoints_ascii() {
        let cps: Vec<_> = codepoints("hi").map(|d| d.text).collect();
        assert_eq!(cps, vec!["h", "i"]);
    }

    #[test]
    fn test_codepoints_zwj_sequence_is_split() {
        // Family emoji is one grapheme but five scalars
        let family = "👨\u{200D}👩\u{200D}👧";
        let cps: Vec<_> = codepoints(family).map(|d| d.codepoint.value()).collect();
        assert_eq!(cps, vec![0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467]);
        assert_eq!(codepoint_count(family), 5);
    }

    #[test]
    fn test_fragments_match_source() {
        let s = "a😀\u{FE0F}b";
        for decoded in codepoints(s) {
            let end = decoded.byte_offset + decoded.text.len();
            assert_eq!(&s[decoded.byte_offset..end], decoded.text);
            assert_eq!(
                Codepoint::from_fragment(decoded.text),
                Some(decoded.codepoint)
            );
        }
        let offsets: Vec<_> = codepoints(s).map(|d| d.byte_offset).collect();
        assert_eq!(offsets, vec![0, 1, 5, 8]);
    }

    #[test]
    fn test_reverse_iteration() {
        let rev: Vec<_> = codepoints("ab😀").rev().map(|d| d.text).collect();
        assert_eq!(rev, vec!["😀", "b", "a"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(codepoints("").count(), 0);
    }
}
