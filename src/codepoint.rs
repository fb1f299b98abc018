//! Unicode scalar value type.
//!
//! A [`Codepoint`] is exactly one Unicode scalar value: not a grapheme
//! cluster, not a code unit. Validity is enforced at construction, so every
//! `Codepoint` can be turned back into a `char` without a fallible step.
//!
//! # Examples
//!
//! ```
//! use jumbomoji::Codepoint;
//!
//! let grin: Codepoint = "U+1F600".parse().unwrap();
//! assert_eq!(grin, '😀');
//! assert_eq!(grin.to_string(), "U+1F600");
//! assert_eq!(grin.to_text(), "😀");
//! ```

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Highest valid Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// One Unicode scalar value.
///
/// Ordering and equality follow the scalar value. The canonical text form
/// (`Display`) is `U+` followed by at least four upper-case hex digits.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(char);

impl Codepoint {
    /// Wrap a `char`.
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        Self(c)
    }

    /// Build from a raw scalar value.
    ///
    /// Returns `None` for surrogates and values above U+10FFFF.
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        match char::from_u32(value) {
            Some(c) => Some(Self(c)),
            None => None,
        }
    }

    /// Build from a decoded text fragment holding exactly one scalar value.
    ///
    /// Returns `None` for empty fragments or fragments with more than one
    /// scalar value.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let mut chars = fragment.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self(c))
    }

    /// The scalar value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }

    /// The scalar value as a `char`.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// The codepoint as the text fragment a decoder would yield for it.
    #[must_use]
    pub fn to_text(self) -> String {
        self.0.to_string()
    }

    /// Number of bytes in the UTF-8 encoding.
    #[must_use]
    pub const fn len_utf8(self) -> usize {
        self.0.len_utf8()
    }

    /// Number of 16-bit units in the UTF-16 encoding (1 or 2).
    #[must_use]
    pub const fn len_utf16(self) -> usize {
        self.0.len_utf16()
    }

    /// UTF-8 encoding.
    #[must_use]
    pub fn to_utf8(self) -> Vec<u8> {
        let mut buf = [0u8; 4];
        self.0.encode_utf8(&mut buf).as_bytes().to_vec()
    }

    /// UTF-16 encoding; a surrogate pair for codepoints above U+FFFF.
    #[must_use]
    pub fn to_utf16(self) -> Vec<u16> {
        let mut buf = [0u16; 2];
        self.0.encode_utf16(&mut buf).to_vec()
    }

    /// Whether this codepoint lies outside the Basic Multilingual Plane.
    #[must_use]
    pub const fn is_supplementary(self) -> bool {
        self.value() > 0xFFFF
    }
}

impl fmt::Display for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.value())
    }
}

impl fmt::Debug for Codepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Codepoint {
    type Err = Error;

    /// Parse the canonical `U+XXXX` form (prefix case-insensitive, 1-6 hex
    /// digits).
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("U+")
            .or_else(|| s.strip_prefix("u+"))
            .ok_or_else(|| Error::InvalidCodepoint(s.to_string()))?;

        if digits.is_empty()
            || digits.len() > 6
            || !digits.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(Error::InvalidCodepoint(s.to_string()));
        }

        let value =
            u32::from_str_radix(digits, 16).map_err(|_| Error::InvalidCodepoint(s.to_string()))?;
        Self::try_from(value)
    }
}

impl TryFrom<u32> for Codepoint {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_u32(value).ok_or(Error::CodepointOutOfRange(value))
    }
}

impl From<char> for Codepoint {
    fn from(c: char) -> Self {
        Self(c)
    }
}

impl From<Codepoint> for char {
    fn from(cp: Codepoint) -> Self {
        cp.0
    }
}

impl From<Codepoint> for u32 {
    fn from(cp: Codepoint) -> Self {
        cp.value()
    }
}

impl PartialEq<char> for Codepoint {
    fn eq(&self, other: &char) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_canonical_form() {
        assert_eq!(Codepoint::from_char('a').to_string(), "U+0061");
        assert_eq!(Codepoint::from_char('\u{200D}').to_string(), "U+200D");
        assert_eq!(Codepoint::from_char('😀').to_string(), "U+1F600");
        assert_eq!(Codepoint::from_char('\u{10FFFF}').to_string(), "U+10FFFF");
        assert_eq!(format!("{:?}", Codepoint::from_char('\u{FE0F}')), "U+FE0F");
    }

    #[test]
    fn test_parse() {
        assert_eq!("U+1F600".parse::<Codepoint>().unwrap(), '😀');
        assert_eq!("u+1f600".parse::<Codepoint>().unwrap(), '😀');
        assert_eq!("U+41".parse::<Codepoint>().unwrap(), 'A');
        assert_eq!("U+0".parse::<Codepoint>().unwrap(), '\0');
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "U+", "1F600", "U+1F60G", "U+-1", "U++1F600", "U+0000001", " U+41"] {
            assert!(
                matches!(bad.parse::<Codepoint>(), Err(Error::InvalidCodepoint(_))),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(matches!(
            "U+110000".parse::<Codepoint>(),
            Err(Error::CodepointOutOfRange(0x11_0000))
        ));
        assert!(matches!(
            "U+D800".parse::<Codepoint>(),
            Err(Error::CodepointOutOfRange(0xD800))
        ));
    }

    #[test]
    fn test_try_from_u32() {
        assert_eq!(Codepoint::try_from(0x1F44D).unwrap(), '👍');
        assert!(Codepoint::try_from(0xDFFF).is_err());
        assert!(Codepoint::try_from(MAX_SCALAR + 1).is_err());
        assert!(Codepoint::try_from(MAX_SCALAR).is_ok());
    }

    #[test]
    fn test_display_parse_agree() {
        for c in ['\0', 'z', '\u{FFFC}', '🏿', '\u{E0001}'] {
            let cp = Codepoint::from(c);
            assert_eq!(cp.to_string().parse::<Codepoint>().unwrap(), cp);
        }
    }

    #[test]
    fn test_fragment_conversion() {
        assert_eq!(Codepoint::from_fragment("😀"), Some(Codepoint::from_char('😀')));
        assert_eq!(Codepoint::from_fragment(""), None);
        assert_eq!(Codepoint::from_fragment("ab"), None);
        // ZWJ sequence is several scalars, not one
        assert_eq!(Codepoint::from_fragment("👨\u{200D}👩"), None);
        assert_eq!(Codepoint::from_char('👩').to_text(), "👩");
    }

    #[test]
    fn test_ordering_follows_scalar_value() {
        let a = Codepoint::from_char('A');
        let zwj = Codepoint::from_char('\u{200D}');
        let grin = Codepoint::from_char('😀');
        assert!(a < zwj);
        assert!(zwj < grin);
        assert_eq!(grin.value(), 0x1F600);
    }

    #[test]
    fn test_encodings() {
        let grin = Codepoint::from_char('😀');
        assert_eq!(grin.len_utf8(), 4);
        assert_eq!(grin.len_utf16(), 2);
        assert_eq!(grin.to_utf8(), vec![0xF0, 0x9F, 0x98, 0x80]);
        assert_eq!(grin.to_utf16(), vec![0xD83D, 0xDE00]);
        assert!(grin.is_supplementary());

        let zwj = Codepoint::from_char('\u{200D}');
        assert_eq!(zwj.to_utf16(), vec![0x200D]);
        assert!(!zwj.is_supplementary());
    }
}
