//! Named codepoints the emoji scan treats specially.

use crate::codepoint::Codepoint;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// ZWJ: fuses the surrounding codepoints into one drawn emoji.
pub const ZERO_WIDTH_JOINER: Codepoint = Codepoint::from_char('\u{200D}');

/// Object replacement character. Never emoji for display purposes.
pub const OBJECT_REPLACEMENT_CHARACTER: Codepoint = Codepoint::from_char('\u{FFFC}');

/// VS16: the preceding (text-default) codepoint is drawn as emoji.
pub const EMOJI_PRESENTATION_SELECTOR: Codepoint = Codepoint::from_char('\u{FE0F}');

/// Emoji modifier codepoints (Fitzpatrick scale).
pub mod skin_tone {
    use crate::codepoint::Codepoint;

    pub const LIGHT: Codepoint = Codepoint::from_char('\u{1F3FB}');
    pub const MEDIUM_LIGHT: Codepoint = Codepoint::from_char('\u{1F3FC}');
    pub const MEDIUM: Codepoint = Codepoint::from_char('\u{1F3FD}');
    pub const MEDIUM_DARK: Codepoint = Codepoint::from_char('\u{1F3FE}');
    pub const DARK: Codepoint = Codepoint::from_char('\u{1F3FF}');

    pub const FITZPATRICK_1_2: Codepoint = LIGHT;
    pub const FITZPATRICK_3: Codepoint = MEDIUM_LIGHT;
    pub const FITZPATRICK_4: Codepoint = MEDIUM;
    pub const FITZPATRICK_5: Codepoint = MEDIUM_DARK;
    pub const FITZPATRICK_6: Codepoint = DARK;
}

/// Skin tone modifier, lightest to darkest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkinTone {
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    /// All tones, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::MediumLight,
        Self::Medium,
        Self::MediumDark,
        Self::Dark,
    ];

    /// The modifier codepoint for this tone.
    #[must_use]
    pub const fn codepoint(self) -> Codepoint {
        match self {
            Self::Light => skin_tone::LIGHT,
            Self::MediumLight => skin_tone::MEDIUM_LIGHT,
            Self::Medium => skin_tone::MEDIUM,
            Self::MediumDark => skin_tone::MEDIUM_DARK,
            Self::Dark => skin_tone::DARK,
        }
    }

    /// The tone a modifier codepoint selects, if it is one.
    #[must_use]
    pub fn from_codepoint(cp: Codepoint) -> Option<Self> {
        Self::ALL.into_iter().find(|tone| tone.codepoint() == cp)
    }
}

/// The five skin tone modifiers as an ordered set.
///
/// Built on first use and shared afterwards.
#[must_use]
pub fn skin_tones() -> &'static BTreeSet<Codepoint> {
    static SET: OnceLock<BTreeSet<Codepoint>> = OnceLock::new();
    SET.get_or_init(|| SkinTone::ALL.into_iter().map(SkinTone::codepoint).collect())
}

/// Check if a codepoint is a skin tone modifier.
#[inline]
#[must_use]
pub fn is_skin_tone(cp: Codepoint) -> bool {
    skin_tones().contains(&cp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_values() {
        assert_eq!(ZERO_WIDTH_JOINER.value(), 0x200D);
        assert_eq!(OBJECT_REPLACEMENT_CHARACTER.value(), 0xFFFC);
        assert_eq!(EMOJI_PRESENTATION_SELECTOR.value(), 0xFE0F);
    }

    #[test]
    fn test_skin_tone_set_is_exact() {
        let set = skin_tones();
        assert_eq!(set.len(), 5);
        let values: Vec<u32> = set.iter().map(|cp| cp.value()).collect();
        assert_eq!(values, vec![0x1F3FB, 0x1F3FC, 0x1F3FD, 0x1F3FE, 0x1F3FF]);

        assert!(is_skin_tone(skin_tone::MEDIUM));
        assert!(!is_skin_tone(Codepoint::from_char('\u{1F3FA}')));
        assert!(!is_skin_tone(Codepoint::from_char('\u{1F400}')));
        assert!(!is_skin_tone(ZERO_WIDTH_JOINER));
    }

    #[test]
    fn test_fitzpatrick_aliases() {
        assert_eq!(skin_tone::FITZPATRICK_1_2, skin_tone::LIGHT);
        assert_eq!(skin_tone::FITZPATRICK_3, skin_tone::MEDIUM_LIGHT);
        assert_eq!(skin_tone::FITZPATRICK_6, skin_tone::DARK);
    }

    #[test]
    fn test_skin_tone_enum() {
        for tone in SkinTone::ALL {
            assert_eq!(SkinTone::from_codepoint(tone.codepoint()), Some(tone));
        }
        assert_eq!(SkinTone::from_codepoint(ZERO_WIDTH_JOINER), None);
        assert_eq!(SkinTone::Dark.codepoint(), '🏿');
    }
}
