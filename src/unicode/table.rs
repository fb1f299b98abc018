//! Emoji membership tables.
//!
//! The classifier only ever asks one question of its table: is this
//! codepoint an emoji on its own? [`EmojiTable`] is that question. The
//! default answer comes from the Unicode emoji properties; tests and hosts
//! with their own data can plug in any set.

use crate::codepoint::Codepoint;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use unicode_properties::{EmojiStatus, UnicodeEmoji};

/// Read-only set of codepoints that are emoji by themselves.
pub trait EmojiTable {
    /// Whether `cp` is a base emoji codepoint.
    fn contains(&self, cp: Codepoint) -> bool;
}

/// Table backed by the Unicode emoji data (`Emoji_Presentation=Yes`).
///
/// Codepoints that default to text presentation (e.g. U+2764 HEAVY BLACK
/// HEART) are not members; they count as emoji only when followed by VS16.
/// Skin tone modifiers are excluded since they never form a symbol alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeEmojiTable;

impl EmojiTable for UnicodeEmojiTable {
    #[inline]
    fn contains(&self, cp: Codepoint) -> bool {
        matches!(
            cp.as_char().emoji_status(),
            EmojiStatus::EmojiPresentation
                | EmojiStatus::EmojiPresentationAndModifierBase
                | EmojiStatus::EmojiPresentationAndEmojiComponent
        )
    }
}

impl<T: EmojiTable + ?Sized> EmojiTable for &T {
    fn contains(&self, cp: Codepoint) -> bool {
        (**self).contains(cp)
    }
}

impl EmojiTable for BTreeSet<Codepoint> {
    fn contains(&self, cp: Codepoint) -> bool {
        BTreeSet::contains(self, &cp)
    }
}

impl<S: BuildHasher> EmojiTable for HashSet<Codepoint, S> {
    fn contains(&self, cp: Codepoint) -> bool {
        HashSet::contains(self, &cp)
    }
}

/// Linear scan; meant for small synthetic tables.
impl EmojiTable for [Codepoint] {
    fn contains(&self, cp: Codepoint) -> bool {
        <[Codepoint]>::contains(self, &cp)
    }
}

impl<const N: usize> EmojiTable for [Codepoint; N] {
    fn contains(&self, cp: Codepoint) -> bool {
        self.as_slice().contains(&cp)
    }
}
