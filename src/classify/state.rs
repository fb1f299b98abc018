//! Per-call scan state.

use super::{Rejection, WhitespacePolicy};
use crate::codepoint::Codepoint;
use crate::sentinel::{
    EMOJI_PRESENTATION_SELECTOR, OBJECT_REPLACEMENT_CHARACTER, ZERO_WIDTH_JOINER, is_skin_tone,
};
use crate::unicode::EmojiTable;
use bitflags::bitflags;

bitflags! {
    /// Pending obligations carried from one codepoint to the next.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ScanFlags: u8 {
        /// Previous symbol was not in the emoji table; only VS16 may follow.
        const AWAITING_SELECTOR = 0x01;
        /// A joiner was seen; the next substantive codepoint joins the
        /// current symbol instead of starting a new one.
        const SKIP_NEXT         = 0x02;
    }
}

/// Whitespace skipped by the scan. Other whitespace is substantive.
#[inline]
#[must_use]
pub const fn is_scan_whitespace(cp: Codepoint) -> bool {
    matches!(cp.as_char(), '\n' | '\r' | '\t' | ' ')
}

/// Scan state for one classification call.
#[derive(Clone, Debug)]
pub struct ScanState {
    limit: usize,
    count: usize,
    flags: ScanFlags,
    /// Codepoints consumed so far, i.e. the index of the next one.
    position: usize,
    /// Base codepoint awaiting VS16 and its index.
    pending_base: Option<(usize, Codepoint)>,
}

impl ScanState {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            count: 0,
            flags: ScanFlags::empty(),
            position: 0,
            pending_base: None,
        }
    }

    /// Symbols counted so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn flags(&self) -> ScanFlags {
        self.flags
    }

    /// Feed one codepoint. Rule order matters; see the numbered comments.
    pub fn step<T: EmojiTable + ?Sized>(
        &mut self,
        cp: Codepoint,
        table: &T,
        whitespace: WhitespacePolicy,
    ) -> Result<(), Rejection> {
        let index = self.position;
        self.position += 1;

        // 1. Whitespace, checked before the pending selector.
        if is_scan_whitespace(cp) {
            if whitespace == WhitespacePolicy::Strict
                && self.flags.contains(ScanFlags::AWAITING_SELECTOR)
            {
                return Err(self.missing_selector());
            }
            return Ok(());
        }

        // 2. Pending selector.
        if self.flags.contains(ScanFlags::AWAITING_SELECTOR) {
            self.flags.remove(ScanFlags::AWAITING_SELECTOR);
            if cp != EMOJI_PRESENTATION_SELECTOR {
                return Err(self.missing_selector());
            }
            self.pending_base = None;
        }

        // 3. Skin tone. Leaves SKIP_NEXT alone.
        if is_skin_tone(cp) {
            return Ok(());
        }

        // 4. Joiner.
        if cp == ZERO_WIDTH_JOINER {
            self.flags.insert(ScanFlags::SKIP_NEXT);
            return Ok(());
        }

        // 5. Presentation selector.
        if cp == EMOJI_PRESENTATION_SELECTOR {
            return Ok(());
        }

        // 6. Blacklisted.
        if cp == OBJECT_REPLACEMENT_CHARACTER {
            return Err(Rejection::ObjectReplacement { index });
        }

        // 7. Substantive codepoint.
        if self.flags.contains(ScanFlags::SKIP_NEXT) {
            self.flags.remove(ScanFlags::SKIP_NEXT);
            return Ok(());
        }

        self.count += 1;
        if self.count > self.limit {
            return Err(Rejection::TooManySymbols {
                limit: self.limit,
                index,
            });
        }

        if !table.contains(cp) {
            self.flags.insert(ScanFlags::AWAITING_SELECTOR);
            self.pending_base = Some((index, cp));
        }
        Ok(())
    }

    /// End of input: returns the symbol count or why the input is rejected.
    pub fn finish(self) -> Result<usize, Rejection> {
        if self.flags.contains(ScanFlags::AWAITING_SELECTOR) {
            return Err(self.missing_selector());
        }
        if self.count > self.limit {
            return Err(Rejection::TooManySymbols {
                limit: self.limit,
                index: self.position,
            });
        }
        Ok(self.count)
    }

    fn missing_selector(&self) -> Rejection {
        match self.pending_base {
            Some((index, base)) => Rejection::MissingSelector { base, index },
            // AWAITING_SELECTOR is only ever set together with pending_base.
            None => Rejection::MissingSelector {
                base: EMOJI_PRESENTATION_SELECTOR,
                index: self.position.saturating_sub(1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::skin_tone;

    const TABLE: [Codepoint; 2] = [Codepoint::from_char('E'), Codepoint::from_char('F')];

    fn cp(c: char) -> Codepoint {
        Codepoint::from_char(c)
    }

    fn feed(state: &mut ScanState, s: &str) -> Result<(), Rejection> {
        for c in s.chars() {
            state.step(cp(c), &TABLE, WhitespacePolicy::Permissive)?;
        }
        Ok(())
    }

    #[test]
    fn test_scan_whitespace_set() {
        for c in ['\n', '\r', '\t', ' '] {
            assert!(is_scan_whitespace(cp(c)));
        }
        // Only the four ASCII separators are skipped
        for c in ['\u{A0}', '\u{2003}', '\u{B}', 'x'] {
            assert!(!is_scan_whitespace(cp(c)));
        }
    }

    #[test]
    fn test_flags_track_obligations() {
        let mut state = ScanState::new(usize::MAX);
        feed(&mut state, "E").unwrap();
        assert_eq!(state.flags(), ScanFlags::empty());

        feed(&mut state, "\u{200D}").unwrap();
        assert_eq!(state.flags(), ScanFlags::SKIP_NEXT);

        // Skin tone and whitespace keep the pending skip
        state
            .step(skin_tone::DARK, &TABLE, WhitespacePolicy::Permissive)
            .unwrap();
        feed(&mut state, " ").unwrap();
        assert_eq!(state.flags(), ScanFlags::SKIP_NEXT);

        feed(&mut state, "F").unwrap();
        assert_eq!(state.flags(), ScanFlags::empty());
        assert_eq!(state.count(), 1);

        feed(&mut state, "x").unwrap();
        assert_eq!(state.flags(), ScanFlags::AWAITING_SELECTOR);
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn test_finish_with_pending_selector() {
        let mut state = ScanState::new(usize::MAX);
        feed(&mut state, "Ex").unwrap();
        assert_eq!(
            state.finish(),
            Err(Rejection::MissingSelector {
                base: cp('x'),
                index: 1
            })
        );
    }

    #[test]
    fn test_limit_enforced_during_scan() {
        let mut state = ScanState::new(1);
        assert_eq!(
            feed(&mut state, "E F"),
            Err(Rejection::TooManySymbols { limit: 1, index: 2 })
        );
    }

    #[test]
    fn test_strict_whitespace_breaks_pairing() {
        let mut state = ScanState::new(usize::MAX);
        state
            .step(cp('x'), &TABLE, WhitespacePolicy::Strict)
            .unwrap();
        assert_eq!(
            state.step(cp(' '), &TABLE, WhitespacePolicy::Strict),
            Err(Rejection::MissingSelector {
                base: cp('x'),
                index: 0
            })
        );
    }
}
