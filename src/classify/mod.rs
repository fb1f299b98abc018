//! "Is this message just emoji?" classification.
//!
//! A drawn emoji can span several codepoints: ZWJ sequences, skin tone
//! modifiers, text-default codepoints followed by VS16. The classifier walks
//! the codepoints once, left to right, with a small [`ScanState`], counting
//! drawn symbols and rejecting anything that cannot be part of an emoji.
//!
//! Whitespace (`\n`, `\r`, `\t`, space) is ignored, so empty and
//! all-whitespace input is accepted with zero symbols. Callers that want to
//! reject empty messages must check that themselves.
//!
//! # Examples
//!
//! ```
//! use jumbomoji::{is_emoji, is_emoji_with_max};
//!
//! assert!(is_emoji("😀 👍"));
//! assert!(is_emoji("\u{2764}\u{FE0F}"));
//! assert!(!is_emoji("hi 😀"));
//!
//! // Family ZWJ sequence draws a single symbol
//! assert!(is_emoji_with_max("👨\u{200D}👩\u{200D}👧", 1));
//! assert!(!is_emoji_with_max("😀😀😀", 2));
//! ```

mod state;

pub use state::{ScanFlags, ScanState, is_scan_whitespace};

use crate::codepoint::Codepoint;
use crate::event::{LogLevel, emit_log, log_enabled};
use crate::unicode::{EmojiTable, UnicodeEmojiTable, codepoints};
use std::fmt;

/// Symbol limit meaning "no limit".
pub const UNLIMITED: usize = usize::MAX;

/// How whitespace between a non-emoji base and its VS16 is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Whitespace is skipped before anything else, so `"\u{2764} \u{FE0F}"`
    /// still pairs the heart with its selector.
    #[default]
    Permissive,
    /// Whitespace while a selector is pending rejects the input.
    Strict,
}

/// Why an input is not "just emoji".
///
/// `index` is the 0-based position in the codepoint sequence (whitespace
/// included), not a byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// U+FFFC appeared.
    ObjectReplacement { index: usize },
    /// `base` is not an emoji on its own and was not followed by VS16.
    MissingSelector { base: Codepoint, index: usize },
    /// More than `limit` drawn symbols.
    TooManySymbols { limit: usize, index: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectReplacement { index } => {
                write!(f, "object replacement character at index {index}")
            }
            Self::MissingSelector { base, index } => {
                write!(f, "{base} at index {index} is not emoji without U+FE0F")
            }
            Self::TooManySymbols { limit, index } => {
                write!(f, "more than {limit} symbols (exceeded at index {index})")
            }
        }
    }
}

/// Result of classifying one input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Only emoji, drawing `symbols` glyphs.
    Emoji { symbols: usize },
    Rejected(Rejection),
}

impl Verdict {
    #[must_use]
    pub const fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji { .. })
    }

    /// Drawn symbol count of an accepted input.
    #[must_use]
    pub const fn symbols(&self) -> Option<usize> {
        match self {
            Self::Emoji { symbols } => Some(*symbols),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Emoji { .. } => None,
            Self::Rejected(rejection) => Some(*rejection),
        }
    }
}

impl From<Result<usize, Rejection>> for Verdict {
    fn from(result: Result<usize, Rejection>) -> Self {
        match result {
            Ok(symbols) => Self::Emoji { symbols },
            Err(rejection) => Self::Rejected(rejection),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emoji { symbols: 1 } => write!(f, "emoji (1 symbol)"),
            Self::Emoji { symbols } => write!(f, "emoji ({symbols} symbols)"),
            Self::Rejected(rejection) => write!(f, "not emoji: {rejection}"),
        }
    }
}

/// Emoji classifier over an injectable emoji table.
///
/// The classifier holds no per-call state and can be shared freely between
/// threads when its table can.
#[derive(Clone, Debug, Default)]
pub struct Classifier<T = UnicodeEmojiTable> {
    table: T,
    whitespace: WhitespacePolicy,
}

impl<T: EmojiTable> Classifier<T> {
    /// Create a classifier with the permissive whitespace policy.
    #[must_use]
    pub const fn new(table: T) -> Self {
        Self {
            table,
            whitespace: WhitespacePolicy::Permissive,
        }
    }

    #[must_use]
    pub fn with_whitespace_policy(mut self, policy: WhitespacePolicy) -> Self {
        self.whitespace = policy;
        self
    }

    #[must_use]
    pub fn whitespace_policy(&self) -> WhitespacePolicy {
        self.whitespace
    }

    #[must_use]
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Classify a string, allowing at most `max_symbols` drawn symbols.
    #[must_use]
    pub fn classify(&self, text: &str, max_symbols: usize) -> Verdict {
        self.classify_codepoints(codepoints(text).map(|d| d.codepoint), max_symbols)
    }

    /// Classify an already decoded codepoint sequence.
    #[must_use]
    pub fn classify_codepoints<I>(&self, sequence: I, max_symbols: usize) -> Verdict
    where
        I: IntoIterator<Item = Codepoint>,
    {
        let verdict = Verdict::from(self.scan(sequence, max_symbols));
        if let Verdict::Rejected(rejection) = verdict {
            if log_enabled() {
                emit_log(LogLevel::Debug, &format!("not emoji: {rejection}"));
            }
        }
        verdict
    }

    /// Whether `text` is only emoji with at most `max_symbols` symbols.
    #[must_use]
    pub fn is_emoji(&self, text: &str, max_symbols: usize) -> bool {
        self.classify(text, max_symbols).is_emoji()
    }

    fn scan<I>(&self, sequence: I, max_symbols: usize) -> Result<usize, Rejection>
    where
        I: IntoIterator<Item = Codepoint>,
    {
        let mut state = ScanState::new(max_symbols);
        for cp in sequence {
            state.step(cp, &self.table, self.whitespace)?;
        }
        state.finish()
    }
}

static DEFAULT_CLASSIFIER: Classifier = Classifier::new(UnicodeEmojiTable);

/// Whether `text` consists only of emoji (and whitespace), any number of them.
#[must_use]
pub fn is_emoji(text: &str) -> bool {
    DEFAULT_CLASSIFIER.is_emoji(text, UNLIMITED)
}

/// Whether `text` consists only of emoji drawing at most `max_symbols` glyphs.
#[must_use]
pub fn is_emoji_with_max(text: &str, max_symbols: usize) -> bool {
    DEFAULT_CLASSIFIER.is_emoji(text, max_symbols)
}

/// Classify `text` with the default Unicode table.
#[must_use]
pub fn classify(text: &str, max_symbols: usize) -> Verdict {
    DEFAULT_CLASSIFIER.classify(text, max_symbols)
}
