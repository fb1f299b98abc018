//! `jumbomoji` - decide whether a message is "just emoji"
//!
//! Chat UIs commonly draw messages made only of emoji at a larger size. A
//! single drawn emoji can be several codepoints (ZWJ sequences, skin tone
//! modifiers, VS16 presentation selectors), so this crate scans the decoded
//! codepoints and counts drawn symbols instead of testing each codepoint
//! against a table.
//!
//! ```
//! use jumbomoji::{classify, is_emoji_with_max, Verdict};
//!
//! assert!(is_emoji_with_max("👍\u{1F3FD}", 1));
//! assert_eq!(classify("😀 🎉", 3), Verdict::Emoji { symbols: 2 });
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow unicode::UnicodeEmojiTable etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod classify;
pub mod codepoint;
pub mod error;
pub mod event;
pub mod sentinel;
pub mod unicode;

// Re-export core types at crate root
pub use classify::{
    Classifier, Rejection, UNLIMITED, Verdict, WhitespacePolicy, classify, is_emoji,
    is_emoji_with_max,
};
pub use codepoint::Codepoint;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use sentinel::SkinTone;
pub use unicode::{EmojiTable, UnicodeEmojiTable, codepoints};
