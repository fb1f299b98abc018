//! Unicode utilities: codepoint decoding and emoji membership.

mod decode;
mod table;

pub use decode::{CodepointIterator, DecodedCodepoint, codepoint_count, codepoints};
pub use table::{EmojiTable, UnicodeEmojiTable};
