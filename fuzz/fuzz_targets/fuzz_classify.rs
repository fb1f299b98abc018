//! Fuzz target for emoji classification.
//!
//! Classification must be total: any string and limit yields a verdict.

#![no_main]

use jumbomoji::{Classifier, UnicodeEmojiTable, Verdict, WhitespacePolicy, classify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, u8)| {
    let (text, limit) = input;
    let limit = usize::from(limit);

    let permissive = classify(text, limit);
    if let Verdict::Emoji { symbols } = permissive {
        assert!(symbols <= limit);
    }

    // Strict whitespace handling never accepts more than permissive
    let strict = Classifier::new(UnicodeEmojiTable)
        .with_whitespace_policy(WhitespacePolicy::Strict)
        .classify(text, limit);
    if strict.is_emoji() {
        assert!(permissive.is_emoji());
    }
});
