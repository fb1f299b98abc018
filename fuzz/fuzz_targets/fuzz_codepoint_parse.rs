//! Fuzz target for codepoint notation parsing.
//!
//! Tests that `Codepoint::from_str` handles arbitrary strings without
//! panicking and that accepted values format back to an equal codepoint.

#![no_main]

use jumbomoji::Codepoint;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    if let Ok(cp) = data.parse::<Codepoint>() {
        let formatted = cp.to_string();
        assert_eq!(formatted.parse::<Codepoint>().ok(), Some(cp));
    }

    // Also try with a U+ prefix if not already present
    if !data.starts_with("U+") {
        let _ = format!("U+{data}").parse::<Codepoint>();
    }
});
