//! `jumbomoji` — classify text as "just emoji" from the command line
//!
//! # Usage
//!
//! ```bash
//! jumbomoji '😀 👍'
//! jumbomoji --max 1 --explain '👨‍👩‍👧' 'hi 😀'
//! printf '😀\nhello\n' | jumbomoji
//! ```
//!
//! Exit status is 0 when every input is emoji, 1 when any is not, and 2 on
//! usage errors.

use jumbomoji::{
    Classifier, LogLevel, UNLIMITED, UnicodeEmojiTable, Verdict, WhitespacePolicy, codepoints,
    set_log_callback,
};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "jumbomoji - decide whether text is only emoji

USAGE:
    jumbomoji [OPTIONS] [TEXT]...

Each TEXT is classified separately. Without TEXT, each line of stdin is
classified.

OPTIONS:
    -h, --help              Print this help message and exit
    -m, --max <N>           Maximum number of drawn emoji (default: unlimited)
    --strict-whitespace     Whitespace between a symbol and its U+FE0F
                            selector rejects the input
    -e, --explain           Print symbol counts and rejection reasons
    --codepoints            Also print each input's codepoints
    -v, --verbose           Log classifier diagnostics to stderr

EXAMPLES:
    jumbomoji '😀 👍'                  # true
    jumbomoji --max 1 '😀 👍'          # false
    jumbomoji --explain 'hi'           # not emoji: U+0068 at index 0 ...
";

/// CLI configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_symbols: usize,
    pub whitespace: WhitespacePolicy,
    pub explain: bool,
    pub show_codepoints: bool,
    pub verbose: bool,
    pub inputs: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_symbols: UNLIMITED,
            whitespace: WhitespacePolicy::Permissive,
            explain: false,
            show_codepoints: false,
            verbose: false,
            inputs: Vec::new(),
        }
    }
}

/// Result of CLI parsing.
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Parse error with message.
    Error(String),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        let mut positional_only = false;

        // Skip program name
        args.next();

        while let Some(arg) = args.next() {
            let arg_str = arg.to_string_lossy().to_string();

            if positional_only {
                config.inputs.push(arg_str);
                continue;
            }

            match arg_str.as_str() {
                "-h" | "--help" => return ParseResult::Help,

                "-m" | "--max" => {
                    let value = match args.next() {
                        Some(v) => v.to_string_lossy().to_string(),
                        None => return ParseResult::Error("--max requires a value".to_string()),
                    };
                    match value.parse::<usize>() {
                        Ok(n) => config.max_symbols = n,
                        Err(_) => {
                            return ParseResult::Error(format!(
                                "Invalid --max value: {value} (must be a non-negative integer)"
                            ));
                        }
                    }
                }

                "--strict-whitespace" => config.whitespace = WhitespacePolicy::Strict,
                "-e" | "--explain" => config.explain = true,
                "--codepoints" => config.show_codepoints = true,
                "-v" | "--verbose" => config.verbose = true,
                "--" => positional_only = true,

                other => {
                    if other.starts_with('-') && other.len() > 1 {
                        return ParseResult::Error(format!("Unknown option: {other}"));
                    }
                    config.inputs.push(arg_str);
                }
            }
        }

        ParseResult::Config(config)
    }

    /// Build the classifier this configuration describes.
    #[must_use]
    pub fn classifier(&self) -> Classifier {
        Classifier::new(UnicodeEmojiTable).with_whitespace_policy(self.whitespace)
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Write the report line(s) for one input.
fn report<W: Write>(config: &Config, verdict: &Verdict, text: &str, out: &mut W) -> io::Result<()> {
    if config.explain {
        writeln!(out, "{verdict}")?;
    } else {
        writeln!(out, "{}", verdict.is_emoji())?;
    }
    if config.show_codepoints {
        let listed: Vec<String> = codepoints(text)
            .map(|decoded| decoded.codepoint.to_string())
            .collect();
        writeln!(out, "  {}", listed.join(" "))?;
    }
    Ok(())
}

/// Classify every input (arguments, else stdin lines). Returns whether all
/// inputs were emoji.
pub fn run<R: BufRead, W: Write>(config: &Config, stdin: R, out: &mut W) -> jumbomoji::Result<bool> {
    let classifier = config.classifier();
    let mut all_emoji = true;

    let mut classify_one = |text: &str, out: &mut W| -> io::Result<()> {
        let verdict = classifier.classify(text, config.max_symbols);
        all_emoji &= verdict.is_emoji();
        report(config, &verdict, text, out)
    };

    if config.inputs.is_empty() {
        for line in stdin.lines() {
            classify_one(&line?, &mut *out)?;
        }
    } else {
        for text in &config.inputs {
            classify_one(text, &mut *out)?;
        }
    }

    out.flush()?;
    Ok(all_emoji)
}

// ============================================================================
// Entry Point
// ============================================================================

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run with --help for usage information.");
            return ExitCode::from(2);
        }
    };

    if config.verbose {
        set_log_callback(|level, message| {
            let tag = match level {
                LogLevel::Debug => "debug",
                LogLevel::Info => "info",
                LogLevel::Warn => "warn",
                LogLevel::Error => "error",
            };
            eprintln!("[{tag}] {message}");
        });
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match run(&config, stdin.lock(), &mut stdout) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(2)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
