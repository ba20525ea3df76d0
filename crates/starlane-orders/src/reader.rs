//! Line-oriented lexing of order scripts.
//!
//! Scripts arrive as player mail: leading headers, signatures, and free
//! text are all expected. Every line lexes to exactly one token based on
//! its first word; anything unrecognized is [`Token::Other`] and ignored
//! by the scanner, which is what makes mail headers harmless.

use starlane_core::production::OrderSource;
use std::io::BufRead;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// One lexed order-script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `START ...` -- opens an order section. The remainder of the line is
    /// held by the reader for inspection via [`OrderReader::start_rest`].
    Start,
    /// `MESSAGE` -- opens a free-text block addressed to another player.
    Message,
    /// `ZZZ` -- terminates a message block or an order section.
    BlockEnd,
    /// Anything else: mail headers, prose, and order lines alike.
    Other,
}

// ---------------------------------------------------------------------------
// OrderReader
// ---------------------------------------------------------------------------

/// Lexer over one player's order script.
///
/// End-of-stream and read errors both surface as `None`; a read error is
/// additionally logged. Callers treat either as "no more script", which
/// turns a truncated file into a not-found or early-terminated block
/// instead of a crash.
pub struct OrderReader<R: BufRead> {
    input: R,
    /// Remainder of the most recent `START` line, keyword stripped.
    start_rest: String,
}

impl<R: BufRead> OrderReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            start_rest: String::new(),
        }
    }

    /// Lex the next line. `None` means the stream is exhausted (or broke;
    /// the distinction is logged, not propagated).
    pub fn next_token(&mut self) -> Option<Token> {
        let line = self.read_line()?;
        let trimmed = line.trim_start();
        let keyword = trimmed
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_ascii_uppercase();
        match keyword.as_str() {
            "START" => {
                self.start_rest = trimmed["START".len()..].trim().to_string();
                Some(Token::Start)
            }
            "MESSAGE" => Some(Token::Message),
            "ZZZ" => Some(Token::BlockEnd),
            _ => Some(Token::Other),
        }
    }

    /// Remainder of the most recent `START` line.
    pub fn start_rest(&self) -> &str {
        &self.start_rest
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                log::warn!("order script read failed: {err}");
                None
            }
        }
    }
}

impl<R: BufRead> OrderSource for OrderReader<R> {
    fn next_line(&mut self) -> Option<String> {
        self.read_line()
    }
}
