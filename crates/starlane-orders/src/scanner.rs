//! Locating the production block inside an order script.
//!
//! The script may contain `MESSAGE` blocks -- free text relayed to other
//! players -- and that text can legally contain anything, including lines
//! that look exactly like order-section markers. The scanner therefore
//! runs a two-state machine: while inside a message it consumes tokens
//! without interpreting them, so a quoted `START PRODUCTION` can never be
//! mistaken for a real block boundary.

use crate::reader::{OrderReader, Token};
use std::io::BufRead;

/// Result of a scan: either the reader is positioned on the first line of
/// the production block, or the script has no such block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Found,
    NotFound,
}

/// Advance `reader` to the first line after a `START PRO...` section
/// marker, skipping message blocks along the way.
///
/// Only the first production block is ever located; a second one in the
/// same script is unreachable by design. An unterminated message block is
/// a warning, not a failure: the stream simply ends and the scan reports
/// `NotFound`.
pub fn scan_production_block<R: BufRead>(
    reader: &mut OrderReader<R>,
    script_name: &str,
) -> ScanOutcome {
    loop {
        match reader.next_token() {
            Some(Token::Message) => {
                if !skip_message_block(reader) {
                    log::warn!("{script_name}: unterminated MESSAGE block");
                }
            }
            Some(Token::Start) => {
                if is_production_section(reader.start_rest()) {
                    return ScanOutcome::Found;
                }
            }
            Some(Token::BlockEnd) | Some(Token::Other) => {}
            None => return ScanOutcome::NotFound,
        }
    }
}

/// Consume tokens up to and including the message terminator. Returns
/// `false` if the stream ended first.
fn skip_message_block<R: BufRead>(reader: &mut OrderReader<R>) -> bool {
    loop {
        match reader.next_token() {
            Some(Token::BlockEnd) => return true,
            Some(_) => {}
            None => return false,
        }
    }
}

/// The section marker test: the first three characters after `START`,
/// case-normalized, must read `PRO`.
fn is_production_section(rest: &str) -> bool {
    let prefix: String = rest.chars().take(3).collect();
    prefix.eq_ignore_ascii_case("PRO")
}
