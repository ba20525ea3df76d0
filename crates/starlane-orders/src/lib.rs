//! Starlane Orders -- order-script lexing, production-block scanning, and
//! the standard production rule engine.
//!
//! Order scripts are free text typed by players and delivered by mail, so
//! everything here is built to tolerate garbage: unrecognized lines lex to
//! [`reader::Token::Other`], message blocks are skipped wholesale by the
//! scanner, and a malformed order inside the production block is reported
//! in the player's log and skipped, never fatal.
//!
//! # Key Types
//!
//! - [`reader::OrderReader`] -- line-oriented lexer over one script; also
//!   serves raw order lines to the engine once the block is located.
//! - [`scanner::scan_production_block`] -- the SCANNING/IN_MESSAGE state
//!   machine that finds the first production block without being fooled by
//!   markers quoted inside message text.
//! - [`engine::StandardEngine`] -- the production rule engine: PRODUCTION,
//!   BUILD, RESEARCH, AMBUSH.
//! - [`engine::StandardResolver`] -- posts drained ambush intercepts to the
//!   transaction log.

pub mod engine;
pub mod reader;
pub mod scanner;
