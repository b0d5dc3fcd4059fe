//! Lexer for mcc.
//!
//! Turns a source buffer into a [`TokenList`] in one eager pass:
//!
//! ```text
//! source → RawScanner (mcc_lexer_core) → TokenCooker → TokenList
//! ```
//!
//! The list always ends in exactly one `Eof` token. Lexing stops at the
//! first character that starts no token and returns a [`LexError`]; no
//! partial token list is ever produced.
//!
//! # Tracing
//!
//! - `RUST_LOG=mcc_lexer=debug`: one summary event per lexed buffer, plus
//!   an event for every integer literal that saturated.

mod config;
mod cooker;
pub mod lex_error;
mod parse_helpers;

pub use config::LexerConfig;
pub use lex_error::{LexError, LexErrorKind};
pub use mcc_lexer_core::KeywordBoundary;

use mcc_ir::{Span, Token, TokenList};
use mcc_lexer_core::{RawTag, RawScanner, SourceBuffer};
use tracing::debug;

use crate::cooker::TokenCooker;

/// Lex `source` with the default configuration.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    lex_with_config(source, &LexerConfig::default())
}

/// Lex `source` into a complete token list.
///
/// Spans in the result are byte offsets into `source`.
pub fn lex_with_config(source: &str, config: &LexerConfig) -> Result<TokenList, LexError> {
    if u32::try_from(source.len()).is_err() {
        return Err(LexError::source_too_large(source.len()));
    }

    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor(), config.keyword_boundary);
    let cooker = TokenCooker::new(buf.as_bytes());
    // Rough guess: one token per four bytes.
    let mut tokens = TokenList::with_capacity(source.len() / 4 + 1);

    loop {
        let start = scanner.pos();
        let raw = scanner.next_token();
        let span = Span::with_len(start, raw.len);
        if let Some(kind) = cooker.cook(raw.tag, span)? {
            tokens.push(Token::new(kind, span));
        }
        if raw.tag == RawTag::Eof {
            break;
        }
    }

    debug!(
        bytes = source.len(),
        tokens = tokens.len(),
        boundary = ?config.keyword_boundary,
        "lexed source"
    );
    Ok(tokens)
}
