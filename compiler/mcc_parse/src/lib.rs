//! Parser support for mcc.
//!
//! A [`Session`] lexes a buffer once and owns the resulting token list.
//! Parsers walk it through a [`Cursor`], which offers two kinds of checks:
//!
//! - `consume` / `consume_ident`: try to match, report success, never fail.
//! - `expect` / `expect_number`: require a match, or return a [`ParseError`]
//!   anchored at the current token.
//!
//! The list is read-only after lexing, so any number of cursors may walk it
//! independently.

mod cursor;
mod error;
mod locals;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use locals::{LocalVar, Locals};

use mcc_ir::TokenList;
use mcc_lexer::{LexError, LexerConfig};

/// A lexed source buffer, ready to be parsed.
///
/// Owns the tokens and borrows the source they point into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session<'src> {
    source: &'src str,
    tokens: TokenList,
}

impl<'src> Session<'src> {
    /// Lex `source` with the default configuration.
    pub fn new(source: &'src str) -> Result<Self, LexError> {
        Self::with_config(source, &LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: &LexerConfig) -> Result<Self, LexError> {
        let tokens = mcc_lexer::lex_with_config(source, config)?;
        Ok(Session { source, tokens })
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// A fresh cursor positioned at the first token.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.tokens, self.source)
    }
}
