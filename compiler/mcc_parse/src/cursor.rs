//! Token cursor for walking a lexed token list.
//!
//! The cursor never moves past the trailing `Eof` token, so `current()` is
//! always valid.

use mcc_ir::{Token, TokenKind, TokenList};
use tracing::trace;

use crate::ParseError;

/// Position in a token list, plus the source its spans point into.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `tokens`.
    ///
    /// `tokens` must be a terminated list lexed from `source`.
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        debug_assert!(tokens.is_terminated(), "token list must end in Eof");
        Cursor {
            tokens,
            source,
            pos: 0,
        }
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current (first unconsumed) token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// Source text of `token`.
    pub fn text(&self, token: &Token) -> &'a str {
        token.text(self.source)
    }

    /// True if the current token is the reserved word or punctuator `op`.
    fn check(&self, op: &str) -> bool {
        let tok = self.current();
        tok.kind == TokenKind::Reserved && self.text(tok) == op
    }

    fn advance(&mut self) -> &'a Token {
        let tok = self.current();
        if tok.kind != TokenKind::Eof {
            self.pos += 1;
        }
        trace!(pos = self.pos, token = ?tok, "advance");
        tok
    }

    /// Consume the current token if it is `op`.
    ///
    /// Returns whether it matched; the cursor does not move otherwise.
    pub fn consume(&mut self, op: &str) -> bool {
        if self.check(op) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is an identifier.
    pub fn consume_ident(&mut self) -> Option<&'a Token> {
        if self.current().kind == TokenKind::Ident {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume `op`, or fail with an error at the current token.
    pub fn expect(&mut self, op: &str) -> Result<(), ParseError> {
        if self.check(op) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::expected_token(self.current().span, op))
        }
    }

    /// Consume an integer literal and return its value, or fail with an
    /// error at the current token.
    pub fn expect_number(&mut self) -> Result<i64, ParseError> {
        match self.current().value() {
            Some(value) => {
                self.advance();
                Ok(value)
            }
            None => Err(ParseError::expected_number(self.current().span)),
        }
    }
}
