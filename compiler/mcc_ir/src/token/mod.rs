//! Token types produced by the lexer.

mod list;

pub use list::TokenList;

use std::fmt;

use super::Span;

/// Classification of a token.
///
/// Reserved words and punctuators share one kind: the parser tells them
/// apart by comparing the token's source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// Keyword or punctuator.
    Reserved,
    /// Identifier.
    Ident,
    /// Decimal integer literal with its parsed value.
    Num(i64),
    /// End-of-input marker.
    Eof,
}

impl TokenKind {
    /// Short human-readable name, used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Reserved => "reserved",
            TokenKind::Ident => "ident",
            TokenKind::Num(_) => "num",
            TokenKind::Eof => "eof",
        }
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Numeric payload of an integer literal, `None` for every other kind.
    #[inline]
    pub fn value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Num(value) => Some(value),
            _ => None,
        }
    }

    /// Length of the token's text in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    /// True only for the zero-length end-of-input marker.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The token's text within `source`.
    ///
    /// `source` must be the buffer this token was lexed from.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.span.to_range()]
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

#[cfg(test)]
mod tests;
