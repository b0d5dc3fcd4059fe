//! Ordered token sequence.

use std::ops::Index;

use super::{Token, TokenKind};

/// The complete token stream for one source buffer.
///
/// Replaces a linked token chain with a contiguous `Vec<Token>`. Only the
/// lexer pushes tokens; everything downstream reads through shared
/// references, so a finished list is immutable in practice.
///
/// # Invariant
///
/// A list returned by the lexer is non-empty and its only `Eof` token is
/// the last one. [`is_terminated`](Self::is_terminated) checks this.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Create from a Vec of tokens.
    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Check the end-marker invariant: non-empty, exactly one `Eof`, last.
    pub fn is_terminated(&self) -> bool {
        match self.tokens.split_last() {
            Some((last, rest)) => {
                last.kind == TokenKind::Eof && rest.iter().all(|t| t.kind != TokenKind::Eof)
            }
            None => false,
        }
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
