//! Token cooking layer.
//!
//! Maps each raw `(RawTag, len)` pair to the parser's `TokenKind`:
//! - **Whitespace**: dropped
//! - **Keywords/punctuators**: `Reserved` (the parser compares text)
//! - **Identifiers**: `Ident`
//! - **Numbers**: `Num` with the parsed value
//! - **Invalid**: `LexError::InvalidToken`

use mcc_ir::{Span, TokenKind};
use mcc_lexer_core::RawTag;
use tracing::debug;

use crate::lex_error::LexError;
use crate::parse_helpers::parse_decimal_saturating;

pub(crate) struct TokenCooker<'src> {
    source: &'src [u8],
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self { source }
    }

    /// Cook one raw token. `Ok(None)` means the token is trivia.
    pub(crate) fn cook(&self, tag: RawTag, span: Span) -> Result<Option<TokenKind>, LexError> {
        let kind = match tag {
            RawTag::Whitespace => return Ok(None),
            RawTag::Keyword | RawTag::Punct => TokenKind::Reserved,
            RawTag::Ident => TokenKind::Ident,
            RawTag::Number => TokenKind::Num(self.cook_number(span)),
            RawTag::Eof => TokenKind::Eof,
            RawTag::Invalid => return Err(LexError::invalid_token(span, self.char_at(span))),
        };
        Ok(Some(kind))
    }

    fn cook_number(&self, span: Span) -> i64 {
        let digits = &self.source[span.to_range()];
        let (value, saturated) = parse_decimal_saturating(digits);
        if saturated {
            debug!(%span, "integer literal exceeds i64::MAX, saturating");
        }
        value
    }

    /// The character an invalid token starts with.
    fn char_at(&self, span: Span) -> char {
        std::str::from_utf8(&self.source[span.to_range()])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests;
