//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner decides token boundaries only. It does not parse numeric
//! values or report errors; those belong to the cooking layer.
//!
//! # Dispatch order
//!
//! Each step is tried only when the previous ones fail:
//!
//! 1. whitespace
//! 2. reserved word (subject to [`KeywordBoundary`])
//! 3. identifier
//! 4. two-byte punctuator (`==`, `!=`, `<=`, `>=`)
//! 5. single-byte ASCII punctuation
//! 6. decimal digits
//! 7. anything else is [`RawTag::Invalid`]
//!
//! Step 4 must precede step 5 so `==` is never split into two `=`.

use crate::cursor::{is_space, Cursor};
use crate::keyword::{self, KeywordBoundary};
use crate::tag::{RawTag, RawToken};

/// Punctuators longer than one byte. All are two bytes.
const MULTI_BYTE_PUNCTS: [&[u8; 2]; 4] = [b"==", b"!=", b"<=", b">="];

/// Allocation-free scanner. Produces one token at a time.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    boundary: KeywordBoundary,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>, boundary: KeywordBoundary) -> Self {
        Self { cursor, boundary }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }

        let b = self.cursor.current();
        if is_space(b) {
            self.cursor.eat_whitespace();
            return self.finish(start, RawTag::Whitespace);
        }

        if let Some(len) = keyword::match_keyword(&self.cursor, self.boundary) {
            self.cursor.advance_n(len);
            return self.finish(start, RawTag::Keyword);
        }

        if b.is_ascii_alphabetic() || b == b'_' {
            self.cursor.advance();
            self.cursor.eat_while(is_ident_continue);
            return self.finish(start, RawTag::Ident);
        }

        if MULTI_BYTE_PUNCTS.iter().any(|p| self.cursor.starts_with(*p)) {
            self.cursor.advance_n(2);
            return self.finish(start, RawTag::Punct);
        }

        if b.is_ascii_punctuation() {
            self.cursor.advance();
            return self.finish(start, RawTag::Punct);
        }

        if b.is_ascii_digit() {
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.finish(start, RawTag::Number);
        }

        // Control bytes, interior NUL, and non-ASCII characters.
        self.cursor.advance_char();
        self.finish(start, RawTag::Invalid)
    }

    #[inline]
    fn finish(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// Returns `true` if `b` may continue an identifier: `[A-Za-z0-9_]`.
///
/// The sentinel byte maps to `false`, so loops stop at EOF.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Convenience function: scan a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`.
pub fn tokenize(source: &str, boundary: KeywordBoundary) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    let scanner = RawScanner::new(buf.cursor(), boundary);
    scanner.collect()
}
