//! Raw token tags.

/// Category of a raw token. The cooking layer maps these to `TokenKind`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawTag {
    /// Run of whitespace bytes. Never reaches the parser.
    Whitespace,
    /// One of the reserved words in [`KEYWORDS`](crate::KEYWORDS).
    Keyword,
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    Ident,
    /// Punctuator: a two-byte comparison or any single ASCII punctuation byte.
    Punct,
    /// Run of decimal digits.
    Number,
    /// A character that starts no token. Covers one UTF-8 character.
    Invalid,
    /// End of source. Always zero-length.
    Eof,
}

/// A raw token: a tag plus its byte length.
///
/// Position is implicit: the scanner emits tokens back to back, so a token's
/// start is the sum of the lengths before it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
