//! Lexer configuration.

use mcc_lexer_core::KeywordBoundary;

/// Options that change how source text is tokenized.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// How a reserved word must end. See [`KeywordBoundary`].
    pub keyword_boundary: KeywordBoundary,
}

impl LexerConfig {
    #[must_use]
    pub fn with_keyword_boundary(mut self, boundary: KeywordBoundary) -> Self {
        self.keyword_boundary = boundary;
        self
    }
}
