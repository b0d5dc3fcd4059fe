//! Lexer error types.
//!
//! Every lexer error is fatal: lexing stops at the first one. The error
//! carries WHERE (`span`) and WHAT (`kind`); rendering happens in
//! `mcc_diagnostic` via [`LexError::to_diagnostic`].

use mcc_diagnostic::{Diagnostic, ErrorCode};
use mcc_ir::Span;

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    /// Where the error occurred. `Span::DUMMY` when there is no position.
    pub span: Span,
    pub kind: LexErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("invalid token")]
    InvalidToken { found: char },
    /// The buffer is too large for 32-bit spans.
    #[error("source is {len} bytes; at most {} bytes are supported", u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    #[cold]
    pub fn invalid_token(span: Span, found: char) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidToken { found },
        }
    }

    #[cold]
    pub fn source_too_large(len: usize) -> Self {
        LexError {
            span: Span::DUMMY,
            kind: LexErrorKind::SourceTooLarge { len },
        }
    }

    /// Render this error as a diagnostic.
    ///
    /// Invalid tokens are anchored at the offending character; an oversized
    /// source has no meaningful position and renders as a plain message.
    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self.kind {
            LexErrorKind::InvalidToken { .. } => Diagnostic::error(ErrorCode::E0001)
                .with_message(self.kind.to_string())
                .with_span(self.span),
            LexErrorKind::SourceTooLarge { .. } => {
                Diagnostic::error(ErrorCode::E0002).with_message(self.kind.to_string())
            }
        }
    }
}
