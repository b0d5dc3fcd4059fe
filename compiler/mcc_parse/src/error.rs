//! Parse errors raised by the cursor's required checks.

use mcc_diagnostic::{Diagnostic, ErrorCode};
use mcc_ir::Span;

/// A failed `expect` or `expect_number`.
///
/// `span` is the span of the token the cursor was on, so the rendered caret
/// lands on that token's first byte.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected \"{expected}\"")]
    ExpectedToken { expected: String },
    #[error("expected a number")]
    ExpectedNumber,
}

impl ParseError {
    #[cold]
    pub fn expected_token(span: Span, expected: &str) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::ExpectedToken {
                expected: expected.to_owned(),
            },
        }
    }

    #[cold]
    pub fn expected_number(span: Span) -> Self {
        ParseError {
            span,
            kind: ParseErrorKind::ExpectedNumber,
        }
    }

    fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::ExpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedNumber => ErrorCode::E1002,
        }
    }

    #[cold]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_span(self.span)
    }
}
