//! The [`Diagnostic`] value every phase reports errors through.

use mcc_ir::Span;

use crate::ErrorCode;

/// A fatal compiler diagnostic.
///
/// Two presentations exist: a plain message (`span` is `None`) and a
/// position-anchored message that the emitter renders with the source line
/// and a caret under `span.start`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Where the error occurred, if it has a source position.
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create a new error diagnostic with an empty message and no position.
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: None,
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Anchor the diagnostic at a source location.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn is_anchored(&self) -> bool {
        self.span.is_some()
    }
}
