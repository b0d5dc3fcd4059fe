//! Shared data model for the mcc compiler.
//!
//! Tokens produced by `mcc_lexer` and the syntax tree consumed by later
//! phases both live here, so every phase agrees on one representation.
//!
//! Tokens never own text. A [`Token`] carries a [`Span`] into the caller's
//! source buffer, and the buffer must outlive every token list built from it.

pub mod ast;
mod span;
mod token;

pub use ast::{Node, NodeKind, Program};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
