//! Low-level scanner for mcc source text.
//!
//! Splits a source buffer into `(RawTag, len)` pairs. Nothing here allocates
//! per token, parses numbers, or reports errors: an unrecognized byte is a
//! [`RawTag::Invalid`] token, and the cooking layer in `mcc_lexer` decides
//! what that means.
//!
//! ```text
//! &str → SourceBuffer → Cursor → RawScanner → RawToken { tag, len }
//! ```

mod cursor;
mod keyword;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use keyword::{KeywordBoundary, KEYWORDS};
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
