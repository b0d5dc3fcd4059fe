//! Diagnostic reporting for mcc.
//!
//! Lexing and parsing never print or exit. They return error values that
//! convert into a [`Diagnostic`]; the driver hands that to an emitter and
//! decides how the process ends.
//!
//! The terminal emitter reproduces the classic caret format byte for byte:
//!
//! ```text
//! 1 + foo @ 2
//!         ^ invalid token
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
