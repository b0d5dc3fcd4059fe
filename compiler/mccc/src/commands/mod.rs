//! Driver commands.
//!
//! Each command returns its output as a string so it can be tested without
//! spawning the binary; `main` decides where it goes.

mod explain;
mod lex;

pub use explain::explain_error;
pub use lex::lex_program;
