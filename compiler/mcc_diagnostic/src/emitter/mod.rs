//! Diagnostic emitters.
//!
//! Emitters render [`Diagnostic`] values against the source buffer they
//! refer to. The terminal emitter is the only output format.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}
