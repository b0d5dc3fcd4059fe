//! Terminal Emitter
//!
//! Plain-text caret output. The layout is a compatibility contract that
//! test scripts scrape, so it carries no color, code, or header:
//!
//! ```text
//! <source line>
//! <spaces to the column>^ <message>
//! ```
//!
//! A diagnostic without a span prints only `<message>`.

use std::io::{self, Write};

use crate::span_utils;
use crate::Diagnostic;

use super::DiagnosticEmitter;

pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    source: &'src str,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create an emitter rendering against `source`.
    pub fn new(writer: W, source: &'src str) -> Self {
        TerminalEmitter { writer, source }
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<'src> TerminalEmitter<'src, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(source: &'src str) -> Self {
        TerminalEmitter {
            writer: io::stderr(),
            source,
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if let Some(span) = diagnostic.span {
            let line = span_utils::line_at(self.source, span.start);
            let col = span_utils::column(self.source, span.start);
            let _ = writeln!(self.writer, "{line}");
            let _ = writeln!(self.writer, "{:col$}^ {}", "", diagnostic.message);
        } else {
            let _ = writeln!(self.writer, "{}", diagnostic.message);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

#[cfg(test)]
mod tests;
