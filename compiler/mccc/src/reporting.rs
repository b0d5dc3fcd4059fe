//! Turning failures into process output.
//!
//! Every fatal path in the driver ends here. Library crates only return
//! error values.

use std::io::Write;

use mcc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use mcc_diagnostic::Diagnostic;

use crate::config::{UsageError, USAGE};

/// Render `diagnostic` against `source` exactly as it is written to stderr.
pub fn render(diagnostic: &Diagnostic, source: &str) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), source);
    emitter.emit(diagnostic);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Report a fatal diagnostic on stderr and exit with status 1.
pub fn exit_with(diagnostic: &Diagnostic, source: &str) -> ! {
    tracing::debug!(code = %diagnostic.code, "fatal diagnostic");
    let mut emitter = TerminalEmitter::stderr(source);
    emitter.emit(diagnostic);
    emitter.flush();
    std::process::exit(1)
}

/// Report a command-line error followed by the usage text, then exit with
/// status 1.
pub fn exit_usage(err: &UsageError) -> ! {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "error: {err}");
    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "{USAGE}");
    let _ = stderr.flush();
    std::process::exit(1)
}
