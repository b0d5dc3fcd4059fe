use mcc_ir::Span;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(source: &str, diagnostic: &Diagnostic) -> String {
    let mut emitter = TerminalEmitter::new(Vec::new(), source);
    emitter.emit(diagnostic);
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn anchored_diagnostic_prints_line_then_caret() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("invalid token")
        .with_span(Span::new(4, 5));
    assert_eq!(render("1 + $ 2", &diag), "1 + $ 2\n    ^ invalid token\n");
}

#[test]
fn caret_at_column_zero() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("expected \"(\"")
        .with_span(Span::new(0, 1));
    assert_eq!(render(")", &diag), ")\n^ expected \"(\"\n");
}

#[test]
fn caret_at_end_of_input() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_message("expected a number")
        .with_span(Span::point(3));
    assert_eq!(render("1 +", &diag), "1 +\n   ^ expected a number\n");
}

#[test]
fn plain_diagnostic_prints_message_only() {
    let diag = Diagnostic::error(ErrorCode::E0002).with_message("source too large");
    assert_eq!(render("ignored", &diag), "source too large\n");
}

#[test]
fn multi_line_source_shows_offending_line() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("invalid token")
        .with_span(Span::new(9, 10));
    assert_eq!(render("a = 1;\nb #;", &diag), "b #;\n  ^ invalid token\n");
}

#[test]
fn emit_all_renders_in_order() {
    let first = Diagnostic::error(ErrorCode::E0002).with_message("one");
    let second = Diagnostic::error(ErrorCode::E0002).with_message("two");
    let mut emitter = TerminalEmitter::new(Vec::new(), "");
    emitter.emit_all(&[first, second]);
    assert_eq!(String::from_utf8_lossy(&emitter.into_inner()), "one\ntwo\n");
}
