//! The `lex` command: tokenize a program and dump the token list.

use std::fmt::Write;

use mcc_diagnostic::Diagnostic;
use mcc_ir::TokenKind;
use mcc_lexer::LexerConfig;
use mcc_parse::Session;

/// Tokenize `program` and format one line per token.
///
/// ```text
/// Tokens (4):
///   num      "12"   0..2 = 12
///   reserved "+"    2..3
///   ...
/// ```
pub fn lex_program(program: &str, config: &LexerConfig) -> Result<String, Diagnostic> {
    let session = Session::with_config(program, config).map_err(|err| err.to_diagnostic())?;
    let tokens = session.tokens();

    let mut out = String::new();
    let _ = writeln!(out, "Tokens ({}):", tokens.len());
    for tok in tokens {
        let text = format!("{:?}", tok.text(program));
        let _ = write!(
            out,
            "  {:<8} {:<6} {}",
            tok.kind.name(),
            text,
            tok.span
        );
        if let TokenKind::Num(value) = tok.kind {
            let _ = write!(out, " = {value}");
        }
        out.push('\n');
    }
    Ok(out)
}
