//! Command-line configuration.
//!
//! Arguments are parsed by hand: one optional subcommand, one positional,
//! and `--flag=value` options anywhere on the line.

use mcc_lexer::{KeywordBoundary, LexerConfig};

pub const USAGE: &str = "\
Usage: mcc [options] <program>
       mcc lex [options] <program>
       mcc explain <CODE>
       mcc help

Tokenize <program> (the source text itself, not a path) and print the tokens.

Options:
  --keyword-boundary=<mode>  strict (default): `returns` is one identifier
                             prefix: `returns` lexes as `return` `s`";

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Tokenize a program given inline.
    Lex { program: String },
    /// Describe an error code.
    Explain { code: String },
    Help,
}

/// Parsed driver options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    pub command: Command,
    pub lexer: LexerConfig,
}

/// Invalid command line.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing program text")]
    MissingProgram,
    #[error("missing error code")]
    MissingCode,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid keyword boundary `{0}`; expected `strict` or `prefix`")]
    InvalidKeywordBoundary(String),
    #[error("unknown error code `{0}`")]
    UnknownErrorCode(String),
}

impl DriverConfig {
    /// Parse arguments, not including the executable name.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, UsageError> {
        let mut lexer = LexerConfig::default();
        let mut positionals = Vec::new();

        for arg in args {
            let arg: &str = arg.as_ref();
            if let Some(mode) = arg.strip_prefix("--keyword-boundary=") {
                let boundary = KeywordBoundary::from_name(mode)
                    .ok_or_else(|| UsageError::InvalidKeywordBoundary(mode.to_owned()))?;
                lexer = lexer.with_keyword_boundary(boundary);
            } else if arg == "--help" || arg == "-h" {
                positionals.insert(0, "help");
            } else if arg.starts_with("--") {
                return Err(UsageError::UnknownOption(arg.to_owned()));
            } else {
                positionals.push(arg);
            }
        }

        let command = match positionals.as_slice() {
            [] => return Err(UsageError::MissingProgram),
            ["help", ..] => Command::Help,
            ["lex"] => return Err(UsageError::MissingProgram),
            ["lex", program] => Command::Lex {
                program: (*program).to_owned(),
            },
            ["explain"] => return Err(UsageError::MissingCode),
            ["explain", code] => Command::Explain {
                code: (*code).to_owned(),
            },
            ["lex" | "explain", _, extra, ..] => {
                return Err(UsageError::UnexpectedArgument((*extra).to_owned()))
            }
            [program] => Command::Lex {
                program: (*program).to_owned(),
            },
            [_, extra, ..] => return Err(UsageError::UnexpectedArgument((*extra).to_owned())),
        };

        Ok(DriverConfig { command, lexer })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
