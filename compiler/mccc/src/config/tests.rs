use pretty_assertions::assert_eq;

use super::*;

fn parse(args: &[&str]) -> Result<DriverConfig, UsageError> {
    DriverConfig::from_args(args)
}

fn lex_command(program: &str) -> Command {
    Command::Lex {
        program: program.to_owned(),
    }
}

#[test]
fn bare_program_lexes() {
    let config = parse(&["1 + 2"]).unwrap();
    assert_eq!(config.command, lex_command("1 + 2"));
    assert_eq!(config.lexer, LexerConfig::default());
}

#[test]
fn lex_subcommand() {
    assert_eq!(parse(&["lex", "a=1;"]).unwrap().command, lex_command("a=1;"));
}

#[test]
fn lex_subcommand_allows_reserved_program_text() {
    assert_eq!(parse(&["lex", "help"]).unwrap().command, lex_command("help"));
}

#[test]
fn negative_looking_program_is_positional() {
    assert_eq!(parse(&["-1"]).unwrap().command, lex_command("-1"));
}

#[test]
fn keyword_boundary_flag() {
    let config = parse(&["--keyword-boundary=prefix", "returns"]).unwrap();
    assert_eq!(config.lexer.keyword_boundary, KeywordBoundary::Prefix);

    let config = parse(&["lex", "x", "--keyword-boundary=strict"]).unwrap();
    assert_eq!(config.lexer.keyword_boundary, KeywordBoundary::Strict);
}

#[test]
fn explain_and_help() {
    assert_eq!(
        parse(&["explain", "E0001"]).unwrap().command,
        Command::Explain {
            code: "E0001".to_owned()
        }
    );
    assert_eq!(parse(&["help"]).unwrap().command, Command::Help);
    assert_eq!(parse(&["x", "--help"]).unwrap().command, Command::Help);
}

// === Usage errors ===

#[test]
fn missing_arguments() {
    assert_eq!(parse(&[]), Err(UsageError::MissingProgram));
    assert_eq!(parse(&["lex"]), Err(UsageError::MissingProgram));
    assert_eq!(parse(&["explain"]), Err(UsageError::MissingCode));
}

#[test]
fn too_many_arguments() {
    assert_eq!(
        parse(&["1", "2"]),
        Err(UsageError::UnexpectedArgument("2".to_owned()))
    );
    assert_eq!(
        parse(&["lex", "1", "2"]),
        Err(UsageError::UnexpectedArgument("2".to_owned()))
    );
}

#[test]
fn bad_options() {
    assert_eq!(
        parse(&["--verbose", "1"]),
        Err(UsageError::UnknownOption("--verbose".to_owned()))
    );
    assert_eq!(
        parse(&["--keyword-boundary=loose", "1"]),
        Err(UsageError::InvalidKeywordBoundary("loose".to_owned()))
    );
}
