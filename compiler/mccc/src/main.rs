//! mcc command-line entry point.

use mccc::commands::{explain_error, lex_program};
use mccc::config::{Command, DriverConfig, USAGE};
use mccc::reporting::{exit_usage, exit_with};

fn main() {
    mccc::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match DriverConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => exit_usage(&err),
    };

    match &config.command {
        Command::Help => println!("{USAGE}"),
        Command::Explain { code } => match explain_error(code) {
            Ok(text) => println!("{text}"),
            Err(err) => exit_usage(&err),
        },
        Command::Lex { program } => match lex_program(program, &config.lexer) {
            Ok(dump) => print!("{dump}"),
            Err(diag) => exit_with(&diag, program),
        },
    }
}
