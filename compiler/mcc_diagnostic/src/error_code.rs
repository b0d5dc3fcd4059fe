//! Error codes for compiler diagnostics.
//!
//! Format: E#### where the first digit names the phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Invalid token
    E0001,
    /// Source too large
    E0002,
    /// Expected a specific token
    E1001,
    /// Expected a number
    E1002,
}

impl ErrorCode {
    /// Every known code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
        }
    }

    /// Long-form explanation shown by `mcc explain`.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "invalid token: the scanner found a character that does not start \
                 any token. Tokens are keywords, identifiers (letters, digits and \
                 `_`, not starting with a digit), decimal integers, and ASCII \
                 punctuation."
            }
            ErrorCode::E0002 => {
                "source too large: token spans are 32-bit byte offsets, so a \
                 source buffer may hold at most 4 GiB."
            }
            ErrorCode::E1001 => {
                "expected token: the parser required a specific keyword or \
                 punctuator at this position and found something else."
            }
            ErrorCode::E1002 => {
                "expected a number: the parser required an integer literal at \
                 this position."
            }
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E1001"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
