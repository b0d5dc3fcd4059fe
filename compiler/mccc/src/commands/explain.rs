//! The `explain` command: describe an error code.

use mcc_diagnostic::ErrorCode;

use crate::config::UsageError;

/// Look up the description for `code_str` (for example `E0001`).
pub fn explain_error(code_str: &str) -> Result<String, UsageError> {
    let code: ErrorCode = code_str
        .parse()
        .map_err(|()| UsageError::UnknownErrorCode(code_str.to_owned()))?;
    Ok(format!("{code}: {}", code.description()))
}

#[cfg(test)]
mod tests;
