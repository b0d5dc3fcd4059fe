use super::*;

#[test]
fn known_codes_are_described() {
    for code in ErrorCode::ALL {
        let text = explain_error(code.as_str()).unwrap_or_default();
        assert!(text.starts_with(code.as_str()), "{text}");
        assert!(text.ends_with(code.description()));
    }
}

#[test]
fn lookup_ignores_case() {
    assert!(explain_error("e1002").is_ok());
}

#[test]
fn unknown_code() {
    assert_eq!(
        explain_error("E9999"),
        Err(UsageError::UnknownErrorCode("E9999".to_owned()))
    );
}
