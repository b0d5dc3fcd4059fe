use pretty_assertions::assert_eq;

use super::*;
use crate::lex_error::LexErrorKind;

#[test]
fn whitespace_is_trivia() {
    let cooker = TokenCooker::new(b"   ");
    assert_eq!(cooker.cook(RawTag::Whitespace, Span::new(0, 3)), Ok(None));
}

#[test]
fn keywords_and_punctuators_are_reserved() {
    let cooker = TokenCooker::new(b"if+");
    assert_eq!(
        cooker.cook(RawTag::Keyword, Span::new(0, 2)),
        Ok(Some(TokenKind::Reserved))
    );
    assert_eq!(
        cooker.cook(RawTag::Punct, Span::new(2, 3)),
        Ok(Some(TokenKind::Reserved))
    );
}

#[test]
fn number_carries_value() {
    let cooker = TokenCooker::new(b"x 1234");
    assert_eq!(
        cooker.cook(RawTag::Number, Span::new(2, 6)),
        Ok(Some(TokenKind::Num(1234)))
    );
}

#[test]
fn eof_cooks_to_eof() {
    let cooker = TokenCooker::new(b"");
    assert_eq!(
        cooker.cook(RawTag::Eof, Span::point(0)),
        Ok(Some(TokenKind::Eof))
    );
}

#[test]
fn invalid_reports_character() {
    let cooker = TokenCooker::new("a é".as_bytes());
    let err = cooker.cook(RawTag::Invalid, Span::new(2, 4));
    assert_eq!(
        err,
        Err(LexError {
            span: Span::new(2, 4),
            kind: LexErrorKind::InvalidToken { found: 'é' },
        })
    );
}
