use pretty_assertions::assert_eq;

use super::*;

fn tok(kind: TokenKind, start: u32, end: u32) -> Token {
    Token::new(kind, Span::new(start, end))
}

#[test]
fn value_only_for_numbers() {
    assert_eq!(tok(TokenKind::Num(42), 0, 2).value(), Some(42));
    assert_eq!(tok(TokenKind::Ident, 0, 1).value(), None);
    assert_eq!(tok(TokenKind::Reserved, 0, 1).value(), None);
    assert_eq!(tok(TokenKind::Eof, 3, 3).value(), None);
}

#[test]
fn text_borrows_from_source() {
    let source = "foo + 12";
    assert_eq!(tok(TokenKind::Ident, 0, 3).text(source), "foo");
    assert_eq!(tok(TokenKind::Num(12), 6, 8).text(source), "12");
    assert_eq!(tok(TokenKind::Eof, 8, 8).text(source), "");
}

#[test]
fn debug_shows_kind_and_span() {
    assert_eq!(format!("{:?}", tok(TokenKind::Num(7), 1, 2)), "Num(7) @ 1..2");
}

#[test]
fn kind_names() {
    assert_eq!(TokenKind::Reserved.name(), "reserved");
    assert_eq!(TokenKind::Ident.name(), "ident");
    assert_eq!(TokenKind::Num(0).name(), "num");
    assert_eq!(TokenKind::Eof.name(), "eof");
}

#[test]
fn empty_list_is_not_terminated() {
    assert!(!TokenList::new().is_terminated());
}

#[test]
fn list_ending_in_eof_is_terminated() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Num(1), 0, 1),
        tok(TokenKind::Eof, 1, 1),
    ]);
    assert!(list.is_terminated());
    assert_eq!(list.len(), 2);
    assert_eq!(list.last().map(|t| t.kind), Some(TokenKind::Eof));
}

#[test]
fn list_with_interior_eof_is_not_terminated() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Eof, 0, 0),
        tok(TokenKind::Eof, 0, 0),
    ]);
    assert!(!list.is_terminated());
}

#[test]
fn lists_compare_by_value() {
    let build = || {
        let mut list = TokenList::with_capacity(2);
        list.push(tok(TokenKind::Ident, 0, 1));
        list.push(tok(TokenKind::Eof, 1, 1));
        list
    };
    assert_eq!(build(), build());
}

#[test]
fn index_and_iter_agree() {
    let list = TokenList::from_vec(vec![
        tok(TokenKind::Reserved, 0, 1),
        tok(TokenKind::Eof, 1, 1),
    ]);
    let kinds: Vec<_> = list.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![list[0].kind, list[1].kind]);
}
