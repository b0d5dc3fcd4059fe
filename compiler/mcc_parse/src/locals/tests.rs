use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_table() {
    let locals = Locals::new();
    assert!(locals.is_empty());
    assert_eq!(locals.frame_size(), 0);
    assert_eq!(locals.find("a"), None);
}

#[test]
fn offsets_grow_by_slot() {
    let mut locals = Locals::new();
    assert_eq!(locals.get_or_declare("a").offset, 8);
    assert_eq!(locals.get_or_declare("b").offset, 16);
    assert_eq!(locals.get_or_declare("foo").offset, 24);
    assert_eq!(locals.frame_size(), 24);
}

#[test]
fn redeclaring_reuses_slot() {
    let mut locals = Locals::new();
    locals.get_or_declare("x");
    locals.get_or_declare("y");

    let again = locals.get_or_declare("x");
    assert_eq!(again, LocalVar { name: "x", offset: 8 });
    assert_eq!(locals.len(), 2);
}

#[test]
fn find_after_declare() {
    let mut locals = Locals::new();
    locals.get_or_declare("count");
    assert_eq!(locals.find("count").map(|v| v.offset), Some(8));
    assert_eq!(locals.find("coun"), None);
}

#[test]
fn names_borrow_from_source() {
    let source = String::from("abc = 1; de = 2;");
    let mut locals = Locals::new();
    locals.get_or_declare(&source[0..3]);
    locals.get_or_declare(&source[9..11]);

    let names: Vec<_> = locals.iter().map(|v| v.name).collect();
    assert_eq!(names, vec!["abc", "de"]);
}
