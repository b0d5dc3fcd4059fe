use super::*;

#[test]
fn empty_source_has_sentinel() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert_eq!(buf.as_sentinel_bytes()[0], 0);
}

#[test]
fn as_bytes_excludes_sentinel() {
    let buf = SourceBuffer::new("12+34");
    assert_eq!(buf.as_bytes(), b"12+34");
    assert_eq!(buf.len(), 5);
}

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.as_sentinel_bytes()[3], 0);
}

#[test]
fn padded_to_cache_line() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.as_sentinel_bytes().len(), 64);
    assert!(buf.as_sentinel_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn exact_cache_line_source_gets_extra_line() {
    let source = "x".repeat(64);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.as_sentinel_bytes().len(), 128);
    assert_eq!(buf.as_sentinel_bytes()[64], 0);
}

#[test]
fn interior_null_is_kept() {
    let buf = SourceBuffer::new("a\0b");
    assert_eq!(buf.as_bytes(), b"a\0b");
    assert_eq!(buf.len(), 3);
}
