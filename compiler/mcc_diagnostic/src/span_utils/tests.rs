use super::*;

#[test]
fn single_line_is_whole_source() {
    let source = "1 + 2;";
    assert_eq!(line_bounds(source, 0), (0, 6));
    assert_eq!(line_bounds(source, 4), (0, 6));
    assert_eq!(line_at(source, 4), "1 + 2;");
    assert_eq!(column(source, 4), 4);
}

#[test]
fn offset_at_end_of_input() {
    let source = "a = 1";
    assert_eq!(line_at(source, 5), "a = 1");
    assert_eq!(column(source, 5), 5);
}

#[test]
fn offset_past_end_is_clamped() {
    let source = "ab";
    assert_eq!(line_bounds(source, 40), (0, 2));
    assert_eq!(column(source, 40), 2);
}

#[test]
fn multi_line_picks_containing_line() {
    let source = "a = 1;\nb = $;\nc;";
    let dollar = 11;
    assert_eq!(line_at(source, dollar), "b = $;");
    assert_eq!(column(source, dollar), 4);
}

#[test]
fn crlf_terminator_is_excluded() {
    let source = "x;\r\ny @;\r\n";
    assert_eq!(line_at(source, 6), "y @;");
    assert_eq!(column(source, 6), 2);
}

#[test]
fn offset_on_newline_belongs_to_preceding_line() {
    let source = "ab\ncd";
    assert_eq!(line_at(source, 2), "ab");
    assert_eq!(column(source, 2), 2);
}

#[test]
fn column_counts_characters_not_bytes() {
    let source = "é @";
    // 'é' is two bytes; '@' sits at byte 3, character 2.
    assert_eq!(column(source, 3), 2);
}

#[test]
fn empty_source() {
    assert_eq!(line_bounds("", 0), (0, 0));
    assert_eq!(column("", 0), 0);
}
