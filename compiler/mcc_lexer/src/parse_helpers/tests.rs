use super::*;

#[test]
fn small_values() {
    assert_eq!(parse_decimal_saturating(b"0"), (0, false));
    assert_eq!(parse_decimal_saturating(b"42"), (42, false));
    assert_eq!(parse_decimal_saturating(b"007"), (7, false));
}

#[test]
fn max_value_fits() {
    assert_eq!(
        parse_decimal_saturating(b"9223372036854775807"),
        (i64::MAX, false)
    );
}

#[test]
fn overflow_saturates() {
    assert_eq!(
        parse_decimal_saturating(b"9223372036854775808"),
        (i64::MAX, true)
    );
    assert_eq!(
        parse_decimal_saturating(b"99999999999999999999999999"),
        (i64::MAX, true)
    );
}
