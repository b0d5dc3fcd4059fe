//! Numeric literal parsing.

/// Parse a run of ASCII decimal digits into an `i64`.
///
/// Values past `i64::MAX` saturate, matching what `strtol` returns on an
/// LP64 target. The flag reports whether saturation happened.
pub(crate) fn parse_decimal_saturating(digits: &[u8]) -> (i64, bool) {
    let mut value: i64 = 0;
    for &d in digits {
        debug_assert!(d.is_ascii_digit(), "non-digit byte {d:#04x} in literal");
        let next = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(d - b'0')));
        match next {
            Some(v) => value = v,
            None => return (i64::MAX, true),
        }
    }
    (value, false)
}

#[cfg(test)]
mod tests;
