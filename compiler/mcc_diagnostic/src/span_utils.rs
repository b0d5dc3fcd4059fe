//! Line lookup for caret rendering.

/// Byte range `[start, end)` of the line containing `offset`.
///
/// `end` excludes the line terminator (`\n`, or `\r\n`). An `offset` past the
/// end of `source` is clamped, so end-of-input positions resolve to the last
/// line.
pub fn line_bounds(source: &str, offset: u32) -> (usize, usize) {
    let bytes = source.as_bytes();
    let offset = (offset as usize).min(bytes.len());

    let start = memchr::memrchr(b'\n', &bytes[..offset]).map_or(0, |nl| nl + 1);
    let mut end = memchr::memchr(b'\n', &bytes[offset..]).map_or(bytes.len(), |nl| offset + nl);
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    (start, end)
}

/// The text of the line containing `offset`, without its terminator.
pub fn line_at(source: &str, offset: u32) -> &str {
    let (start, end) = line_bounds(source, offset);
    &source[start..end]
}

/// 0-based display column of `offset` within its line, in characters.
pub fn column(source: &str, offset: u32) -> usize {
    let (start, _) = line_bounds(source, offset);
    let offset = (offset as usize).min(source.len());
    source
        .get(start..offset)
        .map_or(offset - start, |prefix| prefix.chars().count())
}

#[cfg(test)]
mod tests;
