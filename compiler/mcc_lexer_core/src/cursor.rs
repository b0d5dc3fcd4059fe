//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at or past the source length. An interior
//! null byte reads as `0x00` too, but sits before `source_len`, so
//! [`Cursor::is_eof`] tells the two apart.

/// Returns `true` for the bytes C's `isspace` accepts in the C locale.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so lookahead can run on a copy.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any in-source position: the padding guarantees a readable
    /// byte after the sentinel.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source at the current position starts with
    /// `needle`. Never matches past the end of the source.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        let start = self.pos as usize;
        let end = start + needle.len();
        end <= self.source_len as usize && &self.buf[start..end] == needle
    }

    /// Returns the byte `n` positions ahead, or `0x00` past the buffer.
    #[inline]
    pub fn byte_at_offset(&self, n: u32) -> u8 {
        self.buf
            .get(self.pos as usize + n as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past whitespace (C `isspace` set).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(is_space);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// Continuation bytes and ASCII count as one byte.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }
}
