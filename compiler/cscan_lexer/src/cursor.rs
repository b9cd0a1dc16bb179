//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. End of input is
//! detected when the current byte equals the sentinel (`0x00`) and the
//! position has reached the source length. No explicit bounds checking is
//! performed in the common case: the sentinel guarantees safe termination.
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an interior null (the scanner reports it
//! as an unexpected character); a null at `pos >= source_len` is the sentinel.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is just a copy.
///
/// # Invariant
///
/// `buf` must be sentinel-terminated: `buf[source_len] == 0x00`, and all
/// bytes after `source_len` are `0x00` (cache-line padding). This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &[u8] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` (sentinel). All bytes after the
    /// sentinel must also be `0x00` (padding). This is guaranteed by
    /// `SourceBuffer::new()`.
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

    /// Returns the byte at the current position.
    ///
    /// Returns `0x00` at end of input (the sentinel byte). Interior null
    /// bytes also return `0x00`; use [`is_eof()`](Self::is_eof) to tell them apart.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Returns `0x00` when the cursor is at end of input, so lookahead never
    /// runs into the padding region.
    #[inline]
    pub fn peek(&self) -> u8 {
        if self.is_eof() {
            return 0;
        }
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.source_len, "advance past end of source");
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
        debug_assert!(self.pos <= self.source_len, "advance past end of source");
    }

    /// Consume the current byte if it equals `expected`.
    ///
    /// Returns `true` if the byte was consumed. Never consumes the sentinel.
    #[inline]
    pub fn eat_if(&mut self, expected: u8) -> bool {
        if self.is_eof() || self.current() != expected {
            return false;
        }
        self.pos += 1;
        true
    }

    /// Returns `true` if the cursor has reached end of input.
    ///
    /// End of input is when the current byte is the sentinel (`0x00`) and
    /// the position is at or past the source length. This distinguishes it
    /// from interior null bytes.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source bytes in `start..end`.
    ///
    /// `start..end` must fall within the source content (`end <= source_len`).
    /// The bytes are returned as they are; nothing requires them to be UTF-8.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel ends the loop. This is
    /// true for all the byte classes the scanner uses.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or end of input using SIMD-accelerated search.
    ///
    /// Used to skip line comment bodies. The newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(b'\n', remaining) {
            self.pos += offset as u32;
        } else {
            self.pos = self.source_len;
        }
    }

    /// Advance past literal content to the next `quote` or `\n`.
    ///
    /// Returns the byte found, or `0` at end of input. The found byte is not
    /// consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_quote_or_newline(&mut self, quote: u8) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(quote, b'\n', remaining) {
            self.pos += offset as u32;
            self.buf[self.pos as usize]
        } else {
            self.pos = self.source_len;
            0
        }
    }
}
