//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input by looking at the current byte
//! instead of comparing offsets on every step. The total buffer size is
//! rounded up to the next 64-byte boundary, which also provides padding for
//! one-byte lookahead right before the sentinel.
//!
//! # Interior Null Bytes
//!
//! A `0x00` inside the source content is not end of input. Its positions are
//! recorded at construction so callers can report them; the scanner itself
//! turns each one into an "unexpected character" token.

use crate::{Cursor, Scanner};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The buffer is immutable once built. Every [`Scanner`] and every token it
/// produces borrows from it, so it must outlive them.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Offsets of `0x00` bytes inside the source content.
    interior_nulls: Vec<u32>,
}

impl SourceBuffer {
    /// Largest source, in bytes, that fits without truncation.
    ///
    /// Offsets are `u32` and the sentinel needs one offset past the end.
    pub const MAX_LEN: usize = u32::MAX as usize - 1;

    /// Create a new sentinel-terminated buffer from source text.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Create a new sentinel-terminated buffer from raw source bytes.
    ///
    /// The bytes need not be UTF-8. This is the only copy of the source the
    /// lexer ever makes; tokens borrow from the returned buffer.
    ///
    /// # File Size
    ///
    /// Sources longer than [`MAX_LEN`](Self::MAX_LEN) are truncated to their
    /// first `MAX_LEN` bytes. Callers that must not scan a prefix check the
    /// length first.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source_len = source.len().min(Self::MAX_LEN);
        let source_bytes = &source[..source_len];

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let interior_nulls = find_interior_nulls(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX - 1),
            interior_nulls,
        }
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Start a scan session over this buffer.
    ///
    /// Equivalent to [`Scanner::new(self)`](Scanner::new).
    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(self)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Offsets of null bytes found inside the source content.
    pub fn interior_nulls(&self) -> &[u32] {
        &self.interior_nulls
    }
}

/// Size assertion: `SourceBuffer` should stay small; it is passed around by reference
/// but also stored in driver state.
/// Vec<u8> = 24, u32 = 4, Vec<u32> = 24, + 4 padding = 56.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

/// Find null bytes (U+0000) within the source content.
///
/// Uses `memchr` for SIMD-accelerated search instead of byte-at-a-time
/// iteration.
fn find_interior_nulls(source: &[u8]) -> Vec<u32> {
    let mut nulls = Vec::new();
    let mut offset = 0;
    while let Some(pos) = memchr::memchr(0, &source[offset..]) {
        let absolute = offset + pos;
        if let Ok(p) = u32::try_from(absolute) {
            nulls.push(p);
        }
        offset = absolute + 1;
    }
    nulls
}
