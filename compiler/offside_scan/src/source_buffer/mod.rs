//! Sentinel-terminated source buffer.
//!
//! The buffer keeps a `0x00` sentinel byte after the source content so that
//! single-byte lookahead at `len()` needs no special case. The total size is
//! rounded up to the next 64-byte boundary, which also leaves zero padding for
//! the two-byte lookahead the scanners do near the end of input.
//!
//! Each buffer is stamped with a fresh [`StreamId`] at construction. The
//! buffer is immutable; an edit is modelled by building a new buffer, which
//! gives the edited text a new identity and therefore a cold indentation
//! cache.

use crate::input::{InputStream, StreamId, EOF_BYTE};

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated copy of a source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    id: StreamId,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer with a fresh id.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `len()` at `u32::MAX`;
    /// bytes beyond that are unreachable through [`InputStream`].
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
            id: StreamId::fresh(),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Identity of this buffer's contents.
    pub fn id(&self) -> StreamId {
        self.id
    }
}

impl InputStream for SourceBuffer {
    fn stream_id(&self) -> StreamId {
        self.id
    }

    fn len(&self) -> u32 {
        self.source_len
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        // Positions inside the padding read the zero fill; everything beyond
        // reads the sentinel value without indexing.
        self.buf.get(pos as usize).copied().unwrap_or(EOF_BYTE)
    }

    fn read(&self, start: u32, end: u32) -> &[u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }
}
