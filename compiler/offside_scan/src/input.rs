//! Random-access view of a source stream.
//!
//! Scanners never own the text they inspect. They read it through
//! [`InputStream`], which the host implements over whatever storage it keeps
//! (a [`SourceBuffer`](crate::SourceBuffer), a rope, a memory map).
//!
//! Positions are byte offsets. Reads past the end of the source return the
//! `0x00` sentinel, matching the contract of the sentinel-terminated buffer.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Byte returned for any position at or past the end of the source.
pub const EOF_BYTE: u8 = 0;

/// Identity of one immutable version of a source stream.
///
/// Indentation caches are keyed by this handle. Editing a buffer produces a
/// new stream with a fresh id, so stale cache entries are never consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct StreamId(u32);

static NEXT_STREAM_ID: AtomicU32 = AtomicU32::new(0);

impl StreamId {
    /// Allocate a process-unique stream id.
    pub fn fresh() -> Self {
        StreamId(NEXT_STREAM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw index value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream#{}", self.0)
    }
}

/// Read access to a source stream, as seen by the scanners.
pub trait InputStream {
    /// Identity used to select the stream's indentation cache.
    fn stream_id(&self) -> StreamId;

    /// Length of the source content in bytes.
    fn len(&self) -> u32;

    /// Returns `true` if the source is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Byte at `pos`, or [`EOF_BYTE`] when `pos >= len()`.
    fn byte_at(&self, pos: u32) -> u8;

    /// Bytes in `start..end`, clamped to the source content.
    ///
    /// An empty slice is returned when the clamped range is empty.
    fn read(&self, start: u32, end: u32) -> &[u8];

    /// Returns `true` if `pos` is at or past the end of the source.
    ///
    /// Interior null bytes are not EOF: they sit at `pos < len()`.
    #[inline]
    fn is_eof(&self, pos: u32) -> bool {
        pos >= self.len()
    }
}
