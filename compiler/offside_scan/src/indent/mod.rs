//! Indentation depth lookup with a two-tier per-stream memo.
//!
//! Block and keyword scanners need the indentation of two lines at every
//! probe: the current line and the line that opened the enclosing compound
//! statement. Recomputing either means a backwards scan to the previous line
//! break, so results are memoized in an [`IndentCache`]:
//!
//! - a single *current* slot holding the most recently recorded position,
//!   which serves left-to-right scanning where the newline scanner records a
//!   line's depth just before the block scanners ask for it;
//! - a *by-depth* table where `by_depth[d]` is the last position known to
//!   have depth `d`. Enclosing statements are usually the last thing seen at
//!   their depth, so out-of-order probes for them still hit.
//!
//! The cache only accelerates. Every miss is answered from the buffer by
//! [`line_indent`], and a cold cache yields the same answers as a warm one
//! whenever the indentation fits in the lookback window.

use crate::config::ScanConfig;
use crate::cursor::advance_column;
use crate::input::InputStream;

/// Marker for a position slot that holds nothing.
pub const UNKNOWN: u32 = u32::MAX;

/// Deepest indentation the by-depth table stores.
///
/// The table is dense, one slot per column up to the deepest depth seen, so
/// an unbounded depth would cost memory in proportion to a line's leading
/// whitespace. Deeper lines live only in the current slot; probes for them
/// after demotion miss and fall back to [`line_indent`].
pub const MAX_TRACKED_DEPTH: u32 = 1024;

/// Two-tier indentation memo for one stream.
///
/// Memory is one `u32` per column of the deepest tracked depth, capped at
/// [`MAX_TRACKED_DEPTH`] slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentCache {
    last_pos: u32,
    last_indent: u32,
    by_depth: Vec<u32>,
}

impl Default for IndentCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IndentCache {
    /// An empty cache.
    pub const fn new() -> Self {
        Self {
            last_pos: UNKNOWN,
            last_indent: 0,
            by_depth: Vec::new(),
        }
    }

    /// Cached depth of the line at `pos`.
    ///
    /// A by-depth hit requires `pos` to be the *last* position recorded at
    /// that depth; older positions at the same depth have been overwritten.
    pub fn lookup(&self, pos: u32) -> Option<u32> {
        if pos == UNKNOWN {
            return None;
        }
        if self.last_pos == pos {
            return Some(self.last_indent);
        }
        self.by_depth
            .iter()
            .position(|&p| p == pos)
            .and_then(|depth| u32::try_from(depth).ok())
    }

    /// Make `(pos, depth)` the current entry.
    ///
    /// The previous current entry moves into the by-depth table at its own
    /// depth.
    pub fn record(&mut self, pos: u32, depth: u32) {
        if self.last_pos != UNKNOWN {
            self.record_prev(self.last_pos, self.last_indent);
        }
        self.last_pos = pos;
        self.last_indent = depth;
    }

    /// Store `(pos, depth)` in the by-depth table without touching the
    /// current entry.
    ///
    /// Depths beyond [`MAX_TRACKED_DEPTH`] are not stored.
    pub fn record_prev(&mut self, pos: u32, depth: u32) {
        if depth > MAX_TRACKED_DEPTH {
            return;
        }
        let slot = depth as usize;
        if self.by_depth.len() <= slot {
            self.by_depth.resize(slot + 1, UNKNOWN);
        }
        self.by_depth[slot] = pos;
    }

    /// The current entry as `(pos, depth)`, if any.
    pub fn current(&self) -> Option<(u32, u32)> {
        (self.last_pos != UNKNOWN).then_some((self.last_pos, self.last_indent))
    }

    /// Number of depth slots allocated so far.
    pub fn depth_slots(&self) -> usize {
        self.by_depth.len()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.last_pos = UNKNOWN;
        self.last_indent = 0;
        self.by_depth.clear();
    }
}

/// Indentation depth, in columns, of the line containing `pos`.
///
/// # Contract
///
/// `pos` is at the start of a line or on the first non-blank byte of one.
/// The depth counts the leading spaces and tabs of that line, tabs advancing
/// to the next multiple of [`TAB_WIDTH`](crate::TAB_WIDTH).
///
/// On a cache miss at most `config.lookback_window` bytes before `pos` are
/// searched for the previous `\n` or `\r`. When none is found the window
/// start stands in for the line start, which is exact for indentation that
/// fits in the window.
pub fn line_indent(
    input: &dyn InputStream,
    cache: &mut IndentCache,
    pos: u32,
    config: &ScanConfig,
) -> u32 {
    if let Some(depth) = cache.lookup(pos) {
        return depth;
    }

    let window_start = pos.saturating_sub(config.lookback_window);
    let window = input.read(window_start, pos);
    let line_start = match memchr::memrchr2(b'\n', b'\r', window) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "offset lies inside a window of at most lookback_window bytes"
        )]
        Some(offset) => window_start + offset as u32 + 1,
        None => window_start,
    };

    let mut depth = 0;
    let mut at = line_start;
    loop {
        let b = input.byte_at(at);
        if b != b' ' && b != b'\t' {
            break;
        }
        depth = advance_column(depth, b);
        at += 1;
    }

    tracing::trace!(pos, line_start, depth, "indent cache miss");
    cache.record_prev(pos, depth);
    depth
}
