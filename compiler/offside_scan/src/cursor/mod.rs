//! Copyable read cursor over an [`InputStream`].
//!
//! The scanners share a handful of primitives: single-byte lookahead,
//! tab-stop aware whitespace skipping, and literal word matching with a
//! trailing word boundary. The cursor never mutates the stream; it is
//! [`Copy`], so a scanner can snapshot it before speculative lookahead and
//! simply drop the copy when it declines.
//!
//! EOF is reported by [`Cursor::is_eof`]. At EOF [`Cursor::current`] returns
//! the `0x00` sentinel, which is neither whitespace nor an identifier byte, so
//! every `eat_*` loop terminates there without an explicit bounds check.

use crate::input::InputStream;

/// Width of a tab stop in columns.
pub const TAB_WIDTH: u32 = 8;

/// Column reached after `byte` when starting at `col`.
///
/// A space advances one column; a tab advances to the next multiple of
/// [`TAB_WIDTH`]. Any other byte leaves the column unchanged (callers stop
/// before such bytes).
#[inline]
pub const fn advance_column(col: u32, byte: u8) -> u32 {
    match byte {
        b' ' => col + 1,
        b'\t' => col + TAB_WIDTH - col % TAB_WIDTH,
        _ => col,
    }
}

/// Returns `true` for bytes that may continue an identifier.
///
/// Non-ASCII bytes count as identifier bytes: the grammar accepts Unicode
/// identifiers, and every byte of a multi-byte UTF-8 sequence is `>= 0x80`.
#[inline]
pub const fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

/// Returns `true` for `\n` and `\r`.
#[inline]
pub const fn is_line_break(byte: u8) -> bool {
    matches!(byte, b'\n' | b'\r')
}

/// Read cursor positioned somewhere in an input stream.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a dyn InputStream,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at `pos`.
    pub fn new(input: &'a dyn InputStream, pos: u32) -> Self {
        Self { input, pos }
    }

    /// Byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.input.byte_at(self.pos)
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.input.byte_at(self.pos.saturating_add(1))
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Returns `true` once the cursor is at or past the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.input.is_eof(self.pos)
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance past spaces and tabs.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while matches!(self.current(), b' ' | b'\t') {
            self.pos += 1;
        }
    }

    /// Advance past spaces and tabs, returning the column reached.
    ///
    /// `col` is the column of the current position. Tabs expand to the next
    /// multiple of [`TAB_WIDTH`].
    #[inline]
    pub fn eat_indent(&mut self, mut col: u32) -> u32 {
        loop {
            let b = self.current();
            if b != b' ' && b != b'\t' {
                return col;
            }
            col = advance_column(col, b);
            self.pos += 1;
        }
    }

    /// Returns `true` if `word` starts at the current position and is not
    /// immediately followed by an identifier byte.
    ///
    /// Does not move the cursor.
    pub fn at_word(&self, word: &[u8]) -> bool {
        let Ok(len) = u32::try_from(word.len()) else {
            return false;
        };
        let end = self.pos.saturating_add(len);
        self.input.read(self.pos, end) == word && !is_ident_byte(self.input.byte_at(end))
    }

    /// Consume `word` if [`at_word`](Self::at_word) holds.
    pub fn eat_word(&mut self, word: &[u8]) -> bool {
        if !self.at_word(word) {
            return false;
        }
        // `at_word` succeeded, so the length fits in u32.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "word length already checked by at_word"
        )]
        self.advance_n(word.len() as u32);
        true
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("stream", &self.input.stream_id())
            .field("pos", &self.pos)
            .finish()
    }
}
