//! Result vocabulary and the token descriptor scanners write into.

use std::fmt;

/// Token kinds the scanners can produce.
///
/// The grammar owns the meaning of these kinds; the scanners only decide
/// which one applies at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Zero-width end-of-file marker.
    Eof,
    /// Newline that ends a logical line.
    Newline,
    /// Newline ending a blank or comment-only line.
    BlankLineNewline,
    /// Newline inside an open bracketed construct.
    BracketNewline,
    /// Zero-width marker: the open compound statement's body continues.
    BodyContinue,
    /// Zero-width marker: the open compound statement's body has ended.
    BodyEnd,
    /// `else` bound to the enclosing compound statement.
    Else,
    /// `elif` bound to the enclosing compound statement.
    Elif,
    /// `except` bound to the enclosing compound statement.
    Except,
    /// `finally` bound to the enclosing compound statement.
    Finally,
    /// `print` used as the legacy statement keyword.
    Print,
}

impl TokenKind {
    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "eof",
            TokenKind::Newline => "newline",
            TokenKind::BlankLineNewline => "blank-line-newline",
            TokenKind::BracketNewline => "bracket-newline",
            TokenKind::BodyContinue => "body-continue",
            TokenKind::BodyEnd => "body-end",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Except => "except",
            TokenKind::Finally => "finally",
            TokenKind::Print => "print",
        }
    }

    /// Returns `true` for kinds that never consume input.
    pub const fn is_zero_width(self) -> bool {
        matches!(
            self,
            TokenKind::Eof | TokenKind::BodyContinue | TokenKind::BodyEnd
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token a scanner accepted: its kind and the exclusive end offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accepted {
    pub kind: TokenKind,
    pub end: u32,
}

/// Descriptor handed to a scanner for one attempt at one position.
///
/// The scanner either calls [`accept`](Self::accept) or leaves the token
/// unresolved, in which case the host falls back to ordinary tokenization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanToken {
    start: u32,
    accepted: Option<Accepted>,
}

impl ScanToken {
    /// An unresolved token starting at `start`.
    pub const fn new(start: u32) -> Self {
        Self {
            start,
            accepted: None,
        }
    }

    /// Start offset of the token.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Accept a token of `kind` ending at `end`.
    ///
    /// Calling this again replaces the earlier decision. Zero-width kinds
    /// must end where they start.
    pub fn accept(&mut self, kind: TokenKind, end: u32) {
        debug_assert!(end >= self.start, "token end {end} before start {}", self.start);
        debug_assert!(
            !kind.is_zero_width() || end == self.start,
            "zero-width {kind} spans {}..{end}",
            self.start
        );
        self.accepted = Some(Accepted { kind, end });
    }

    /// The accepted token, or `None` if the scanner declined.
    #[inline]
    pub const fn accepted(&self) -> Option<Accepted> {
        self.accepted
    }
}
