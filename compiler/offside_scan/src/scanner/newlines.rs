//! Newline classification.

use tracing::trace;

use super::{ExternalScanner, ScanContext};
use crate::cursor::is_line_break;
use crate::stack::BRACKETED;
use crate::token::{ScanToken, TokenKind};

/// Classifies the newline (or end of input) at the cursor.
///
/// | Situation                                  | Token              |
/// |--------------------------------------------|--------------------|
/// | end of input                               | `Eof` (zero width) |
/// | inside an open bracketed construct         | `BracketNewline`   |
/// | next line is blank or comment-only         | `BlankLineNewline` |
/// | otherwise                                  | `Newline`          |
///
/// Every newline token consumes exactly the one line-break byte under the
/// cursor. On `Newline` the next line's depth is recorded as the cache's
/// current entry, keyed by the first content byte of that line, so the block
/// scanners probing that position next find it without rescanning.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineBreakScanner;

impl ExternalScanner for LineBreakScanner {
    fn name(&self) -> &'static str {
        "newlines"
    }

    fn scan(&self, cx: &mut ScanContext<'_>, token: &mut ScanToken) {
        let start = token.start();
        let cursor = cx.cursor(start);

        if cursor.is_eof() {
            token.accept(TokenKind::Eof, start);
            return;
        }
        if !is_line_break(cursor.current()) {
            return;
        }

        if let Some(open) = cx.stack.innermost(BRACKETED) {
            trace!(pos = start, construct = ?open.kind, "newline inside brackets");
            token.accept(TokenKind::BracketNewline, start + 1);
            return;
        }

        let mut next = cursor;
        next.advance();
        let depth = next.eat_indent(0);
        let stop = next.current();

        if next.is_eof() || is_line_break(stop) || stop == cx.config.comment_marker {
            token.accept(TokenKind::BlankLineNewline, start + 1);
            return;
        }

        cx.cache.record(next.pos(), depth);
        token.accept(TokenKind::Newline, start + 1);
    }
}
