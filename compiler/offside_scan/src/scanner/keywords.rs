//! Continuation keywords (`else`, `elif`, `except`, `finally`).

use tracing::trace;

use super::{ExternalScanner, ScanContext};
use crate::token::{ScanToken, TokenKind};

/// Continuation keywords and the token each one produces.
pub const CONTINUATION_KEYWORDS: &[(&[u8], TokenKind)] = &[
    (b"else", TokenKind::Else),
    (b"elif", TokenKind::Elif),
    (b"except", TokenKind::Except),
    (b"finally", TokenKind::Finally),
];

/// Recognizes a continuation keyword only where it binds to the innermost
/// open compound statement.
///
/// The keyword's line must sit at exactly the statement's depth. A deeper
/// `else` belongs to some nested statement, a shallower one to an outer
/// statement the host has not reached yet; both are declined and left to the
/// ordinary identifier path.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContinuationKeywordScanner;

impl ExternalScanner for ContinuationKeywordScanner {
    fn name(&self) -> &'static str {
        "statementContinueKeyword"
    }

    fn scan(&self, cx: &mut ScanContext<'_>, token: &mut ScanToken) {
        let start = token.start();
        let cursor = cx.cursor(start);
        let Some(&(word, kind)) = CONTINUATION_KEYWORDS
            .iter()
            .find(|(word, _)| cursor.at_word(word))
        else {
            return;
        };

        let enclosing = cx.enclosing_indent();
        let current = cx.indent_at(start);
        if current != enclosing {
            trace!(pos = start, %kind, enclosing, current, "continuation keyword at wrong depth");
            return;
        }

        let mut end = cursor;
        end.eat_word(word);
        token.accept(kind, end.pos());
    }
}
