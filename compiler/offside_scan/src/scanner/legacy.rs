//! The legacy `print` statement keyword.

use super::{ExternalScanner, ScanContext};
use crate::token::{ScanToken, TokenKind};

/// Spelling of the legacy print statement keyword.
pub const LEGACY_PRINT: &[u8] = b"print";

/// Tells `print x` (legacy statement) from `print(x)`, `print.attr`, or a
/// bare `print` reference.
///
/// After the word and any spaces or tabs, a `(`, `.`, line break, or comment
/// marker means ordinary identifier use. Anything else makes `print` the
/// statement keyword. Only the word itself is consumed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LegacyKeywordScanner;

impl ExternalScanner for LegacyKeywordScanner {
    fn name(&self) -> &'static str {
        "legacyPrint"
    }

    fn scan(&self, cx: &mut ScanContext<'_>, token: &mut ScanToken) {
        let mut cursor = cx.cursor(token.start());
        if !cursor.eat_word(LEGACY_PRINT) {
            return;
        }
        let word_end = cursor.pos();

        cursor.eat_whitespace();
        match cursor.current() {
            b'(' | b'.' | b'\n' | b'\r' => {}
            b if b == cx.config.comment_marker => {}
            _ => token.accept(TokenKind::Print, word_end),
        }
    }
}
