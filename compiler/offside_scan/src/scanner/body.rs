//! Block body continuation.

use tracing::trace;

use super::{ExternalScanner, ScanContext};
use crate::token::{ScanToken, TokenKind};

/// Decides whether the line at the cursor stays inside the open block.
///
/// The line continues the body only when it is indented strictly deeper
/// than the statement that opened the block. A line at the same depth is the
/// next sibling statement, so it ends the body. Both outcomes are zero-width
/// markers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockContinuationScanner;

impl ExternalScanner for BlockContinuationScanner {
    fn name(&self) -> &'static str {
        "bodyContinue"
    }

    fn scan(&self, cx: &mut ScanContext<'_>, token: &mut ScanToken) {
        let start = token.start();
        let enclosing = cx.enclosing_indent();
        let current = cx.indent_at(start);
        trace!(pos = start, enclosing, current, "block continuation");

        let kind = if current <= enclosing {
            TokenKind::BodyEnd
        } else {
            TokenKind::BodyContinue
        };
        token.accept(kind, start);
    }
}
