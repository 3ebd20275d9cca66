//! External scanners and the interface the host drives them through.
//!
//! A host parser calls a scanner at the position where grammar state makes
//! its token relevant. The scanner reads the input, may query the parse
//! stack and the stream's indentation cache, and then either accepts a token
//! on the [`ScanToken`] or leaves it unresolved so ordinary tokenization can
//! run.
//!
//! Scanners are stateless unit structs. All mutable state lives in the
//! [`IndentCache`] reachable through the [`ScanContext`], which keeps every
//! scanner safe to call repeatedly at the same position or out of order.

mod body;
mod keywords;
mod legacy;
mod newlines;

pub use body::BlockContinuationScanner;
pub use keywords::{ContinuationKeywordScanner, CONTINUATION_KEYWORDS};
pub use legacy::{LegacyKeywordScanner, LEGACY_PRINT};
pub use newlines::LineBreakScanner;

use bitflags::bitflags;

use crate::config::ScanConfig;
use crate::cursor::Cursor;
use crate::indent::{line_indent, IndentCache};
use crate::input::InputStream;
use crate::stack::{ParseStack, COMPOUND};
use crate::token::ScanToken;

bitflags! {
    /// How the host should treat a scanner's result.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ScannerFlags: u8 {
        /// The result depends on parse-stack state, so tokens from this
        /// scanner cannot be reused across different stacks.
        const CONTEXTUAL = 1 << 0;
        /// Ordinary tokenization is tried when the scanner declines.
        const FALLBACK = 1 << 1;
    }
}

/// Everything a scanner may read or update during one attempt.
pub struct ScanContext<'a> {
    pub input: &'a dyn InputStream,
    pub stack: &'a dyn ParseStack,
    pub cache: &'a mut IndentCache,
    pub config: &'a ScanConfig,
}

impl<'a> ScanContext<'a> {
    pub fn new(
        input: &'a dyn InputStream,
        stack: &'a dyn ParseStack,
        cache: &'a mut IndentCache,
        config: &'a ScanConfig,
    ) -> Self {
        Self {
            input,
            stack,
            cache,
            config,
        }
    }

    /// Cursor over the input at `pos`.
    #[inline]
    pub fn cursor(&self, pos: u32) -> Cursor<'a> {
        Cursor::new(self.input, pos)
    }

    /// Indentation of the line at `pos`, through the cache.
    pub fn indent_at(&mut self, pos: u32) -> u32 {
        line_indent(self.input, self.cache, pos, self.config)
    }

    /// Indentation of the innermost open compound statement, or 0 at top
    /// level.
    pub fn enclosing_indent(&mut self) -> u32 {
        match self.stack.innermost(COMPOUND) {
            Some(stmt) => self.indent_at(stmt.start),
            None => 0,
        }
    }
}

/// A context-sensitive tokenizer the host invokes at a specific position.
pub trait ExternalScanner: Sync {
    /// Short name used in traces and diagnostics.
    fn name(&self) -> &'static str;

    /// How the host treats this scanner's decisions.
    fn flags(&self) -> ScannerFlags {
        ScannerFlags::CONTEXTUAL | ScannerFlags::FALLBACK
    }

    /// Attempt to produce a token starting at `token.start()`.
    fn scan(&self, cx: &mut ScanContext<'_>, token: &mut ScanToken);
}

const ALL: &[&dyn ExternalScanner] = &[
    &LineBreakScanner,
    &BlockContinuationScanner,
    &ContinuationKeywordScanner,
    &LegacyKeywordScanner,
];

/// Every scanner in this crate, for table-driven hosts.
pub fn scanners() -> &'static [&'static dyn ExternalScanner] {
    ALL
}

#[cfg(test)]
mod tests;
