//! External scanners for indentation-sensitive grammars.
//!
//! A Python-style grammar cannot be tokenized without knowing where blocks
//! open and close. This crate supplies the context-sensitive pieces a host
//! parser calls at specific token positions:
//!
//! - [`LineBreakScanner`]: classifies a newline as a statement separator, an
//!   absorbable blank/comment line, or a newline inside brackets.
//! - [`BlockContinuationScanner`]: decides whether a line continues the body
//!   of the innermost open compound statement.
//! - [`ContinuationKeywordScanner`]: accepts `else`/`elif`/`except`/`finally`
//!   only at the depth of the statement they continue.
//! - [`LegacyKeywordScanner`]: tells the legacy `print` statement from an
//!   ordinary `print` identifier.
//!
//! Indentation depths are memoized per stream in an [`IndentCache`] held by
//! an [`IndentCacheRegistry`]. The cache is an accelerator only: any lookup
//! it misses is recomputed from the buffer with [`line_indent`].
//!
//! # Usage
//!
//! ```
//! use offside_scan::{
//!     ConstructKind, LineBreakScanner, OpenConstruct, ScanSession, SourceBuffer, TokenKind,
//! };
//!
//! let buf = SourceBuffer::new("if ready:\n    go()\n");
//! let stack = vec![OpenConstruct::new(ConstructKind::CompoundStatement, 0)];
//! let mut session = ScanSession::default();
//!
//! let newline = session.run(&LineBreakScanner, &buf, &stack, 9);
//! assert_eq!(newline.map(|t| t.kind), Some(TokenKind::Newline));
//! ```
//!
//! # Tracing
//!
//! Scanner decisions are logged at `trace` level and cache lifecycle events
//! at `debug` level under the `offside_scan` target.

mod config;
mod cursor;
mod indent;
mod input;
mod registry;
mod scanner;
mod session;
mod source_buffer;
mod stack;
mod token;

pub use config::{
    ConfigError, ScanConfig, COMMENT_MARKER_VAR, DEFAULT_COMMENT_MARKER, DEFAULT_LOOKBACK_WINDOW,
    LOOKBACK_WINDOW_VAR,
};
pub use cursor::{advance_column, is_ident_byte, is_line_break, Cursor, TAB_WIDTH};
pub use indent::{line_indent, IndentCache, MAX_TRACKED_DEPTH, UNKNOWN};
pub use input::{InputStream, StreamId, EOF_BYTE};
pub use registry::IndentCacheRegistry;
pub use scanner::{
    scanners, BlockContinuationScanner, ContinuationKeywordScanner, ExternalScanner,
    LegacyKeywordScanner, LineBreakScanner, ScanContext, ScannerFlags, CONTINUATION_KEYWORDS,
    LEGACY_PRINT,
};
pub use session::ScanSession;
pub use source_buffer::SourceBuffer;
pub use stack::{ConstructKind, OpenConstruct, ParseStack, BRACKETED, COMPOUND};
pub use token::{Accepted, ScanToken, TokenKind};
