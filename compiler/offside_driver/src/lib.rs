//! Reference host for `offside_scan`.
//!
//! [`LayoutDriver`] walks a source file left to right with a small construct
//! stack and calls the external scanners wherever a real parser would. The
//! `offside` binary prints the resulting layout tokens one per line.

mod error;
mod layout;
mod line_index;
mod stack;

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Once;

use offside_scan::ScanConfig;

pub use error::DriverError;
pub use layout::{LayoutDriver, LayoutToken, COMPOUND_HEADS};
pub use line_index::LineIndex;
pub use stack::ConstructStack;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, so the binary stays silent by
/// default. Safe to call more than once.
///
/// ```bash
/// RUST_LOG=offside_scan=trace offside file.py
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        use tracing_subscriber::prelude::*;
        use tracing_subscriber::{fmt, EnvFilter};

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .with(EnvFilter::from_default_env())
            .init();
    });
}

/// Scanner configuration from the `OFFSIDE_*` environment variables.
pub fn config_from_env() -> Result<ScanConfig, DriverError> {
    Ok(ScanConfig::from_env()?)
}

/// Render tokens as `line:col kind` rows.
pub fn format_tokens(source: &str, tokens: &[LayoutToken]) -> String {
    let index = LineIndex::new(source);
    let mut out = String::new();
    for token in tokens {
        let (line, col) = index.line_col(token.start);
        let _ = writeln!(out, "{line}:{col} {}", token.kind);
    }
    out
}

/// Read `path`, lay it out, and render the tokens.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()))]
pub fn layout_file(path: &Path, config: ScanConfig) -> Result<String, DriverError> {
    let source = std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let tokens = LayoutDriver::new(&source, config).run();
    Ok(format_tokens(&source, &tokens))
}
