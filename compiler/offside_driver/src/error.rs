use std::io;
use std::path::PathBuf;

use offside_scan::ConfigError;
use thiserror::Error;

/// Failures the `offside` binary reports before exiting.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
