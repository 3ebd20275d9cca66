//! Scanner configuration.
//!
//! The defaults describe the grammar the scanners were written for: `#`
//! comments and a 50-byte lookback window for cold indentation lookups. Hosts
//! may override either, in code or through the environment:
//!
//! - `OFFSIDE_LOOKBACK_WINDOW`: bytes read backwards when the indentation
//!   cache misses. Indentation deeper than this is approximated.
//! - `OFFSIDE_COMMENT_MARKER`: single printable ASCII byte starting a line
//!   comment.
//!
//! Tab stops are fixed at [`TAB_WIDTH`](crate::TAB_WIDTH) columns and are not
//! configurable.

use crate::cursor::is_ident_byte;

/// Default lookback window for cold indentation lookups, in bytes.
pub const DEFAULT_LOOKBACK_WINDOW: u32 = 50;

/// Default line comment marker.
pub const DEFAULT_COMMENT_MARKER: u8 = b'#';

/// Environment variable overriding [`ScanConfig::lookback_window`].
pub const LOOKBACK_WINDOW_VAR: &str = "OFFSIDE_LOOKBACK_WINDOW";

/// Environment variable overriding [`ScanConfig::comment_marker`].
pub const COMMENT_MARKER_VAR: &str = "OFFSIDE_COMMENT_MARKER";

/// Invalid scanner configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("lookback window must be at least one byte")]
    ZeroLookbackWindow,
    #[error("comment marker {marker:?} must be printable ASCII punctuation other than a bracket")]
    InvalidCommentMarker { marker: char },
    #[error("environment variable {var} has invalid value {value:?}")]
    InvalidEnvValue { var: &'static str, value: String },
}

/// Tunables shared by every scanner in a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Bytes read backwards from a position when its indentation is not
    /// cached.
    pub lookback_window: u32,
    /// Byte that starts a line comment.
    pub comment_marker: u8,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            lookback_window: DEFAULT_LOOKBACK_WINDOW,
            comment_marker: DEFAULT_COMMENT_MARKER,
        }
    }
}

impl ScanConfig {
    #[must_use]
    pub fn with_lookback_window(mut self, bytes: u32) -> Self {
        self.lookback_window = bytes;
        self
    }

    #[must_use]
    pub fn with_comment_marker(mut self, marker: u8) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Check the configuration, returning it unchanged when valid.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.lookback_window == 0 {
            return Err(ConfigError::ZeroLookbackWindow);
        }
        let marker = self.comment_marker;
        if !marker.is_ascii_graphic()
            || is_ident_byte(marker)
            || matches!(marker, b'(' | b')' | b'[' | b']' | b'{' | b'}')
        {
            return Err(ConfigError::InvalidCommentMarker {
                marker: char::from(marker),
            });
        }
        Ok(self)
    }

    /// Defaults overridden by the `OFFSIDE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `OFFSIDE_*`
    /// variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(LOOKBACK_WINDOW_VAR) {
            config.lookback_window =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        var: LOOKBACK_WINDOW_VAR,
                        value: value.clone(),
                    })?;
        }

        if let Some(value) = lookup(COMMENT_MARKER_VAR) {
            if value.len() != 1 {
                return Err(ConfigError::InvalidEnvValue {
                    var: COMMENT_MARKER_VAR,
                    value,
                });
            }
            config.comment_marker = value.as_bytes()[0];
        }

        config.validate()
    }
}
