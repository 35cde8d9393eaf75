//! Crate-level error types.

use std::fmt;

/// Errors produced by the gradient-wave crate.
#[derive(Debug)]
pub enum WaveError {
    /// The named mask image could not be found by the mask provider.
    AssetNotFound(String),
    /// The mask image has no area (zero width or height).
    InvalidMask(String),
    /// A wave configuration value is out of its valid domain.
    InvalidConfig(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for WaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetNotFound(name) => {
                write!(f, "mask asset not found: {name}")
            }
            Self::InvalidMask(msg) => write!(f, "invalid mask: {msg}"),
            Self::InvalidConfig(msg) => {
                write!(f, "invalid wave config: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for WaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WaveError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
