//! Error types for icon rendering and generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while rendering or writing icons
#[derive(Error, Debug)]
pub enum IconError {
    /// The imaging backend cannot produce the required output format
    #[error("{capability} is not available: {hint}")]
    MissingDependency {
        capability: &'static str,
        hint: &'static str,
    },

    /// Creating or accessing a directory failed
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Encoding or writing an icon file failed
    #[error("Failed to write icon {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Icons must be at least one pixel wide
    #[error("Invalid icon size {0}: size must be a positive number of pixels")]
    InvalidSize(u32),

    /// Generator configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
