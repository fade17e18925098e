//! Custom error types for sprite slicing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Slicing error types
#[derive(Debug)]
pub enum SliceError {
    /// Source image is missing or cannot be decoded
    InputError(PathBuf, String),
    /// Output directory cannot be created
    DirectoryError(PathBuf, io::Error),
    /// One or more extracted objects could not be written
    WriteError(String),
    /// Invalid configuration value or configuration file
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::InputError(path, msg) => write!(f, "Cannot read input image {}: {}", path.display(), msg),
            SliceError::DirectoryError(path, e) => write!(f, "Cannot create output directory {}: {}", path.display(), e),
            SliceError::WriteError(msg) => write!(f, "Write error: {}", msg),
            SliceError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::GenericError(msg) => write!(f, "Slicing error: {}", msg),
        }
    }
}

impl std::error::Error for SliceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SliceError::DirectoryError(_, e) | SliceError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

/// Result type for slicing operations
pub type SliceResult<T> = Result<T, SliceError>;
