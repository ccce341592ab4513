//! Error types for modlocatelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating modules
#[derive(Error, Debug)]
pub enum LocateError {
    /// An include/exclude entry is not a valid regular expression
    #[error("invalid pattern '{pattern}': {message}")]
    PatternCompilation { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Failed to read or parse an options file
    #[error("invalid config file '{path}': {message}")]
    Config { path: PathBuf, message: String },

    /// Directory traversal failed
    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}
