//! Error types for Mason
//!
//! Uses `thiserror` for library errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Mason operations
pub type MasonResult<T> = Result<T, MasonError>;

/// Main error type for Mason operations
#[derive(Error, Debug)]
pub enum MasonError {
    /// User-supplied glob pattern with invalid syntax
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Pattern lists were individually valid but the matcher could not be built
    #[error("failed to build pattern matcher: {0}")]
    MatcherBuild(String),

    /// Project description file could not be parsed
    #[error("invalid project file {file}: {message}")]
    InvalidProjectFile { file: PathBuf, message: String },

    /// A build collaborator (compiler driver, package restore) reported failure
    #[error("driver error: {message}")]
    Driver { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
