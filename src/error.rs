//! Error types and exit codes for docdex

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for docdex operations
#[derive(Error, Debug)]
pub enum DocdexError {
    #[error("Documentation file not found: {path}")]
    DocsNotFound { path: String },

    #[error("Malformed documentation JSON: {message}")]
    MalformedDocs { message: String },

    #[error("Package not found: {path}")]
    PackageNotFound { path: String },

    #[error("Module not found: {module} (in package {package})")]
    ModuleNotFound { package: String, module: String },

    #[error("Package tree deeper than {limit} levels; refusing to recurse (cyclic input?)")]
    DepthExceeded { limit: usize },

    #[error("JSON serialization failed: {message}")]
    Serialization { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DocdexError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Malformed documentation JSON
    /// - 3: Package or module not found
    /// - 4: Traversal depth limit exceeded
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::DocsNotFound { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
            Self::MalformedDocs { .. } => ExitCode::from(2),
            Self::Serialization { .. } => ExitCode::from(2),
            Self::PackageNotFound { .. } => ExitCode::from(3),
            Self::ModuleNotFound { .. } => ExitCode::from(3),
            Self::DepthExceeded { .. } => ExitCode::from(4),
        }
    }
}

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, DocdexError>;
