//! Error types for brickpack-core.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for brickpack-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while flattening a subpackage.
#[derive(Debug, Error)]
pub enum Error {
    /// The subpackage directory is not usable (missing, not a directory,
    /// or has no derivable name).
    #[error("invalid subpackage: {0}")]
    InvalidSubpackage(String),

    /// Failed to read a source file.
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Failed to write the notebook file.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// A dependency names a module that does not exist in the subpackage.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// A dependency name matches more than one module.
    #[error("ambiguous module name: {0}")]
    AmbiguousModule(String),

    /// Cyclic dependency detected among the modules.
    #[error("cyclic dependency detected: {0}")]
    CyclicDependency(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
