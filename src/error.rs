//! # Error Handling
//!
//! Centralized error handling for `depkeeper`, built on `thiserror`.
//!
//! The error taxonomy mirrors the three failure classes the tool can hit:
//!
//! - **`Validation`**: malformed command input (duration strings, regex
//!   patterns) caught by the settings pipeline; terminal for the command and
//!   never retried.
//! - **`Path`**: malformed inputs to package-path construction (blank base or
//!   relative path); terminal for the operation that attempted to build the
//!   path.
//! - **`RestoreFailure`**: an external restore invocation did not complete
//!   successfully; aborts the remaining solutions in the batch.
//!
//! Infrastructure errors (I/O, regex compilation, glob patterns) are wrapped
//! with `#[from]` conversions. All failures surface as explicit `Result`
//! values; only the outermost command boundary converts them into a logged
//! message and an exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for depkeeper operations
#[derive(Error, Debug)]
pub enum Error {
    /// Command input failed settings validation.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A package path could not be constructed from its inputs.
    #[error("Path error: {message}")]
    Path { message: String },

    /// An external restore invocation failed for one solution file.
    #[error("Restore failed for {}: {message}", solution.display())]
    RestoreFailure { solution: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
