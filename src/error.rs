//! Error types for loadorder
//!
//! Uses `thiserror` for library errors. Every resolution error is fatal to the
//! whole invocation: there is no partial result.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;
use crate::domain::value_objects::ExecutionDomain;

/// Result type alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors raised while expanding directives into an ordered file list
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A `require` target does not exist
    #[error("required file not found: {path} (required by {required_by})")]
    MissingFile { path: PathBuf, required_by: PathBuf },

    /// A `require` target exists but is not a regular file
    #[error("required path is not a regular file: {path} (required by {required_by})")]
    InvalidFile { path: PathBuf, required_by: PathBuf },

    /// A bulk directive target exists but is not a directory
    #[error("required path is not a directory: {path} (required by {required_by})")]
    NotADirectory { path: PathBuf, required_by: PathBuf },

    /// A target lives in a different execution domain than the requiring file
    #[error(
        "cannot require {target_domain} file {path} from {required_by_domain} file {required_by}"
    )]
    DomainMismatch {
        path: PathBuf,
        target_domain: ExecutionDomain,
        required_by: PathBuf,
        required_by_domain: ExecutionDomain,
    },

    /// The directory handed to an entry point is missing or not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// A prerequisite chain came back to a file still being expanded
    #[error("dependency cycle detected: {}", format_chain(.chain))]
    Cycle { chain: Vec<PathBuf> },

    /// Filesystem access failed
    #[error(transparent)]
    Fs(#[from] FsError),
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Errors raised while loading configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {file}: {source}")]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the config schema
    #[error("invalid config {file}: {message}")]
    Invalid { file: PathBuf, message: String },
}
