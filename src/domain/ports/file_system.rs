//! FileSystem port - abstraction over the read-only file access the resolver needs
//!
//! The domain layer never touches the disk directly; it asks this trait for
//! existence checks, directory listings and leading lines of a file.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File or directory not found
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed
    #[error("failed to walk {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

impl FsError {
    /// Attach the offending path to an `io::Error`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a regular file (only meaningful when it exists)
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the immediate children of `dir`, sorted by name
    fn list_shallow(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Paths of every file and directory below `dir`, relative to `dir`,
    /// depth-first with siblings sorted by name
    fn list_deep(&self, dir: &Path) -> FsResult<Vec<PathBuf>>;

    /// Read lines from the top of `path` while `keep` returns true.
    ///
    /// Stops at the first rejected line; any open handle is released on return.
    fn read_lines_while(&self, path: &Path, keep: &dyn Fn(&str) -> bool)
        -> FsResult<Vec<String>>;
}
