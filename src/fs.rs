//! File system implementations
//!
//! Re-exports the on-disk `LocalFs` and, for tests, an in-memory
//! `MockFileSystem` implementing the same `FileSystem` port.

pub use crate::domain::ports::{FileSystem, FsError, FsResult};
pub use crate::infrastructure::fs::{LocalFs, WalkOptions};

#[cfg(test)]
pub use mock::MockFileSystem;
