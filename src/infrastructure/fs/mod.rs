//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod local;

pub use local::{LocalFs, WalkOptions};
