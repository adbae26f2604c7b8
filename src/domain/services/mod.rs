//! Domain Services
//!
//! Resolution logic over domain entities. All I/O goes through the
//! `FileSystem` port carried by `ResolveContext`.

mod dependency_resolver;
mod depth_sorter;
mod prerequisites;

pub use dependency_resolver::{DependencyResolver, Resolution};
pub use depth_sorter::{depth_sort, partition};
pub use prerequisites::ResolveContext;
