//! loadorder - load order resolution for require-directive source trees
//!
//! Source files declare their dependencies in leading comment directives
//! (`//= require ./util`, `#= require ./db`). loadorder classifies every file
//! into an execution domain (`client`, `server`, `shared`) by its nearest
//! matching directory, then produces one ordered list per domain in which each
//! file appears once and after everything it requires.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{resolve_directory, resolve_directory_tree, ListingMode, ResolveUseCase};
pub use config::Config;
pub use domain::entities::{Directive, DirectiveKind, SourceFile};
pub use domain::ports::FileSystem;
pub use domain::services::{DependencyResolver, Resolution, ResolveContext};
pub use domain::value_objects::{DirectiveSyntax, ExecutionDomain};
pub use error::{ConfigError, ResolveError, ResolveResult};
pub use infrastructure::fs::{LocalFs, WalkOptions};
