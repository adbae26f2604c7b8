//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod directive_syntax;
mod execution_domain;
pub mod path;

pub use directive_syntax::{DirectiveSyntax, HASH_MARKER, SLASH_MARKER};
pub use execution_domain::ExecutionDomain;
