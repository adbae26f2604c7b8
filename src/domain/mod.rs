//! Domain Layer
//!
//! The resolution engine, with all file access behind the `FileSystem` port.
//!
//! ## Structure
//!
//! - `entities/` - SourceFile, Directive
//! - `value_objects/` - ExecutionDomain, DirectiveSyntax, lexical path helpers
//! - `services/` - depth sort, prerequisite expansion, DependencyResolver
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
