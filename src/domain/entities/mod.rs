//! Domain Entities
//!
//! - `SourceFile` - a candidate file and the attributes derived from its path
//! - `Directive` - a dependency declaration parsed from a file's header

mod directive;
mod source_file;

pub use directive::{Directive, DirectiveKind};
pub use source_file::SourceFile;
