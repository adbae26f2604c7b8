//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Output formatting (text/JSON)

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, DomainArg};
pub use output::{render_directives, render_outcome, OutputFormat, RenderOptions};
