//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --quiet, --config, --domain, --absolute)
//!   are inherited by all subcommands

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::ExecutionDomain;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainArg {
    Client,
    Server,
    Shared,
}

impl From<DomainArg> for ExecutionDomain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Client => ExecutionDomain::Client,
            DomainArg::Server => ExecutionDomain::Server,
            DomainArg::Shared => ExecutionDomain::Shared,
        }
    }
}

/// loadorder - resolve require-directive load order per execution domain
#[derive(Parser, Debug)]
#[command(name = "loadorder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file (default: <DIR>/loadorder.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only print one execution domain
    #[arg(long, global = true, value_enum)]
    pub domain: Option<DomainArg>,

    /// Print absolute paths instead of paths relative to DIR
    #[arg(long, global = true)]
    pub absolute: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every file below a directory
    Tree {
        /// Project root
        #[arg(default_value = ".")]
        root: PathBuf,
    },

    /// Resolve only the files directly inside a directory
    Dir {
        /// Directory to resolve
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Show the parsed directive header of a file (debugging)
    Directives {
        /// Source file to inspect
        file: PathBuf,

        /// Directory bare directive paths resolve against
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}
