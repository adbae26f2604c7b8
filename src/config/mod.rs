//! Configuration module for loadorder
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LOADORDER_*)
//! 3. `--config <path>`, else project config (`<root>/loadorder.toml`)
//! 4. User config (`~/.config/loadorder/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, OutputConfig, ResolveConfig, Verbosity, WalkConfig};
