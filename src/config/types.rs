//! Configuration types

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader;
use super::ConfigWarning;
use crate::domain::value_objects::DirectiveSyntax;
use crate::error::ConfigError;
use crate::infrastructure::fs::WalkOptions;

/// Directory walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkConfig {
    #[serde(default)]
    pub respect_gitignore: bool,

    #[serde(default = "default_true")]
    pub include_hidden: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: true,
        }
    }
}

/// Resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResolveConfig {
    /// Expand `require_tree` / `require_directory` instead of ignoring them
    #[serde(default)]
    pub expand_bulk_directives: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    /// Print paths relative to the resolved directory
    #[serde(default = "default_true")]
    pub relative_paths: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            relative_paths: true,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const NAMES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Extension → directive marker, merged over the built-in table
    #[serde(default)]
    pub markers: BTreeMap<String, String>,

    #[serde(default)]
    pub walk: WalkConfig,

    #[serde(default)]
    pub resolve: ResolveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the project config, the user config, or defaults
    pub fn discover(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (LOADORDER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Directive syntax with configured markers applied over the defaults
    pub fn directive_syntax(&self) -> DirectiveSyntax {
        DirectiveSyntax::default()
            .with_markers(self.markers.clone())
            .with_bulk_expansion(self.resolve.expand_bulk_directives)
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            respect_gitignore: self.walk.respect_gitignore,
            include_hidden: self.walk.include_hidden,
        }
    }
}
