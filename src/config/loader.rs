//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::env_validator::{levenshtein, parse_bool, EnvVarValidator};
use super::types::{Config, Verbosity};
use crate::error::ConfigError;

/// File name of the per-project config, looked up in the resolved directory
pub const PROJECT_CONFIG_FILE: &str = "loadorder.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the first config that applies, then layer env overrides on top:
/// 1. `explicit` (must exist)
/// 2. `<project_root>/loadorder.toml`
/// 3. `<user config dir>/loadorder/config.toml`
/// 4. built-in defaults
pub fn discover(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_dir().map(|dir| dir.join("loadorder/config.toml")));

    for candidate in candidates {
        if candidate.is_file() {
            log::debug!("using config {}", candidate.display());
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (LOADORDER_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    const BOOL_VALUES: &[&str] = &["true", "false", "1", "0", "yes", "no", "on", "off"];

    if let Ok(value) = std::env::var("LOADORDER_EXPAND_BULK") {
        let validator = EnvVarValidator::new("LOADORDER_EXPAND_BULK", BOOL_VALUES);
        config.resolve.expand_bulk_directives =
            validator.parse(&value, parse_bool, config.resolve.expand_bulk_directives);
    }

    if let Ok(value) = std::env::var("LOADORDER_RESPECT_GITIGNORE") {
        let validator = EnvVarValidator::new("LOADORDER_RESPECT_GITIGNORE", BOOL_VALUES);
        config.walk.respect_gitignore =
            validator.parse(&value, parse_bool, config.walk.respect_gitignore);
    }

    if let Ok(value) = std::env::var("LOADORDER_INCLUDE_HIDDEN") {
        let validator = EnvVarValidator::new("LOADORDER_INCLUDE_HIDDEN", BOOL_VALUES);
        config.walk.include_hidden =
            validator.parse(&value, parse_bool, config.walk.include_hidden);
    }

    if let Ok(value) = std::env::var("LOADORDER_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new("LOADORDER_VERBOSITY", Verbosity::NAMES)
            .parse(&value, Verbosity::parse, config.output.verbosity);
    }

    config
}

/// XDG config directory, falling back to the platform config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "markers",
        "walk",
        "respect_gitignore",
        "include_hidden",
        "resolve",
        "expand_bulk_directives",
        "output",
        "verbosity",
        "relative_paths",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
