//! Execution domain value object - which tier a source file runs in
//!
//! - `Client` - files under a `client/` directory
//! - `Server` - files under a `server/` directory
//! - `Shared` - files under `shared/`, or anywhere else

use std::path::{Component, Path};

use serde::{Deserialize, Serialize};

/// Execution domain of a source file, derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionDomain {
    Client,
    Server,
    #[default]
    Shared,
}

impl ExecutionDomain {
    /// All domains, in output order
    pub const ALL: [ExecutionDomain; 3] = [
        ExecutionDomain::Client,
        ExecutionDomain::Server,
        ExecutionDomain::Shared,
    ];

    /// Classify a path by the segment nearest the leaf that names a domain.
    ///
    /// `app/server/shared/x.js` is `Shared`; `app/shared/server/x.js` is
    /// `Server`. Paths with no matching segment are `Shared`.
    pub fn classify(path: &Path) -> Self {
        path.components()
            .rev()
            .find_map(|component| match component {
                Component::Normal(segment) => segment.to_str().and_then(Self::from_segment),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Parse a single path segment (exact, case-sensitive match)
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "client" => Some(ExecutionDomain::Client),
            "server" => Some(ExecutionDomain::Server),
            "shared" => Some(ExecutionDomain::Shared),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionDomain::Client => "client",
            ExecutionDomain::Server => "server",
            ExecutionDomain::Shared => "shared",
        }
    }
}

impl std::fmt::Display for ExecutionDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExecutionDomain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_segment(&s.to_lowercase())
            .ok_or_else(|| format!("unknown execution domain '{}'", s))
    }
}
