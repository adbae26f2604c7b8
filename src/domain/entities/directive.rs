//! Directive entity - one dependency declaration from a file's leading comments
//!
//! ```text
//! //= require ./util
//! #= require_tree ./models
//! ```

use std::path::{Path, PathBuf};

use crate::domain::entities::SourceFile;
use crate::domain::services::ResolveContext;
use crate::domain::value_objects::path::resolve_target;
use crate::domain::value_objects::DirectiveSyntax;
use crate::error::ResolveResult;

/// Directive keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `require <file>`
    Require,
    /// `require_tree <dir>` - every file below a directory
    RequireTree,
    /// `require_directory <dir>` - every file directly in a directory
    RequireDirectory,
    /// Any other keyword
    Unrecognized,
}

impl DirectiveKind {
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "require" => DirectiveKind::Require,
            "require_tree" => DirectiveKind::RequireTree,
            "require_directory" => DirectiveKind::RequireDirectory,
            _ => DirectiveKind::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveKind::Require => "require",
            DirectiveKind::RequireTree => "require_tree",
            DirectiveKind::RequireDirectory => "require_directory",
            DirectiveKind::Unrecognized => "unrecognized",
        }
    }

    pub fn is_bulk(&self) -> bool {
        matches!(
            self,
            DirectiveKind::RequireTree | DirectiveKind::RequireDirectory
        )
    }
}

/// A parsed directive. Borrows the file it came from.
#[derive(Debug, Clone)]
pub struct Directive<'a> {
    owner: &'a SourceFile,
    raw: String,
    kind: DirectiveKind,
    target: Option<PathBuf>,
}

impl<'a> Directive<'a> {
    /// Parse directive text (marker already stripped and trimmed).
    ///
    /// The first whitespace splits keyword from argument. Relative arguments
    /// resolve against the owner's directory, bare ones against `load_root`.
    /// A `require` target without an extension takes the owner's extension.
    pub fn parse(owner: &'a SourceFile, raw: &str, load_root: &Path) -> Self {
        let raw = raw.trim();
        let (keyword, argument) = raw
            .split_once(char::is_whitespace)
            .map(|(keyword, rest)| (keyword, rest.trim()))
            .unwrap_or((raw, ""));
        let kind = DirectiveKind::from_keyword(keyword);

        let target = match kind {
            DirectiveKind::Unrecognized => None,
            _ if argument.is_empty() => None,
            _ => {
                let mut target = resolve_target(argument, owner.directory(), load_root);
                if kind == DirectiveKind::Require && target.extension().is_none() {
                    if let Some(ext) = owner.extension() {
                        target.set_extension(ext);
                    }
                }
                Some(target)
            }
        };

        Self {
            owner,
            raw: raw.to_string(),
            kind,
            target,
        }
    }

    pub fn owner(&self) -> &'a SourceFile {
        self.owner
    }

    /// Directive text without its comment marker
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// Resolved, normalised target path
    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    /// A `require` with a non-blank path
    pub fn is_valid(&self) -> bool {
        self.kind == DirectiveKind::Require && self.target.is_some()
    }

    /// Whether this directive contributes files under `syntax`
    pub fn participates(&self, syntax: &DirectiveSyntax) -> bool {
        self.is_valid() || (syntax.expands_bulk() && self.kind.is_bulk() && self.target.is_some())
    }

    /// Files this directive brings in, each preceded by its own prerequisites.
    ///
    /// May contain paths also produced by sibling directives; callers dedupe.
    pub fn to_files(&self, ctx: &ResolveContext<'_>) -> ResolveResult<Vec<SourceFile>> {
        ctx.expand(self)
    }
}
