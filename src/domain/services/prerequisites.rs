//! Prerequisite expansion
//!
//! Walks `require` directives depth-first: a target's own prerequisites are
//! emitted before the target. Every top-level expansion keeps the chain of
//! files currently being expanded and fails with `ResolveError::Cycle` when a
//! target is already on it.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{Directive, DirectiveKind, SourceFile};
use crate::domain::ports::FileSystem;
use crate::domain::services::depth_sorter::depth_sort;
use crate::domain::value_objects::DirectiveSyntax;
use crate::error::{ResolveError, ResolveResult};

/// Everything a single resolution run reads from: the file system, the
/// directive syntax, and the root bare directive paths resolve against.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    fs: &'a dyn FileSystem,
    syntax: &'a DirectiveSyntax,
    load_root: &'a Path,
}

impl<'a> ResolveContext<'a> {
    pub fn new(fs: &'a dyn FileSystem, syntax: &'a DirectiveSyntax, load_root: &'a Path) -> Self {
        Self {
            fs,
            syntax,
            load_root,
        }
    }

    pub fn fs(&self) -> &'a dyn FileSystem {
        self.fs
    }

    pub fn syntax(&self) -> &'a DirectiveSyntax {
        self.syntax
    }

    pub fn load_root(&self) -> &'a Path {
        self.load_root
    }

    /// Describe a path through this run's file system
    pub fn open(&self, path: impl Into<PathBuf>) -> SourceFile {
        SourceFile::open(self.fs, path)
    }

    /// Expanded, deduplicated prerequisites of `file`
    pub fn prereqs(&self, file: &SourceFile) -> ResolveResult<Vec<SourceFile>> {
        let mut chain = vec![file.path().to_path_buf()];
        self.prereqs_on(file, &mut chain)
    }

    /// Files contributed by one directive, prerequisites first
    pub fn expand(&self, directive: &Directive<'_>) -> ResolveResult<Vec<SourceFile>> {
        let mut chain = vec![directive.owner().path().to_path_buf()];
        self.expand_on(directive, &mut chain)
    }

    fn prereqs_on(
        &self,
        file: &SourceFile,
        chain: &mut Vec<PathBuf>,
    ) -> ResolveResult<Vec<SourceFile>> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut prereqs = Vec::new();

        for directive in file.directives(self)? {
            for required in self.expand_on(&directive, chain)? {
                if seen.insert(required.path().to_path_buf()) {
                    prereqs.push(required);
                }
            }
        }

        Ok(prereqs)
    }

    fn expand_on(
        &self,
        directive: &Directive<'_>,
        chain: &mut Vec<PathBuf>,
    ) -> ResolveResult<Vec<SourceFile>> {
        if !directive.participates(self.syntax) {
            return Ok(Vec::new());
        }
        let Some(target) = directive.target() else {
            return Ok(Vec::new());
        };
        let owner = directive.owner();

        match directive.kind() {
            DirectiveKind::Require => {
                let required = self.locate_required(owner, target);
                if !required.exists() {
                    return Err(ResolveError::MissingFile {
                        path: target.to_path_buf(),
                        required_by: owner.path().to_path_buf(),
                    });
                }
                if !required.is_regular_file() {
                    return Err(ResolveError::InvalidFile {
                        path: required.path().to_path_buf(),
                        required_by: owner.path().to_path_buf(),
                    });
                }
                self.expand_required(owner, required, chain)
            }
            DirectiveKind::RequireTree | DirectiveKind::RequireDirectory => {
                self.expand_bulk(owner, directive.kind(), target, chain)
            }
            DirectiveKind::Unrecognized => Ok(Vec::new()),
        }
    }

    /// The literal target, or `<target>.<owner ext>` when only that exists
    /// (`require ./jquery.min` naming `jquery.min.js`)
    fn locate_required(&self, owner: &SourceFile, target: &Path) -> SourceFile {
        let literal = self.open(target);
        if literal.exists() {
            return literal;
        }
        let Some(ext) = owner.extension() else {
            return literal;
        };
        if target.extension().and_then(|e| e.to_str()) == Some(ext) {
            return literal;
        }

        let mut with_ext = target.as_os_str().to_owned();
        with_ext.push(".");
        with_ext.push(ext);
        let candidate = self.open(PathBuf::from(with_ext));
        if candidate.exists() {
            log::trace!("{} resolved to {}", target.display(), candidate.path().display());
            candidate
        } else {
            literal
        }
    }

    /// Domain and cycle checks, then the target's prerequisites followed by the target
    fn expand_required(
        &self,
        owner: &SourceFile,
        required: SourceFile,
        chain: &mut Vec<PathBuf>,
    ) -> ResolveResult<Vec<SourceFile>> {
        if required.domain() != owner.domain() {
            return Err(ResolveError::DomainMismatch {
                path: required.path().to_path_buf(),
                target_domain: required.domain(),
                required_by: owner.path().to_path_buf(),
                required_by_domain: owner.domain(),
            });
        }

        if chain.iter().any(|p| p == required.path()) {
            let mut cycle = chain.clone();
            cycle.push(required.path().to_path_buf());
            return Err(ResolveError::Cycle { chain: cycle });
        }

        log::debug!(
            "expanding {} (required by {})",
            required.path().display(),
            owner.path().display()
        );

        chain.push(required.path().to_path_buf());
        let nested = self.prereqs_on(&required, chain);
        chain.pop();

        let mut files = nested?;
        files.push(required);
        Ok(files)
    }

    /// Every valid file of the owner's extension in a directory (or subtree),
    /// depth-sorted, each expanded like a `require` target
    fn expand_bulk(
        &self,
        owner: &SourceFile,
        kind: DirectiveKind,
        dir: &Path,
        chain: &mut Vec<PathBuf>,
    ) -> ResolveResult<Vec<SourceFile>> {
        if !self.fs.exists(dir) {
            return Err(ResolveError::MissingFile {
                path: dir.to_path_buf(),
                required_by: owner.path().to_path_buf(),
            });
        }
        if !self.fs.is_dir(dir) {
            return Err(ResolveError::NotADirectory {
                path: dir.to_path_buf(),
                required_by: owner.path().to_path_buf(),
            });
        }

        let listing = if kind == DirectiveKind::RequireTree {
            self.fs.list_deep(dir)?
        } else {
            self.fs.list_shallow(dir)?
        };

        let candidates = listing
            .into_iter()
            .map(|relative| dir.join(relative))
            .filter(|path| path.as_path() != owner.path())
            .filter(|path| {
                path.extension().and_then(|ext| ext.to_str()) == owner.extension()
                    && owner.extension().is_some()
            })
            .map(|path| self.open(path))
            .filter(SourceFile::is_valid)
            .collect();

        let mut files = Vec::new();
        for candidate in depth_sort(candidates) {
            files.extend(self.expand_required(owner, candidate, chain)?);
        }
        Ok(files)
    }
}

impl std::fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveContext")
            .field("syntax", self.syntax)
            .field("load_root", &self.load_root)
            .finish_non_exhaustive()
    }
}
