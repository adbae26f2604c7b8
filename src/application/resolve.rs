//! Resolve Use Case
//!
//! Wires a file system and directive syntax into the dependency resolver and
//! exposes the two listing modes (recursive tree, single directory).

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::domain::entities::SourceFile;
use crate::domain::ports::{FileSystem, FsError};
use crate::domain::services::{DependencyResolver, Resolution, ResolveContext};
use crate::domain::value_objects::path::normalize_lexically;
use crate::domain::value_objects::DirectiveSyntax;
use crate::error::ResolveResult;
use crate::infrastructure::fs::LocalFs;

/// How candidate files are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingMode {
    /// Every file below the directory
    #[default]
    Tree,
    /// Only files directly inside the directory
    Directory,
}

/// A finished resolution together with the absolute directory it ran on
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOutcome {
    pub root: PathBuf,
    #[serde(flatten)]
    pub resolution: Resolution,
}

/// One directive line as reported by `loadorder directives`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveReport {
    pub text: String,
    pub kind: &'static str,
    pub target: Option<PathBuf>,
    pub valid: bool,
    pub participates: bool,
}

/// Resolve Use Case
pub struct ResolveUseCase<F: FileSystem> {
    fs: F,
    syntax: DirectiveSyntax,
}

impl ResolveUseCase<LocalFs> {
    /// Local disk with walk options and directive syntax taken from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            LocalFs::with_options(config.walk_options()),
            config.directive_syntax(),
        )
    }
}

impl<F: FileSystem> ResolveUseCase<F> {
    pub fn new(fs: F, syntax: DirectiveSyntax) -> Self {
        Self { fs, syntax }
    }

    pub fn syntax(&self) -> &DirectiveSyntax {
        &self.syntax
    }

    /// Resolve `dir` in the given listing mode. `dir` is also the load root
    /// that bare directive paths resolve against.
    pub fn execute(&self, mode: ListingMode, dir: &Path) -> ResolveResult<ResolveOutcome> {
        let root = absolute(dir)?;
        let ctx = ResolveContext::new(&self.fs, &self.syntax, &root);
        let resolver = DependencyResolver::new(ctx);

        log::info!("resolving {:?} listing of {}", mode, root.display());
        let resolution = match mode {
            ListingMode::Tree => resolver.resolve_tree(&root)?,
            ListingMode::Directory => resolver.resolve_directory(&root)?,
        };

        Ok(ResolveOutcome { root, resolution })
    }

    /// Parse the directive header of one file without expanding it
    pub fn directives(&self, file: &Path, load_root: &Path) -> ResolveResult<Vec<DirectiveReport>> {
        let file = absolute(file)?;
        let load_root = absolute(load_root)?;
        let ctx = ResolveContext::new(&self.fs, &self.syntax, &load_root);

        let source = SourceFile::open(&self.fs, file.as_path());
        if !source.is_valid() {
            return Err(FsError::NotFound(file).into());
        }

        let reports = source
            .header_directives(&ctx)?
            .iter()
            .map(|directive| DirectiveReport {
                text: directive.raw().to_string(),
                kind: directive.kind().as_str(),
                target: directive.target().map(Path::to_path_buf),
                valid: directive.is_valid(),
                participates: directive.participates(&self.syntax),
            })
            .collect();

        Ok(reports)
    }
}

/// Resolve every file below `root` on the local disk with default settings
pub fn resolve_directory_tree(root: &Path) -> ResolveResult<Resolution> {
    ResolveUseCase::new(LocalFs::new(), DirectiveSyntax::default())
        .execute(ListingMode::Tree, root)
        .map(|outcome| outcome.resolution)
}

/// Resolve the files directly inside `dir` on the local disk with default settings
pub fn resolve_directory(dir: &Path) -> ResolveResult<Resolution> {
    ResolveUseCase::new(LocalFs::new(), DirectiveSyntax::default())
        .execute(ListingMode::Directory, dir)
        .map(|outcome| outcome.resolution)
}

fn absolute(path: &Path) -> ResolveResult<PathBuf> {
    let absolute = std::path::absolute(path).map_err(|e| FsError::from_io(path, e))?;
    Ok(normalize_lexically(&absolute))
}
