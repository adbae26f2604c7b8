//! SourceFile entity - one candidate file in a resolution run
//!
//! Existence and file type are sampled once, at construction. Directives are
//! re-read from disk on every call; nothing is memoised across calls.

use std::path::{Path, PathBuf};

use crate::domain::entities::Directive;
use crate::domain::ports::{FileSystem, FsResult};
use crate::domain::services::ResolveContext;
use crate::domain::value_objects::ExecutionDomain;
use crate::error::ResolveResult;

/// A source file identified by its absolute path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    directory: PathBuf,
    extension: Option<String>,
    domain: ExecutionDomain,
    exists: bool,
    is_regular_file: bool,
}

impl SourceFile {
    /// Describe `path`, checking existence and file type through `fs`
    pub fn open(fs: &dyn FileSystem, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let exists = fs.exists(&path);
        let is_regular_file = exists && fs.is_file(&path);
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string);
        let domain = ExecutionDomain::classify(&path);

        Self {
            path,
            directory,
            extension,
            domain,
            exists,
            is_regular_file,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parent directory of the file
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn domain(&self) -> ExecutionDomain {
        self.domain
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn is_regular_file(&self) -> bool {
        self.is_regular_file
    }

    /// Exists and is a regular file
    pub fn is_valid(&self) -> bool {
        self.exists && self.is_regular_file
    }

    /// Directives from the leading comment block that take part in resolution.
    ///
    /// Unrecognized keywords and directives without a path are dropped here.
    pub fn directives(&self, ctx: &ResolveContext<'_>) -> FsResult<Vec<Directive<'_>>> {
        let mut directives = self.header_directives(ctx)?;
        directives.retain(|directive| directive.participates(ctx.syntax()));
        Ok(directives)
    }

    /// Every directive line of the leading comment block, valid or not.
    ///
    /// Only lines starting with the extension's marker are read, and reading
    /// stops at the first line that does not. Extensions without a marker
    /// return an empty list without opening the file.
    pub fn header_directives(&self, ctx: &ResolveContext<'_>) -> FsResult<Vec<Directive<'_>>> {
        let Some(marker) = self.extension().and_then(|ext| ctx.syntax().marker_for(ext)) else {
            return Ok(Vec::new());
        };

        let lines = ctx
            .fs()
            .read_lines_while(&self.path, &|line: &str| line.starts_with(marker))?;

        let directives = lines
            .iter()
            .filter_map(|line| line.strip_prefix(marker))
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| Directive::parse(self, text, ctx.load_root()))
            .inspect(|directive| {
                log::trace!("{}: {} ({:?})", self.path.display(), directive.raw(), directive.kind())
            })
            .collect();

        Ok(directives)
    }

    /// Direct prerequisites, each already preceded by its own prerequisites.
    ///
    /// Deduplicated by path, first occurrence wins.
    pub fn prereqs(&self, ctx: &ResolveContext<'_>) -> ResolveResult<Vec<SourceFile>> {
        ctx.prereqs(self)
    }
}
