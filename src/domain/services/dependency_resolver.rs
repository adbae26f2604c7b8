//! Dependency resolver
//!
//! Turns a flat candidate listing into one ordered sequence per execution
//! domain: dependencies before dependents, no duplicates, and the depth sort
//! as the order for files nothing constrains.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::entities::SourceFile;
use crate::domain::services::depth_sorter::{depth_sort, partition};
use crate::domain::services::ResolveContext;
use crate::domain::value_objects::ExecutionDomain;
use crate::error::{ResolveError, ResolveResult};

/// Ordered files per execution domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub client: Vec<PathBuf>,
    pub server: Vec<PathBuf>,
    pub shared: Vec<PathBuf>,
}

impl Resolution {
    pub fn get(&self, domain: ExecutionDomain) -> &[PathBuf] {
        match domain {
            ExecutionDomain::Client => &self.client,
            ExecutionDomain::Server => &self.server,
            ExecutionDomain::Shared => &self.shared,
        }
    }

    fn slot(&mut self, domain: ExecutionDomain) -> &mut Vec<PathBuf> {
        match domain {
            ExecutionDomain::Client => &mut self.client,
            ExecutionDomain::Server => &mut self.server,
            ExecutionDomain::Shared => &mut self.shared,
        }
    }

    /// Domains with their ordered files, in `client`, `server`, `shared` order
    pub fn iter(&self) -> impl Iterator<Item = (ExecutionDomain, &[PathBuf])> {
        ExecutionDomain::ALL
            .into_iter()
            .map(move |domain| (domain, self.get(domain)))
    }

    pub fn len(&self) -> usize {
        self.client.len() + self.server.len() + self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolves listings of a directory into a `Resolution`
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    ctx: ResolveContext<'a>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(ctx: ResolveContext<'a>) -> Self {
        Self { ctx }
    }

    /// Resolve every file below `root` (recursive listing)
    pub fn resolve_tree(&self, root: &Path) -> ResolveResult<Resolution> {
        self.ensure_directory(root)?;
        let listing = self.ctx.fs().list_deep(root)?;
        self.resolve_listing(root, listing)
    }

    /// Resolve the files directly inside `dir`
    pub fn resolve_directory(&self, dir: &Path) -> ResolveResult<Resolution> {
        self.ensure_directory(dir)?;
        let listing = self.ctx.fs().list_shallow(dir)?;
        self.resolve_listing(dir, listing)
    }

    /// Resolve a listing of paths relative to `base`.
    ///
    /// Extensionless entries and anything that is not a regular file are
    /// dropped before partitioning. The first error aborts every domain.
    pub fn resolve_listing(&self, base: &Path, listing: Vec<PathBuf>) -> ResolveResult<Resolution> {
        let candidates: Vec<SourceFile> = listing
            .into_iter()
            .filter(|relative| relative.extension().is_some())
            .map(|relative| self.ctx.open(base.join(relative)))
            .filter(SourceFile::is_valid)
            .collect();

        log::debug!(
            "resolving {} candidate files under {}",
            candidates.len(),
            base.display()
        );

        let groups: BTreeMap<ExecutionDomain, Vec<SourceFile>> = partition(candidates);
        let mut resolution = Resolution::default();
        for (domain, files) in groups {
            let ordered = self.resolve_group(&depth_sort(files))?;
            log::debug!("{}: {} files", domain, ordered.len());
            *resolution.slot(domain) = ordered;
        }

        Ok(resolution)
    }

    /// Emit each file after its prerequisites, skipping paths already emitted
    pub fn resolve_group(&self, ordered: &[SourceFile]) -> ResolveResult<Vec<PathBuf>> {
        let mut emitted: HashSet<PathBuf> = HashSet::new();
        let mut sequence = Vec::with_capacity(ordered.len());

        for file in ordered {
            for prereq in file.prereqs(&self.ctx)? {
                if emitted.insert(prereq.path().to_path_buf()) {
                    sequence.push(prereq.path().to_path_buf());
                }
            }
            if emitted.insert(file.path().to_path_buf()) {
                sequence.push(file.path().to_path_buf());
            }
        }

        Ok(sequence)
    }

    fn ensure_directory(&self, dir: &Path) -> ResolveResult<()> {
        if self.ctx.fs().is_dir(dir) {
            Ok(())
        } else {
            Err(ResolveError::DirectoryNotFound {
                path: dir.to_path_buf(),
            })
        }
    }
}
