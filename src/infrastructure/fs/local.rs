//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Which entries directory listings report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkOptions {
    /// Skip paths matched by `.gitignore` / `.ignore` files
    pub respect_gitignore: bool,
    /// List dotfiles and dot-directories
    pub include_hidden: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            respect_gitignore: false,
            include_hidden: true,
        }
    }
}

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs {
    options: WalkOptions,
}

impl LocalFs {
    /// Create a new LocalFs instance listing every entry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WalkOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> WalkOptions {
        self.options
    }

    fn is_hidden(name: &Path) -> bool {
        name.to_str().is_some_and(|n| n.starts_with('.'))
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_shallow(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(dir).map_err(|e| FsError::from_io(dir, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| FsError::from_io(dir, e))?;
            let name = PathBuf::from(entry.file_name());
            if !self.options.include_hidden && Self::is_hidden(&name) {
                continue;
            }
            names.push(name);
        }

        if self.options.respect_gitignore {
            let walked: std::collections::HashSet<PathBuf> = self
                .walk(dir, Some(1))?
                .into_iter()
                .collect();
            names.retain(|name| walked.contains(name));
        }

        names.sort();
        Ok(names)
    }

    fn list_deep(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        self.walk(dir, None)
    }

    fn read_lines_while(
        &self,
        path: &Path,
        keep: &dyn Fn(&str) -> bool,
    ) -> FsResult<Vec<String>> {
        let file = File::open(path).map_err(|e| FsError::from_io(path, e))?;
        let mut reader = BufReader::new(file);

        // Header bytes that are not UTF-8 are replaced, not rejected.
        let mut lines = Vec::new();
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| FsError::from_io(path, e))?;
            if read == 0 {
                break;
            }

            let mut line = String::from_utf8_lossy(&buf).into_owned();
            let trimmed = line.trim_end_matches(['\r', '\n']).len();
            line.truncate(trimmed);
            if lines.is_empty() && line.starts_with(BYTE_ORDER_MARK) {
                line.remove(0);
            }
            if !keep(&line) {
                break;
            }
            lines.push(line);
        }

        Ok(lines)
    }
}

impl LocalFs {
    /// Depth-first walk with siblings sorted by name; paths relative to `dir`
    fn walk(&self, dir: &Path, max_depth: Option<usize>) -> FsResult<Vec<PathBuf>> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(self.options.respect_gitignore)
            .require_git(false)
            .hidden(!self.options.include_hidden)
            .follow_links(false)
            .max_depth(max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        let mut paths = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| FsError::Walk {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(dir) {
                paths.push(relative.to_path_buf());
            }
        }

        Ok(paths)
    }
}
