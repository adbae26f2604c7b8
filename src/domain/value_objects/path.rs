//! Lexical path helpers
//!
//! Directive targets may name files that do not exist yet, so paths are
//! normalised without touching the file system (no `canonicalize`).

use std::path::{Component, Path, PathBuf};

/// Remove `.` segments and fold `..` into the preceding segment.
///
/// A `..` that would climb above the root of an absolute path is dropped;
/// leading `..` segments of a relative path are kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            Component::Normal(segment) => {
                normalized.push(segment);
                depth += 1;
            }
        }
    }

    normalized
}

/// Number of normal segments in a directory path
pub fn segment_count(path: &Path) -> usize {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}

/// Resolve a directive argument to a normalised path.
///
/// - `./x`, `../x` (any leading `.`) resolve against `owner_dir`
/// - absolute paths are kept
/// - anything else resolves against `load_root`
pub fn resolve_target(raw: &str, owner_dir: &Path, load_root: &Path) -> PathBuf {
    let raw_path = Path::new(raw);
    let joined = if raw.starts_with('.') {
        owner_dir.join(raw_path)
    } else if raw_path.is_absolute() {
        raw_path.to_path_buf()
    } else {
        load_root.join(raw_path)
    };
    normalize_lexically(&joined)
}
