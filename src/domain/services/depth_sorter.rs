//! Domain partitioning and depth sort
//!
//! Produces the canonical base order that dependency expansion starts from.
//! It is not dependency aware; it only makes unrelated files come out in a
//! stable, deepest-directory-first order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::domain::entities::SourceFile;
use crate::domain::value_objects::path::segment_count;
use crate::domain::value_objects::ExecutionDomain;

/// Split files by execution domain. Every domain is present, possibly empty.
pub fn partition(files: Vec<SourceFile>) -> BTreeMap<ExecutionDomain, Vec<SourceFile>> {
    let mut groups: BTreeMap<ExecutionDomain, Vec<SourceFile>> = ExecutionDomain::ALL
        .iter()
        .map(|domain| (*domain, Vec::new()))
        .collect();

    for file in files {
        groups.entry(file.domain()).or_default().push(file);
    }

    groups
}

/// Group files by directory, deepest directories first.
///
/// Directories of equal depth keep the order in which they first appear;
/// files keep their listing order within a directory.
pub fn depth_sort(files: Vec<SourceFile>) -> Vec<SourceFile> {
    let mut groups: Vec<(PathBuf, Vec<SourceFile>)> = Vec::new();
    let mut slots: HashMap<PathBuf, usize> = HashMap::new();

    for file in files {
        match slots.get(file.directory()) {
            Some(&slot) => groups[slot].1.push(file),
            None => {
                let directory = file.directory().to_path_buf();
                slots.insert(directory.clone(), groups.len());
                groups.push((directory, vec![file]));
            }
        }
    }

    groups.sort_by_key(|(directory, _)| Reverse(segment_count(directory)));
    groups.into_iter().flat_map(|(_, files)| files).collect()
}
