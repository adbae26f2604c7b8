//! Property tests for whole-tree resolution on generated acyclic trees.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use loadorder::{resolve_directory_tree, ExecutionDomain, ResolveError};

const DOMAINS: [&str; 3] = ["client", "server", "shared"];
const SUBDIRS: [&str; 4] = ["", "a", "a/b", "c"];

#[derive(Debug, Clone)]
struct GeneratedFile {
    domain: usize,
    subdir: usize,
    /// Indices of earlier files this one requires
    requires: Vec<usize>,
}

impl GeneratedFile {
    fn relative(&self, index: usize) -> String {
        let subdir = SUBDIRS[self.subdir];
        if subdir.is_empty() {
            format!("{}/f{index}.js", DOMAINS[self.domain])
        } else {
            format!("{}/{subdir}/f{index}.js", DOMAINS[self.domain])
        }
    }
}

/// Files where each may only require lower-indexed files of the same domain
fn acyclic_tree() -> impl Strategy<Value = Vec<GeneratedFile>> {
    proptest::collection::vec(
        (
            0..DOMAINS.len(),
            0..SUBDIRS.len(),
            proptest::collection::vec(any::<prop::sample::Index>(), 0..4),
        ),
        1..10,
    )
    .prop_map(|raw| {
        let mut files: Vec<GeneratedFile> = Vec::with_capacity(raw.len());
        for (index, (domain, subdir, picks)) in raw.into_iter().enumerate() {
            let candidates: Vec<usize> =
                (0..index).filter(|&j| files[j].domain == domain).collect();
            let mut requires: Vec<usize> = if candidates.is_empty() {
                Vec::new()
            } else {
                picks.iter().map(|pick| candidates[pick.index(candidates.len())]).collect()
            };
            requires.dedup();
            files.push(GeneratedFile {
                domain,
                subdir,
                requires,
            });
        }
        files
    })
}

fn write_tree(root: &Path, files: &[GeneratedFile]) {
    for (index, file) in files.iter().enumerate() {
        let mut content = String::new();
        for &required in &file.requires {
            let target = files[required].relative(required);
            let target = target.trim_end_matches(".js");
            content.push_str(&format!("//= require {target}\n"));
        }
        content.push_str("run();\n");

        let path = root.join(file.relative(index));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}

fn position(order: &[PathBuf], path: &Path) -> Option<usize> {
    order.iter().position(|p| p == path)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: acyclic trees always resolve, listing each file once,
    /// in its own domain, after everything it requires.
    #[test]
    fn property_acyclic_trees_resolve_in_dependency_order(files in acyclic_tree()) {
        let dir = TempDir::new().unwrap();
        let root = std::path::absolute(dir.path()).unwrap();
        write_tree(&root, &files);

        let resolution = resolve_directory_tree(&root)
            .map_err(|e| TestCaseError::fail(format!("resolution failed: {e}")))?;

        prop_assert_eq!(resolution.len(), files.len());

        for (index, file) in files.iter().enumerate() {
            let domain: ExecutionDomain = DOMAINS[file.domain].parse().unwrap();
            let order = resolution.get(domain);
            let path = root.join(file.relative(index));
            let own = position(order, &path);
            prop_assert!(own.is_some(), "{} missing from {}", path.display(), domain);

            for &required in &file.requires {
                let required_path = root.join(files[required].relative(required));
                let dep = position(order, &required_path);
                prop_assert!(
                    dep.is_some() && dep < own,
                    "{} must precede {}",
                    required_path.display(),
                    path.display()
                );
            }
        }

        for (_, order) in resolution.iter() {
            let unique: HashSet<&PathBuf> = order.iter().collect();
            prop_assert_eq!(unique.len(), order.len());
        }
    }

    /// PROPERTY: resolving the same tree twice gives the same result.
    #[test]
    fn property_resolution_is_deterministic(files in acyclic_tree()) {
        let dir = TempDir::new().unwrap();
        let root = std::path::absolute(dir.path()).unwrap();
        write_tree(&root, &files);

        let first = resolve_directory_tree(&root).unwrap();
        let second = resolve_directory_tree(&root).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: a ring of requirements of any length is reported as a cycle.
    #[test]
    fn property_rings_are_cycles(len in 1usize..12, subdir in 0..SUBDIRS.len()) {
        let dir = TempDir::new().unwrap();
        let root = std::path::absolute(dir.path()).unwrap();
        let base = root.join("shared").join(SUBDIRS[subdir]);
        std::fs::create_dir_all(&base).unwrap();
        for i in 0..len {
            let next = (i + 1) % len;
            std::fs::write(
                base.join(format!("r{i}.js")),
                format!("//= require ./r{next}\n"),
            )
            .unwrap();
        }

        let err = resolve_directory_tree(&root).unwrap_err();
        prop_assert!(matches!(err, ResolveError::Cycle { .. }), "expected cycle, got {err:?}");
    }
}
