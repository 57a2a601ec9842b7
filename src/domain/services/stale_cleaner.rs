//! Stale output cleanup
//!
//! Removes files sitting next to manifest-referenced files that the manifest
//! no longer mentions.
//!
//! Traversal policy: only the directories that directly contain a referenced
//! file are scanned, each once, in first-occurrence order. Only immediate
//! non-directory entries are candidates. Subdirectories are neither entered
//! nor removed. Directories without a referenced file are never touched.
//!
//! Deletion is not transactional; the first failure aborts the pass and
//! leaves earlier deletions in place.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::ManifestResult;
use crate::domain::ports::FileSystem;
use crate::error::{AssetMapError, AssetMapResult};

use super::path_resolver::PathResolver;

/// Outcome of a cleanup pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Directories that were scanned, in scan order
    pub scanned_dirs: Vec<PathBuf>,
    /// Files that were removed
    pub deleted: Vec<PathBuf>,
}

pub struct StaleFileCleaner<'r, FS> {
    resolver: &'r PathResolver<FS>,
    fs: FS,
}

impl<'r, FS: FileSystem> StaleFileCleaner<'r, FS> {
    pub fn new(resolver: &'r PathResolver<FS>, fs: FS) -> Self {
        Self { resolver, fs }
    }

    pub fn clean(&self, manifest: &ManifestResult) -> AssetMapResult<CleanReport> {
        let referenced = manifest
            .referenced_paths()
            .map(|relative| self.resolver.resolve_referenced(relative))
            .collect::<AssetMapResult<Vec<PathBuf>>>()?;
        let referenced_set: HashSet<&Path> = referenced.iter().map(PathBuf::as_path).collect();

        let mut report = CleanReport::default();
        let mut seen_dirs: HashSet<&Path> = HashSet::new();

        for file in &referenced {
            let Some(dir) = file.parent() else {
                continue;
            };
            if !seen_dirs.insert(dir) {
                continue;
            }

            debug!(dir = %dir.display(), "scanning for stale files");
            report.scanned_dirs.push(dir.to_path_buf());

            let entries = self
                .fs
                .read_dir(dir)
                .map_err(|source| AssetMapError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                })?;

            for entry in entries {
                if entry.is_dir || referenced_set.contains(entry.path.as_path()) {
                    continue;
                }
                self.fs
                    .remove_file(&entry.path)
                    .map_err(|source| AssetMapError::Remove {
                        path: entry.path.clone(),
                        source,
                    })?;
                info!(path = %entry.path.display(), "removed stale file");
                report.deleted.push(entry.path);
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }

    fn manifest_of(files: &[&str]) -> ManifestResult {
        let mut manifest = ManifestResult::new();
        manifest.entrypoints.insert(
            "main".to_string(),
            files.iter().map(|f| f.to_string()).collect(),
        );
        manifest
    }

    #[test]
    fn removes_unreferenced_siblings_only() {
        let dir = tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        for f in ["a/x", "a/y", "a/w", "b/z", "b/stale", "c/untouched", "a/sub/keep"] {
            touch(&root.join(f));
        }

        let resolver = PathResolver::new(LocalFs::new(), &root, &root);
        let cleaner = StaleFileCleaner::new(&resolver, LocalFs::new());

        let mut manifest = manifest_of(&["a/x", "a/y"]);
        manifest
            .auxiliary_files
            .as_mut()
            .unwrap()
            .push("b/z".to_string());

        let report = cleaner.clean(&manifest).unwrap();

        assert!(!root.join("a/w").exists());
        assert!(!root.join("b/stale").exists());
        assert!(root.join("a/x").exists());
        assert!(root.join("a/y").exists());
        assert!(root.join("b/z").exists());
        assert!(root.join("c/untouched").exists());
        assert!(root.join("a/sub/keep").exists());
        assert_eq!(report.scanned_dirs, vec![root.join("a"), root.join("b")]);
        assert_eq!(report.deleted.len(), 2);
    }

    #[test]
    fn unscanned_directories_keep_stale_files() {
        let dir = tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        touch(&root.join("a/x"));
        touch(&root.join("b/stale"));

        let resolver = PathResolver::new(LocalFs::new(), &root, &root);
        let report = StaleFileCleaner::new(&resolver, LocalFs::new())
            .clean(&manifest_of(&["a/x"]))
            .unwrap();

        assert!(root.join("b/stale").exists());
        assert!(report.deleted.is_empty());
    }

    #[test]
    fn missing_referenced_file_aborts_before_deleting() {
        let dir = tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        touch(&root.join("a/x"));
        touch(&root.join("a/stale"));

        let resolver = PathResolver::new(LocalFs::new(), &root, &root);
        let err = StaleFileCleaner::new(&resolver, LocalFs::new())
            .clean(&manifest_of(&["a/x", "a/gone"]))
            .unwrap_err();

        assert!(matches!(err, AssetMapError::Canonicalize { .. }));
        assert!(root.join("a/stale").exists());
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_treated_as_file() {
        let dir = tempdir().unwrap();
        let root = dunce::canonicalize(dir.path()).unwrap();
        touch(&root.join("out/app.js"));
        std::fs::create_dir_all(root.join("elsewhere")).unwrap();
        std::os::unix::fs::symlink(root.join("elsewhere"), root.join("out/link")).unwrap();

        let resolver = PathResolver::new(LocalFs::new(), &root, &root);
        StaleFileCleaner::new(&resolver, LocalFs::new())
            .clean(&manifest_of(&["out/app.js"]))
            .unwrap();

        assert!(std::fs::symlink_metadata(root.join("out/link")).is_err());
        assert!(root.join("elsewhere").exists());
    }
}
