//! Path resolution for manifest entries
//!
//! Emitted files are resolved against the compiler output directory,
//! canonicalized, then expressed relative to the manifest root.

use std::path::{Component, Path, PathBuf};

use tracing::trace;

use crate::domain::ports::FileSystem;
use crate::error::{AssetMapError, AssetMapResult};

/// Resolves emitted file names to root-relative manifest paths
#[derive(Debug, Clone)]
pub struct PathResolver<FS> {
    fs: FS,
    output_dir: PathBuf,
    root: PathBuf,
}

impl<FS: FileSystem> PathResolver<FS> {
    /// `root` must already be canonical.
    pub fn new(fs: FS, output_dir: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            output_dir: output_dir.into(),
            root: root.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `relativize(canonicalize(output_dir/file))`
    pub fn resolve_emitted(&self, file: &str) -> AssetMapResult<String> {
        let absolute = self.canonicalize(&self.output_dir.join(file))?;
        let relative = relative_path(&self.root, &absolute);
        trace!(file, relative = %relative, "resolved emitted file");
        Ok(relative)
    }

    /// `canonicalize(root/relative)`, the inverse used by cleanup
    pub fn resolve_referenced(&self, relative: &str) -> AssetMapResult<PathBuf> {
        self.canonicalize(&self.root.join(relative))
    }

    fn canonicalize(&self, path: &Path) -> AssetMapResult<PathBuf> {
        self.fs
            .canonicalize(path)
            .map_err(|source| AssetMapError::Canonicalize {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Express `path` relative to `root`, both absolute and normalized.
///
/// Climbs out of `root` with `..` as needed and joins segments with `/`.
/// Returns an empty string when both are equal. When the two paths share no
/// prefix at all (different drives on Windows) the absolute path is returned.
pub fn relative_path(root: &Path, path: &Path) -> String {
    let root: Vec<Component<'_>> = root.components().collect();
    let target: Vec<Component<'_>> = path.components().collect();

    let common = root
        .iter()
        .zip(target.iter())
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 {
        return path.to_string_lossy().replace('\\', "/");
    }

    let ups = root[common..].iter().map(|_| "..".to_string());
    let downs = target[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}
