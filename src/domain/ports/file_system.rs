//! FileSystem port - the file operations the manifest builder needs
//!
//! Domain services never call `std::fs` directly. Errors are plain
//! `std::io::Error`s; callers attach the path and operation.

use std::io;
use std::path::{Path, PathBuf};

/// One immediate entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Absolute path of the entry (directory path joined with the entry name)
    pub path: PathBuf,
    /// Whether the entry itself is a directory. Symbolic links are not followed.
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard blocking file I/O
pub trait FileSystem {
    /// Resolve to an absolute path with symlinks and `.`/`..` removed
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// List the immediate entries of a directory
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Remove a single non-directory entry
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Create or truncate `path` and write `content` in one call
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).read_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        (**self).write(path, content)
    }
}
