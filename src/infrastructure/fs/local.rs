//! Local File System Implementation
//!
//! Implements the FileSystem port with blocking `std::fs` calls.

use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{DirEntryInfo, FileSystem};

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        // Never `\\?\` prefixed on Windows
        dunce::canonicalize(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            entries.push(DirEntryInfo {
                path: path.join(entry.file_name()),
                is_dir: entry.file_type()?.is_dir(),
            });
        }
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }
}
