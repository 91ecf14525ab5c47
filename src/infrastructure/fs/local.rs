//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

#[cfg(windows)]
const CROSS_DEVICE: i32 = 17; // ERROR_NOT_SAME_DEVICE
#[cfg(not(windows))]
const CROSS_DEVICE: i32 = 18; // EXDEV

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename. Temp files are created with mode 0600 on Unix, so persisted
/// reports are readable by their owner only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    fn staging_in(dir: &Path) -> FsResult<NamedTempFile> {
        tempfile::Builder::new()
            .prefix(".staging-")
            .tempfile_in(dir)
            .map_err(|e| FsError::io(dir, e))
    }

    /// Cross-filesystem move: copy next to `to`, flush, rename, then drop `from`.
    fn copy_then_remove(from: &Path, to: &Path) -> FsResult<()> {
        let dir = parent_of(to);
        let mut staged = Self::staging_in(dir)?;
        let mut source = File::open(from).map_err(|e| FsError::io(from, e))?;

        io::copy(&mut source, staged.as_file_mut()).map_err(|e| FsError::io(to, e))?;
        staged.as_file().sync_all().map_err(|e| FsError::io(to, e))?;
        staged.persist(to).map_err(|e| FsError::io(to, e.error))?;

        fs::remove_file(from).map_err(|e| FsError::io(from, e))
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::io(path, e))
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let dir = parent_of(path);
        self.create_dir_all(dir)?;

        let mut staged = Self::staging_in(dir)?;
        staged.write_all(content).map_err(|e| FsError::io(path, e))?;
        staged.as_file().sync_all().map_err(|e| FsError::io(path, e))?;
        staged.persist(path).map_err(|e| FsError::io(path, e.error))?;
        Ok(())
    }

    fn replace(&self, from: &Path, to: &Path) -> FsResult<()> {
        self.create_dir_all(parent_of(to))?;

        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(e) if e.raw_os_error() == Some(CROSS_DEVICE) => {
                tracing::debug!(
                    from = %from.display(),
                    to = %to.display(),
                    "rename crosses filesystems, copying instead"
                );
                Self::copy_then_remove(from, to)
            }
            Err(e) => Err(FsError::io(to, e)),
        }
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let mut file = File::open(path).map_err(|e| FsError::io(path, e))?;
        ContentHash::from_reader(&mut file).map_err(|e| FsError::io(path, e))
    }
}

fn parent_of(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
