use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Outcome of a single backend call.
///
/// A missing source is an explicit outcome rather than an error: batch
/// operations skip such items and keep going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpOutcome {
    Done,
    SourceMissing,
}

/// Storage effects consumed by [`crate::io::BatchFileOperator`].
///
/// Implementations include the real filesystem below and in-memory fakes in
/// tests; the operator is generic over this trait.
pub trait FileSystem {
    fn copy(&self, src: &Path, dest: &Path) -> io::Result<OpOutcome>;
    fn move_entry(&self, src: &Path, dest: &Path) -> io::Result<OpOutcome>;
    fn remove(&self, path: &Path) -> io::Result<OpOutcome>;
}

/// Backend operating on the local filesystem via `std::fs`.
pub struct RealFileSystem {
    /// Route `remove` through the system trash instead of deleting.
    pub use_trash: bool,
}

impl RealFileSystem {
    pub fn new(use_trash: bool) -> Self {
        Self { use_trash }
    }
}

/// A destination naming an existing directory receives the source basename
/// appended, so copying `/a/x.txt` to `/out` lands at `/out/x.txt`.
fn resolve_destination(src: &Path, dest: &Path) -> io::Result<PathBuf> {
    if dest.is_dir() {
        let file_name = src
            .file_name()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"))?;
        Ok(dest.join(file_name))
    } else {
        Ok(dest.to_path_buf())
    }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if path.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path)?;
        }
    }

    Ok(())
}

impl FileSystem for RealFileSystem {
    fn copy(&self, src: &Path, dest: &Path) -> io::Result<OpOutcome> {
        if !src.exists() {
            return Ok(OpOutcome::SourceMissing);
        }
        let target = resolve_destination(src, dest)?;
        if src.is_dir() {
            copy_dir_recursive(src, &target)?;
        } else {
            fs::copy(src, &target)?;
        }
        Ok(OpOutcome::Done)
    }

    fn move_entry(&self, src: &Path, dest: &Path) -> io::Result<OpOutcome> {
        if !src.exists() {
            return Ok(OpOutcome::SourceMissing);
        }
        let target = resolve_destination(src, dest)?;
        fs::rename(src, &target)?;
        Ok(OpOutcome::Done)
    }

    fn remove(&self, path: &Path) -> io::Result<OpOutcome> {
        if !path.exists() {
            return Ok(OpOutcome::SourceMissing);
        }
        if self.use_trash {
            trash::delete(path)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        } else if path.is_dir() {
            fs::remove_dir_all(path)?;
        } else {
            fs::remove_file(path)?;
        }
        Ok(OpOutcome::Done)
    }
}
