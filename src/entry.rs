use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// A single child of a directory, as observed by one listing snapshot.
///
/// Anything that is not a directory counts as a file for display purposes;
/// classification follows symlinks, so a link to a directory shows as a
/// directory.
#[derive(Clone, Debug)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let symlink_meta = fs::symlink_metadata(&path).ok()?;
        let is_symlink = symlink_meta.is_symlink();

        let name = path.file_name()?.to_string_lossy().to_string();

        let metadata = fs::metadata(&path).ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.as_ref().map(|m| m.len()).unwrap_or(0);
        let modified = metadata
            .as_ref()
            .and_then(|m| m.modified().ok())
            .or_else(|| symlink_meta.modified().ok())
            .unwrap_or_else(SystemTime::now);

        Some(Self {
            path,
            name,
            is_dir,
            is_symlink,
            size,
            modified,
        })
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_dir { "Folder" } else { "File" }
    }

    pub fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{} \u{2192}", self.name)
        } else {
            self.name.clone()
        }
    }
}
