use crate::entry::FileEntry;
use crate::error::Error;
use std::fs;
use std::path::Path;

/// Reads the immediate children of `path` in the order the OS yields them.
///
/// The returned order is not sorted: selection indices refer back to this
/// exact sequence, so it must match what was shown to the user verbatim.
pub fn read_directory(path: &Path, show_hidden: bool) -> Result<Vec<FileEntry>, Error> {
    let mut entries = Vec::new();
    let read_dir = fs::read_dir(path).map_err(|source| Error::Listing {
        path: path.to_path_buf(),
        source,
    })?;

    for entry in read_dir.flatten() {
        let path = entry.path();
        if !show_hidden {
            if let Some(name) = path.file_name() {
                if name.to_string_lossy().starts_with('.') {
                    continue;
                }
            }
        }
        if let Some(file_entry) = FileEntry::from_path(path) {
            entries.push(file_entry);
        }
    }
    Ok(entries)
}
