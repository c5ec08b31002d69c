// Selection state - listing snapshot and the paths chosen from it
use crate::entry::FileEntry;
use crate::error::Error;
use crate::io::read_directory;
use log::warn;
use std::path::{Path, PathBuf};

/// Holds the last-loaded listing of one directory and the ordered set of
/// absolute paths selected from it by index.
///
/// Indices always resolve against the stored snapshot, never the live
/// directory; if the directory changed since the load, an index may name a
/// different entry. Only bounds are validated.
pub struct SelectionSet {
    listing: Vec<FileEntry>,
    selected: Vec<PathBuf>,
    pub show_hidden: bool,
}

impl SelectionSet {
    pub fn new(show_hidden: bool) -> Self {
        Self {
            listing: Vec::new(),
            selected: Vec::new(),
            show_hidden,
        }
    }

    /// Loads the contents of a directory, replacing the stored listing.
    ///
    /// On failure the listing becomes empty and a diagnostic is printed; an
    /// empty directory and a failed load look the same to the caller.
    pub fn load(&mut self, path: &Path) -> &[FileEntry] {
        match read_directory(path, self.show_hidden) {
            Ok(entries) => self.listing = entries,
            Err(e) => {
                warn!("listing failed: {}", e);
                eprintln!("{}", e);
                self.listing.clear();
            }
        }
        &self.listing
    }

    pub fn listing(&self) -> &[FileEntry] {
        &self.listing
    }

    /// Replaces the selection with the entries named by `indices`, a
    /// comma-separated list of integers resolved against the stored listing
    /// and joined onto `base_path`.
    ///
    /// The whole string is parsed before any state changes: a bad token
    /// leaves the previous selection untouched. Out-of-range indices
    /// (including negatives) are skipped without comment, duplicates select
    /// the same entry twice, and an empty string selects nothing.
    pub fn select(&mut self, indices: &str, base_path: &Path) -> Result<&[PathBuf], Error> {
        let mut parsed = Vec::new();
        for token in indices.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let index: i64 = token.parse().map_err(|_| Error::InvalidIndex {
                token: token.to_string(),
            })?;
            parsed.push(index);
        }

        self.selected.clear();
        for index in parsed {
            if index >= 0 && (index as usize) < self.listing.len() {
                let name = &self.listing[index as usize].name;
                self.selected.push(base_path.join(name));
            }
        }

        Ok(&self.selected)
    }

    pub fn current_selection(&self) -> &[PathBuf] {
        &self.selected
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
