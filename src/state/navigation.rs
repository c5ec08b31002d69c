// Navigation state - history and current location
use crate::entry::FileEntry;
use crate::error::Error;
use std::path::{Path, PathBuf};

pub struct NavigationState {
    pub current_path: PathBuf,
    history: Vec<PathBuf>,
    history_index: usize,
}

impl NavigationState {
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            current_path: start_path.clone(),
            history: vec![start_path],
            history_index: 0,
        }
    }

    /// Descends into the directory at `index` of the current listing.
    ///
    /// Fails without moving when the index is out of range or names a
    /// non-directory.
    pub fn navigate(&mut self, index: usize, listing: &[FileEntry]) -> Result<&Path, Error> {
        let entry = listing.get(index).ok_or(Error::OutOfRange {
            index,
            len: listing.len(),
        })?;
        if !entry.is_dir {
            return Err(Error::NotADirectory {
                name: entry.name.clone(),
            });
        }
        self.push_history(entry.path.clone());
        Ok(&self.current_path)
    }

    /// Moves to the parent directory; at the filesystem root this is a no-op.
    pub fn go_to_parent(&mut self) -> Option<&Path> {
        let parent = self.current_path.parent()?.to_path_buf();
        self.push_history(parent);
        Some(&self.current_path)
    }

    fn push_history(&mut self, path: PathBuf) {
        // Remove any forward history when navigating to a new path
        self.history.truncate(self.history_index + 1);
        self.history.push(path.clone());
        self.history_index += 1;
        self.current_path = path;
    }

    pub fn go_back(&mut self) -> Option<&Path> {
        if self.history_index > 0 {
            self.history_index -= 1;
            self.current_path = self.history[self.history_index].clone();
            Some(&self.current_path)
        } else {
            None
        }
    }

    pub fn go_forward(&mut self) -> Option<&Path> {
        if self.history_index + 1 < self.history.len() {
            self.history_index += 1;
            self.current_path = self.history[self.history_index].clone();
            Some(&self.current_path)
        } else {
            None
        }
    }
}
