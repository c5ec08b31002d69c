use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the interactive loop.
///
/// Backend copy/move/remove failures are deliberately absent: those are
/// collected per item in a [`crate::io::BatchReport`] instead of propagating.
#[derive(Debug, Error)]
pub enum Error {
    #[error("error loading directory contents for {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid index '{token}': expected comma-separated integers")]
    InvalidIndex { token: String },

    #[error("index {index} is out of range ({len} entries)")]
    OutOfRange { index: usize, len: usize },

    #[error("cannot open '{name}': not a directory")]
    NotADirectory { name: String },
}
