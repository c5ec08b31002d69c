mod backend;
mod directory;
mod ops;

pub use backend::{FileSystem, OpOutcome, RealFileSystem};
pub use directory::read_directory;
pub use ops::{BatchFileOperator, BatchOp, BatchReport};
