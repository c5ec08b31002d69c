use crate::io::backend::{FileSystem, OpOutcome};
use crate::state::SelectionSet;
use log::{debug, warn};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchOp {
    Copy,
    Move,
    Delete,
}

impl BatchOp {
    fn past_tense(self) -> &'static str {
        match self {
            BatchOp::Copy => "copied",
            BatchOp::Move => "moved",
            BatchOp::Delete => "deleted",
        }
    }
}

/// Per-item outcomes of one batch attempt.
///
/// `attempted` is the size of the selection the batch started from;
/// `completed + skipped.len() + failed.len() == attempted` always holds.
#[derive(Debug)]
pub struct BatchReport {
    pub operation: BatchOp,
    pub attempted: usize,
    pub completed: usize,
    pub skipped: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, io::Error)>,
}

impl BatchReport {
    fn new(operation: BatchOp, attempted: usize) -> Self {
        Self {
            operation,
            attempted,
            completed: 0,
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = format!(
            "{} of {} item(s) {}",
            self.completed,
            self.attempted,
            self.operation.past_tense()
        );
        for path in &self.skipped {
            lines.push_str(&format!("\n - skipped (not found): {}", path.display()));
        }
        for (path, err) in &self.failed {
            lines.push_str(&format!("\n - failed: {}: {}", path.display(), err));
        }
        lines
    }
}

/// Applies one bulk operation to a [`SelectionSet`]'s current selection.
///
/// Items are processed strictly in selection order, one backend call at a
/// time. A failing item never aborts the batch: its error is recorded and
/// the remaining items are still attempted. The selection is cleared once
/// the attempt finishes, whatever the outcomes were.
pub struct BatchFileOperator<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> BatchFileOperator<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn copy_files(&self, selection: &mut SelectionSet, destination: &Path) -> BatchReport {
        self.run(selection, BatchOp::Copy, |fs, path| {
            fs.copy(path, destination)
        })
    }

    pub fn move_files(&self, selection: &mut SelectionSet, destination: &Path) -> BatchReport {
        self.run(selection, BatchOp::Move, |fs, path| {
            fs.move_entry(path, destination)
        })
    }

    pub fn delete_files(&self, selection: &mut SelectionSet) -> BatchReport {
        self.run(selection, BatchOp::Delete, |fs, path| fs.remove(path))
    }

    fn run(
        &self,
        selection: &mut SelectionSet,
        operation: BatchOp,
        op: impl Fn(&F, &Path) -> io::Result<OpOutcome>,
    ) -> BatchReport {
        let paths: Vec<PathBuf> = selection.current_selection().to_vec();
        let mut report = BatchReport::new(operation, paths.len());

        for path in paths {
            match op(&self.fs, &path) {
                Ok(OpOutcome::Done) => {
                    debug!("{:?} ok: {}", operation, path.display());
                    report.completed += 1;
                }
                Ok(OpOutcome::SourceMissing) => {
                    debug!("{:?} skipped, source missing: {}", operation, path.display());
                    report.skipped.push(path);
                }
                Err(e) => {
                    warn!("{:?} failed for {}: {}", operation, path.display(), e);
                    report.failed.push((path, e));
                }
            }
        }

        selection.clear();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs::{self, File};
    use std::path::Path;

    /// Records backend calls and fails or skips on configured paths.
    struct FakeFileSystem {
        calls: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Option<PathBuf>,
        missing: Vec<PathBuf>,
    }

    impl FakeFileSystem {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
                missing: Vec::new(),
            }
        }

        fn respond(&self, op: &str, path: &Path) -> io::Result<OpOutcome> {
            self.calls
                .borrow_mut()
                .push((op.to_string(), path.to_path_buf()));
            if self.fail_on.as_deref() == Some(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            if self.missing.iter().any(|p| p == path) {
                return Ok(OpOutcome::SourceMissing);
            }
            Ok(OpOutcome::Done)
        }
    }

    impl FileSystem for FakeFileSystem {
        fn copy(&self, src: &Path, _dest: &Path) -> io::Result<OpOutcome> {
            self.respond("copy", src)
        }

        fn move_entry(&self, src: &Path, _dest: &Path) -> io::Result<OpOutcome> {
            self.respond("move", src)
        }

        fn remove(&self, path: &Path) -> io::Result<OpOutcome> {
            self.respond("remove", path)
        }
    }

    fn selection_of(dir: &Path, names: &[&str]) -> SelectionSet {
        for name in names {
            File::create(dir.join(name)).unwrap();
        }
        let mut set = SelectionSet::new(true);
        set.load(dir);
        let indices: Vec<String> = names
            .iter()
            .map(|n| {
                set.listing()
                    .iter()
                    .position(|e| e.name == *n)
                    .unwrap()
                    .to_string()
            })
            .collect();
        set.select(&indices.join(","), dir).unwrap();
        set
    }

    #[test]
    fn copy_drives_backend_in_selection_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = selection_of(dir.path(), &["a.txt", "c.txt"]);

        let operator = BatchFileOperator::new(FakeFileSystem::new());
        let report = operator.copy_files(&mut set, Path::new("/tmp/out"));

        assert_eq!(report.attempted, 2);
        assert_eq!(report.completed, 2);
        let calls = operator.fs.calls.borrow();
        assert_eq!(calls[0], ("copy".into(), dir.path().join("a.txt")));
        assert_eq!(calls[1], ("copy".into(), dir.path().join("c.txt")));
        assert!(set.current_selection().is_empty());
    }

    #[test]
    fn failing_item_does_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = selection_of(dir.path(), &["a", "b", "c"]);

        let mut fake = FakeFileSystem::new();
        fake.fail_on = Some(dir.path().join("b"));
        let operator = BatchFileOperator::new(fake);
        let report = operator.delete_files(&mut set);

        assert_eq!(report.attempted, 3);
        assert_eq!(report.completed, 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, dir.path().join("b"));
        assert_eq!(operator.fs.calls.borrow().len(), 3);
        assert!(set.current_selection().is_empty());
    }

    #[test]
    fn missing_sources_count_as_attempted() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = selection_of(dir.path(), &["a", "b"]);

        let mut fake = FakeFileSystem::new();
        fake.missing = vec![dir.path().join("a")];
        let operator = BatchFileOperator::new(fake);
        let report = operator.move_files(&mut set, Path::new("/tmp/out"));

        assert_eq!(report.attempted, 2);
        assert_eq!(report.completed, 1);
        assert_eq!(report.skipped, vec![dir.path().join("a")]);
    }

    #[test]
    fn selection_clears_even_when_everything_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = selection_of(dir.path(), &["only"]);

        let mut fake = FakeFileSystem::new();
        fake.fail_on = Some(dir.path().join("only"));
        let operator = BatchFileOperator::new(fake);
        let report = operator.copy_files(&mut set, Path::new("/tmp/out"));

        assert_eq!(report.completed, 0);
        assert!(set.current_selection().is_empty());
    }

    #[test]
    fn empty_selection_reports_zero_attempted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("unused")).unwrap();
        let mut set = SelectionSet::new(true);
        set.load(dir.path());

        let operator = BatchFileOperator::new(FakeFileSystem::new());
        let report = operator.delete_files(&mut set);
        assert_eq!(report.attempted, 0);
        assert!(operator.fs.calls.borrow().is_empty());
    }

    #[test]
    fn end_to_end_copy_against_the_real_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        File::create(dir.path().join("c.txt")).unwrap();

        let mut set = SelectionSet::new(true);
        set.load(dir.path());
        let a = set.listing().iter().position(|e| e.name == "a.txt").unwrap();
        let c = set.listing().iter().position(|e| e.name == "c.txt").unwrap();
        set.select(&format!("{},{}", a, c), dir.path()).unwrap();

        let operator = BatchFileOperator::new(crate::io::RealFileSystem::new(false));
        let report = operator.copy_files(&mut set, out.path());

        assert_eq!(report.attempted, 2);
        assert_eq!(report.completed, 2);
        assert!(out.path().join("a.txt").exists());
        assert!(out.path().join("c.txt").exists());
        assert!(set.current_selection().is_empty());
    }

    #[test]
    fn summary_names_failed_items() {
        let dir = tempfile::tempdir().unwrap();
        let mut set = selection_of(dir.path(), &["x"]);

        let mut fake = FakeFileSystem::new();
        fake.fail_on = Some(dir.path().join("x"));
        let operator = BatchFileOperator::new(fake);
        let report = operator.delete_files(&mut set);

        let summary = report.summary();
        assert!(summary.contains("0 of 1 item(s) deleted"));
        assert!(summary.contains("failed"));
    }
}
