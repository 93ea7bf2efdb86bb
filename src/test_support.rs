//! In-memory fakes for the file and console collaborators.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};
use crate::io::{ConsoleWriter, FileSystem};

/// File system held in a map. Counts reads and writes.
#[derive(Default)]
pub struct MemoryFs {
    pub files: RefCell<HashMap<PathBuf, Vec<String>>>,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
    pub fail_reads: bool,
}

impl MemoryFs {
    pub fn with_file(path: &str, lines: &[&str]) -> Self {
        let fs = Self::default();
        fs.files.borrow_mut().insert(
            PathBuf::from(path),
            lines.iter().map(|l| l.to_string()).collect(),
        );
        fs
    }

    /// Contents of a file, if it was written or seeded.
    pub fn file(&self, path: &str) -> Option<Vec<String>> {
        self.files.borrow().get(Path::new(path)).cloned()
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> Result<bool> {
        Ok(self.files.borrow().contains_key(path))
    }

    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(PipelineError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ));
        }
        Ok(self.files.borrow().get(path).cloned().unwrap_or_default())
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        self.writes.set(self.writes.get() + 1);
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), lines.to_vec());
        Ok(())
    }
}

/// Console that keeps every line written to it.
#[derive(Default)]
pub struct RecordingConsole {
    pub lines: RefCell<Vec<String>>,
}

impl ConsoleWriter for RecordingConsole {
    fn write_line(&self, line: &str) -> Result<()> {
        self.lines.borrow_mut().push(line.to_string());
        Ok(())
    }
}
