//! File and console collaborators used by the read and output steps.
//!
//! Both are traits so tests can substitute in-memory fakes.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// Line-oriented access to files.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> Result<bool>;

    /// Read every line of a file, without line terminators.
    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>>;

    /// Replace a file's contents with `lines`, one per line.
    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Reject paths that can never name a file.
fn validate_path(path: &Path) -> Result<()> {
    let invalid = |reason: &'static str| {
        Err(PipelineError::InvalidPath {
            path: path.to_path_buf(),
            reason,
        })
    };

    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return invalid("path cannot be blank");
    }
    if text.contains('\0') {
        return invalid("path contains a NUL byte");
    }
    match path.file_name() {
        Some(name) if !name.to_string_lossy().trim().is_empty() => Ok(()),
        _ => invalid("path has no file name"),
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> Result<bool> {
        validate_path(path)?;
        Ok(path.is_file())
    }

    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>> {
        validate_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
        Ok(content.lines().map(str::to_string).collect())
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<()> {
        validate_path(path)?;
        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content).map_err(|e| PipelineError::io(path, e))
    }
}

/// Destination for console output, one line at a time.
pub trait ConsoleWriter {
    fn write_line(&self, line: &str) -> Result<()>;
}

/// [`ConsoleWriter`] that prints to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutWriter;

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ConsoleWriter for StdoutWriter {
    fn write_line(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").map_err(|e| PipelineError::io(PathBuf::from("<stdout>"), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("names.txt");
        let fs = LocalFileSystem::new();

        assert!(!fs.exists(&path).unwrap());
        let lines = vec!["Ann Lee".to_string(), "Bo Ray".to_string()];
        fs.write_all_lines(&path, &lines).unwrap();

        assert!(fs.exists(&path).unwrap());
        assert_eq!(fs.read_all_lines(&path).unwrap(), lines);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Ann Lee\nBo Ray\n"
        );
    }

    #[test]
    fn test_read_strips_crlf() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "Ann Lee\r\nBo Ray\r\n").unwrap();
        assert_eq!(
            LocalFileSystem::new().read_all_lines(&path).unwrap(),
            ["Ann Lee", "Bo Ray"]
        );
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = LocalFileSystem::new().read_all_lines(&path).unwrap_err();
        match err {
            PipelineError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.txt");
        let err = LocalFileSystem::new()
            .write_all_lines(&path, &["x y".to_string()])
            .unwrap_err();
        assert!(matches!(err, PipelineError::Io { .. }));
    }

    #[test]
    fn test_blank_path_rejected() {
        let fs = LocalFileSystem::new();
        for bad in ["", "   "] {
            let err = fs.exists(Path::new(bad)).unwrap_err();
            assert!(matches!(err, PipelineError::InvalidPath { .. }), "{bad:?}");
        }
    }

    #[test]
    fn test_path_without_file_name_rejected() {
        let err = LocalFileSystem::new()
            .read_all_lines(Path::new(".."))
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidPath { .. }));
    }

    #[test]
    fn test_nul_byte_rejected() {
        let err = LocalFileSystem::new()
            .write_all_lines(Path::new("bad\0name.txt"), &[])
            .unwrap_err();
        assert!(matches!(err, PipelineError::InvalidPath { .. }));
    }

    #[test]
    fn test_directory_does_not_exist_as_file() {
        let dir = tempdir().unwrap();
        assert!(!LocalFileSystem::new().exists(dir.path()).unwrap());
    }
}
