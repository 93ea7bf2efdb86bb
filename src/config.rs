//! Run configuration resolved from the command line.

use std::path::{Path, PathBuf};

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_FILE: &str = "sorted-names-list.txt";

/// Input and output paths for one run.
///
/// Paths are trimmed on construction. A configuration is valid only when
/// both paths are non-blank; validity says nothing about whether the files
/// exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl RunConfig {
    pub fn new(input_file: &str, output_file: &str) -> Self {
        Self {
            input_file: PathBuf::from(input_file.trim()),
            output_file: PathBuf::from(output_file.trim()),
        }
    }

    /// Configuration with the default output file.
    pub fn with_default_output(input_file: &str) -> Self {
        Self::new(input_file, DEFAULT_OUTPUT_FILE)
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn is_valid(&self) -> bool {
        !self.input_file.as_os_str().is_empty() && !self.output_file.as_os_str().is_empty()
    }
}
