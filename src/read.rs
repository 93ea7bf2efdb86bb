//! READ - the extractor that loads people from the input file.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::io::FileSystem;
use crate::outcome::{Outcome, partition};
use crate::parser::NameParser;
use crate::person::Person;
use crate::step::Extract;

/// Reads one name per line from a file and parses each into a [`Person`].
///
/// Blank and whitespace-only lines are skipped. Every other line must
/// parse; if any line fails, the step fails with all failures listed,
/// each prefixed with its 1-based line number.
pub struct ReadNamesStep {
    path: PathBuf,
    fs: Rc<dyn FileSystem>,
    parser: NameParser,
}

impl ReadNamesStep {
    pub fn new(path: impl Into<PathBuf>, fs: Rc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
            parser: NameParser::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse every non-blank line, tagging failures with their line number.
    fn parse_lines(&self, lines: &[String]) -> Vec<Outcome<Person>> {
        lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| match self.parser.parse(line) {
                Outcome::Failure(message) => {
                    Outcome::failure(format!("line {}: {message} ({:?})", idx + 1, line.trim()))
                }
                success => success,
            })
            .collect()
    }
}

impl Extract for ReadNamesStep {
    fn extract(&self) -> Result<Vec<Person>> {
        if !self.fs.exists(&self.path)? {
            return Err(PipelineError::FileNotFound {
                path: self.path.clone(),
            });
        }

        let lines = self.fs.read_all_lines(&self.path)?;
        debug!(path = %self.path.display(), lines = lines.len(), "read input file");

        let people = partition(self.parse_lines(&lines)).map_err(|failures| {
            PipelineError::InvalidNames {
                path: self.path.clone(),
                failures,
            }
        })?;

        info!(path = %self.path.display(), records = people.len(), "names extracted");
        Ok(people)
    }

    fn name(&self) -> &str {
        "READ"
    }
}
