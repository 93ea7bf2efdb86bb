//! OUTPUT - delivers the final people to every registered sink.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;
use crate::io::{ConsoleWriter, FileSystem};
use crate::person::Person;
use crate::step::Transform;

/// A destination for the sorted people.
pub trait OutputSink {
    fn output(&self, people: &[Person]) -> Result<()>;

    /// The display name of this sink.
    fn name(&self) -> &str;
}

/// Writes each person's full name to the console, one per line.
pub struct ConsoleSink {
    console: Rc<dyn ConsoleWriter>,
}

impl ConsoleSink {
    pub fn new(console: Rc<dyn ConsoleWriter>) -> Self {
        Self { console }
    }
}

impl OutputSink for ConsoleSink {
    fn output(&self, people: &[Person]) -> Result<()> {
        for person in people {
            self.console.write_line(&person.to_string())?;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

/// Writes every full name to one file. An empty list writes nothing.
pub struct FileSink {
    path: PathBuf,
    fs: Rc<dyn FileSystem>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, fs: Rc<dyn FileSystem>) -> Self {
        Self {
            path: path.into(),
            fs,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn output(&self, people: &[Person]) -> Result<()> {
        if people.is_empty() {
            return Ok(());
        }
        let lines: Vec<String> = people.iter().map(Person::to_string).collect();
        self.fs.write_all_lines(&self.path, &lines)
    }

    fn name(&self) -> &str {
        "file"
    }
}

/// Forwards the people to every sink, in registration order, and passes
/// them on unchanged.
pub struct OutputNamesStep {
    sinks: Vec<Box<dyn OutputSink>>,
}

impl OutputNamesStep {
    pub fn new(sinks: Vec<Box<dyn OutputSink>>) -> Self {
        Self { sinks }
    }

    pub fn sink_names(&self) -> Vec<&str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }
}

impl Transform for OutputNamesStep {
    fn transform(&self, people: Vec<Person>) -> Result<Vec<Person>> {
        for sink in &self.sinks {
            debug!(sink = sink.name(), records = people.len(), "output");
            sink.output(&people)?;
        }
        Ok(people)
    }

    fn name(&self) -> &str {
        "OUTPUT"
    }
}
