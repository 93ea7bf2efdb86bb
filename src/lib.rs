//! # name-sorter
//!
//! Reads personal names from a text file, validates and parses them, sorts
//! them by last name and then by given names, and writes the result to the
//! console and to an output file.
//!
//! ## Overview
//!
//! The work is split into pipeline steps run in priority order:
//! - **READ** (extractor): one name per line, blank lines skipped, every
//!   malformed line reported together
//! - **SORT** (transformer): ordinal order on last name, then given names
//! - **OUTPUT** (transformer): hands the sorted names to every sink
//!
//! A name is two to four whitespace-separated tokens: one to three given
//! names followed by a last name.
//!
//! ## Example
//!
//! ```
//! use name_sorter::{parse_name, sort_people};
//!
//! let people: Vec<_> = ["Janet Parsons", "Vaughn Lewis", "Adonis Julius Archer"]
//!     .iter()
//!     .map(|line| parse_name(line).unwrap())
//!     .collect();
//!
//! let sorted: Vec<String> = sort_people(&people).iter().map(|p| p.to_string()).collect();
//!
//! assert_eq!(sorted, ["Adonis Julius Archer", "Vaughn Lewis", "Janet Parsons"]);
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod outcome;
pub mod output;
pub mod parser;
pub mod person;
pub mod pipeline;
pub mod read;
pub mod sorter;
pub mod step;

#[cfg(test)]
mod test_support;

pub use app::{RunStatus, build_pipeline, default_steps, run_sorter};
pub use config::{DEFAULT_OUTPUT_FILE, RunConfig};
pub use error::{NameError, PipelineError, Result};
pub use io::{ConsoleWriter, FileSystem, LocalFileSystem, StdoutWriter};
pub use outcome::Outcome;
pub use output::{ConsoleSink, FileSink, OutputNamesStep, OutputSink};
pub use parser::{NameParser, parse_name};
pub use person::Person;
pub use pipeline::{PipelineBuilder, PipelineProcessor, RunState};
pub use read::ReadNamesStep;
pub use sorter::{SortNamesStep, compare_people, sort_people};
pub use step::{Extract, Step, StepKind, Transform, priority};
