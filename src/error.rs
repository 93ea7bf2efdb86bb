//! Error types for name parsing and pipeline execution.
//!
//! Two layers of failure exist:
//! - [`NameError`] describes why a single line or a single [`Person`](crate::Person)
//!   construction was rejected. It is collected per line, never fatal on its own.
//! - [`PipelineError`] is what a pipeline run or build surfaces to its caller:
//!   configuration defects, resource failures, and the aggregated batch of
//!   rejected lines.

use std::path::PathBuf;

use thiserror::Error;

/// Why a raw name or a set of name parts was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Full name cannot be empty.")]
    Empty,

    #[error("Name must contain at least one given name and one last name.")]
    TooFewParts { count: usize },

    #[error("Name cannot contain more than three given names and one last name.")]
    TooManyParts { count: usize },

    #[error("At least one given name is required.")]
    NoGivenNames,

    #[error("Maximum three given names are allowed.")]
    TooManyGivenNames { count: usize },

    #[error("Last name cannot be blank.")]
    BlankLastName,

    #[error("Given name {index} cannot be blank.")]
    BlankGivenName { index: usize },
}

/// Errors raised while building or running a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    // Configuration: wiring defects detected before anything runs.
    #[error("Duplicate step orders found: priority {priority} declared by '{first}' and '{second}'")]
    DuplicateStepOrder {
        priority: i32,
        first: String,
        second: String,
    },

    #[error("Extractor '{step}' is ordered after '{after}'; an extractor must be the first step to run")]
    MisplacedExtractor { step: String, after: String },

    #[error("Pipeline has already been run")]
    AlreadyRun,

    // Resource: missing or unusable files and streams.
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Path is invalid: '{}' ({reason})", path.display())]
    InvalidPath { path: PathBuf, reason: &'static str },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Validation: every rejected line of one input file.
    #[error("{} invalid name(s) in '{}':\n{}", failures.len(), path.display(), failures.join("\n"))]
    InvalidNames { path: PathBuf, failures: Vec<String> },
}

impl PipelineError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors that indicate a wiring defect rather than bad data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PipelineError::DuplicateStepOrder { .. }
                | PipelineError::MisplacedExtractor { .. }
                | PipelineError::AlreadyRun
        )
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
