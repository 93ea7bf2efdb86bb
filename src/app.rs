//! Wiring of the standard read, sort and output pipeline.

use std::rc::Rc;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::error::Result;
use crate::io::{ConsoleWriter, FileSystem};
use crate::output::{ConsoleSink, FileSink, OutputNamesStep, OutputSink};
use crate::pipeline::{PipelineBuilder, PipelineProcessor};
use crate::read::ReadNamesStep;
use crate::sorter::SortNamesStep;
use crate::step::{Step, priority};

/// Message shown when the run configuration is unusable.
pub const INVALID_ARGUMENTS_MESSAGE: &str = "Command line arguments are not valid.";

/// How a call to [`run_sorter`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The pipeline ran to the end or stopped early on an empty data set.
    Completed,
    /// The configuration was invalid; nothing ran.
    InvalidConfig,
}

/// The registration table for one run.
///
/// Listed in registration order, not execution order; the builder sorts
/// by priority.
pub fn default_steps(
    config: &RunConfig,
    fs: Rc<dyn FileSystem>,
    console: Rc<dyn ConsoleWriter>,
) -> Vec<Step> {
    let sinks: Vec<Box<dyn OutputSink>> = vec![
        Box::new(ConsoleSink::new(console)),
        Box::new(FileSink::new(config.output_file(), fs.clone())),
    ];

    vec![
        Step::extractor(ReadNamesStep::new(config.input_file(), fs))
            .with_priority(priority::READ),
        Step::transformer(OutputNamesStep::new(sinks)).with_priority(priority::OUTPUT),
        Step::transformer(SortNamesStep::new()).with_priority(priority::SORT),
    ]
}

/// Build the standard pipeline for `config`.
pub fn build_pipeline(
    config: &RunConfig,
    fs: Rc<dyn FileSystem>,
    console: Rc<dyn ConsoleWriter>,
) -> Result<PipelineProcessor> {
    PipelineBuilder::with_steps(default_steps(config, fs, console)).build()
}

/// Check the configuration, then build and run the pipeline.
///
/// An invalid configuration is reported on the console and nothing else
/// happens.
pub fn run_sorter(
    config: &RunConfig,
    fs: Rc<dyn FileSystem>,
    console: Rc<dyn ConsoleWriter>,
) -> Result<RunStatus> {
    if !config.is_valid() {
        warn!(?config, "invalid run configuration");
        console.write_line(INVALID_ARGUMENTS_MESSAGE)?;
        return Ok(RunStatus::InvalidConfig);
    }

    info!(
        input = %config.input_file().display(),
        output = %config.output_file().display(),
        "sorting names"
    );
    let mut pipeline = build_pipeline(config, fs, console)?;
    pipeline.run()?;
    Ok(RunStatus::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use crate::test_support::{MemoryFs, RecordingConsole};

    fn run(
        config: &RunConfig,
        fs: &Rc<MemoryFs>,
        console: &Rc<RecordingConsole>,
    ) -> Result<RunStatus> {
        run_sorter(config, fs.clone(), console.clone())
    }

    #[test]
    fn test_default_steps_execute_read_sort_output() {
        let config = RunConfig::new("in.txt", "out.txt");
        let fs = Rc::new(MemoryFs::default());
        let console = Rc::new(RecordingConsole::default());
        let pipeline = build_pipeline(&config, fs, console).unwrap();
        assert_eq!(pipeline.step_names(), ["READ", "SORT", "OUTPUT"]);
    }

    #[test]
    fn test_sorts_and_outputs_to_console_and_file() {
        let config = RunConfig::new("in.txt", "out.txt");
        let fs = Rc::new(MemoryFs::with_file(
            "in.txt",
            &[
                "Janet Parsons",
                "Vaughn Lewis",
                "Adonis Julius Archer",
                "Shelby Nathan Yoder",
            ],
        ));
        let console = Rc::new(RecordingConsole::default());

        let status = run(&config, &fs, &console).unwrap();

        let expected = [
            "Adonis Julius Archer",
            "Vaughn Lewis",
            "Janet Parsons",
            "Shelby Nathan Yoder",
        ];
        assert_eq!(status, RunStatus::Completed);
        assert_eq!(*console.lines.borrow(), expected);
        assert_eq!(fs.file("out.txt").unwrap(), expected);
        assert_eq!(fs.writes.get(), 1);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let config = RunConfig::new("in.txt", "out.txt");
        let fs = Rc::new(MemoryFs::with_file("in.txt", &["", "   "]));
        let console = Rc::new(RecordingConsole::default());

        assert_eq!(run(&config, &fs, &console).unwrap(), RunStatus::Completed);
        assert!(console.lines.borrow().is_empty());
        assert_eq!(fs.writes.get(), 0);
    }

    #[test]
    fn test_invalid_config_does_not_run() {
        let config = RunConfig::new("  ", "out.txt");
        let fs = Rc::new(MemoryFs::default());
        let console = Rc::new(RecordingConsole::default());

        assert_eq!(run(&config, &fs, &console).unwrap(), RunStatus::InvalidConfig);
        assert_eq!(*console.lines.borrow(), [INVALID_ARGUMENTS_MESSAGE]);
        assert_eq!(fs.reads.get(), 0);
    }

    #[test]
    fn test_missing_input_file() {
        let config = RunConfig::new("in.txt", "out.txt");
        let fs = Rc::new(MemoryFs::default());
        let console = Rc::new(RecordingConsole::default());

        let err = run(&config, &fs, &console).unwrap_err();
        assert!(matches!(err, PipelineError::FileNotFound { .. }));
        assert!(console.lines.borrow().is_empty());
    }

    #[test]
    fn test_invalid_lines_abort_before_output() {
        let config = RunConfig::new("in.txt", "out.txt");
        let fs = Rc::new(MemoryFs::with_file(
            "in.txt",
            &["Janet Parsons", "Madonna", "One Two Three Four Five"],
        ));
        let console = Rc::new(RecordingConsole::default());

        let err = run(&config, &fs, &console).unwrap_err();
        match err {
            PipelineError::InvalidNames { failures, .. } => assert_eq!(failures.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
        assert!(console.lines.borrow().is_empty());
        assert_eq!(fs.writes.get(), 0);
    }
}
