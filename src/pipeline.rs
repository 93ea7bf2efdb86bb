//! Pipeline builder and processor.
//!
//! The builder validates a registration table of steps and sorts it by
//! priority. The processor runs the sorted steps once:
//!
//! ```text
//! NotStarted --run()--> Running --(steps exhausted | data empty | error)--> Completed
//! ```
//!
//! The data set starts absent. An extractor replaces it, a transformer maps
//! it, a passive step leaves it alone. After every step the run stops early
//! if the data set is absent or empty, so an empty read never reaches the
//! sort or output steps.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::error::{PipelineError, Result};
use crate::person::Person;
use crate::step::{Step, StepKind};

/// Collects steps and builds a [`PipelineProcessor`].
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    steps: Vec<Step>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing registration table.
    pub fn with_steps(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    /// Register one more step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Validate and order the registered steps.
    ///
    /// Fails when two steps declare the same priority, or when an extractor
    /// is not the first step in execution order. Steps without a
    /// declared priority run last, in registration order. The builder can
    /// be reused; each call returns an independent processor.
    pub fn build(&self) -> Result<PipelineProcessor> {
        self.validate_priorities()?;

        let mut ordered = self.steps.clone();
        // Stable: undeclared steps keep their registration order.
        ordered.sort_by_key(Step::effective_priority);

        validate_extractor_position(&ordered)?;

        debug!(
            steps = ?ordered.iter().map(Step::name).collect::<Vec<_>>(),
            "pipeline built"
        );
        Ok(PipelineProcessor::new(ordered))
    }

    fn validate_priorities(&self) -> Result<()> {
        let mut seen: HashMap<i32, &str> = HashMap::new();
        for step in &self.steps {
            let Some(priority) = step.priority() else {
                continue;
            };
            if let Some(first) = seen.insert(priority, step.name()) {
                return Err(PipelineError::DuplicateStepOrder {
                    priority,
                    first: first.to_string(),
                    second: step.name().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// An extractor must be the first step to run.
///
/// Anything ordered before it, passive steps included, would end the run
/// on the still-absent data set and the extractor would never be reached.
fn validate_extractor_position(ordered: &[Step]) -> Result<()> {
    for (idx, step) in ordered.iter().enumerate().skip(1) {
        if step.is_extractor() {
            return Err(PipelineError::MisplacedExtractor {
                step: step.name().to_string(),
                after: ordered[idx - 1].name().to_string(),
            });
        }
    }
    Ok(())
}

/// Lifecycle of a [`PipelineProcessor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running,
    Completed,
}

/// Runs an ordered list of steps once.
#[derive(Debug)]
pub struct PipelineProcessor {
    steps: Vec<Step>,
    state: RunState,
}

impl PipelineProcessor {
    fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            state: RunState::NotStarted,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Execute every step in order.
    ///
    /// The final data set is dropped; output steps have already delivered
    /// it. A failing step ends the run and its error is returned unchanged.
    pub fn run(&mut self) -> Result<()> {
        if self.state != RunState::NotStarted {
            return Err(PipelineError::AlreadyRun);
        }
        self.state = RunState::Running;
        info!(steps = self.steps.len(), "pipeline run started");

        let result = self.execute();
        self.state = RunState::Completed;
        result
    }

    fn execute(&self) -> Result<()> {
        let mut people: Option<Vec<Person>> = None;

        for (idx, step) in self.steps.iter().enumerate() {
            match step.kind() {
                StepKind::Extractor(extract) => {
                    debug!(stage = idx, step = extract.name(), "extract");
                    people = Some(extract.extract()?);
                }
                StepKind::Transformer(transform) => {
                    debug!(stage = idx, step = transform.name(), "transform");
                    let input = people.take().unwrap_or_else(|| {
                        warn!(
                            step = transform.name(),
                            "transformer reached before any data was extracted"
                        );
                        Vec::new()
                    });
                    people = Some(transform.transform(input)?);
                }
                StepKind::Passive(name) => {
                    debug!(stage = idx, step = %name, "skip passive step");
                }
            }

            match &people {
                Some(current) if !current.is_empty() => {}
                _ => {
                    let remaining = self.steps.len() - idx - 1;
                    if remaining > 0 {
                        warn!(
                            step = step.name(),
                            remaining, "no people left, stopping pipeline early"
                        );
                    }
                    info!(records = 0, "pipeline run completed");
                    return Ok(());
                }
            }
        }

        info!(
            records = people.as_ref().map_or(0, Vec::len),
            "pipeline run completed"
        );
        Ok(())
    }
}
