//! Pipeline step trait and registration types.
//!
//! A step is one of three kinds:
//! - an *extractor* produces the initial set of people from nothing,
//! - a *transformer* maps one set of people to another,
//! - a *passive* step does nothing and is skipped by the processor.
//!
//! Each step is registered with an explicit priority; the builder sorts
//! steps ascending by priority before they run.

use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::person::Person;

/// Standard priorities for the name-sorting steps.
pub mod priority {
    pub const READ: i32 = 100;
    pub const SORT: i32 = 200;
    pub const OUTPUT: i32 = 300;

    /// Priority given to steps that do not declare one.
    pub const UNDECLARED: i32 = i32::MAX;
}

/// A step that produces the initial data set.
pub trait Extract {
    /// Produce the people this pipeline run starts with.
    fn extract(&self) -> Result<Vec<Person>>;

    /// The display name of this step.
    fn name(&self) -> &str;
}

/// A step that maps the current data set to a new one.
pub trait Transform {
    /// Consume the current people and return the people for the next step.
    fn transform(&self, people: Vec<Person>) -> Result<Vec<Person>>;

    /// The display name of this step.
    fn name(&self) -> &str;
}

/// The capability a step offers to the processor.
#[derive(Clone)]
pub enum StepKind {
    Extractor(Rc<dyn Extract>),
    Transformer(Rc<dyn Transform>),
    Passive(String),
}

/// A step plus its optional declared priority.
#[derive(Clone)]
pub struct Step {
    kind: StepKind,
    priority: Option<i32>,
}

impl Step {
    pub fn extractor(step: impl Extract + 'static) -> Self {
        Self::from_kind(StepKind::Extractor(Rc::new(step)))
    }

    pub fn transformer(step: impl Transform + 'static) -> Self {
        Self::from_kind(StepKind::Transformer(Rc::new(step)))
    }

    pub fn passive(name: impl Into<String>) -> Self {
        Self::from_kind(StepKind::Passive(name.into()))
    }

    pub fn from_kind(kind: StepKind) -> Self {
        Self {
            kind,
            priority: None,
        }
    }

    /// Declare the priority this step runs at. Smaller runs first.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn kind(&self) -> &StepKind {
        &self.kind
    }

    /// The priority this step declared, if any.
    pub fn priority(&self) -> Option<i32> {
        self.priority
    }

    /// The priority used for ordering; undeclared steps sort last.
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(priority::UNDECLARED)
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            StepKind::Extractor(step) => step.name(),
            StepKind::Transformer(step) => step.name(),
            StepKind::Passive(name) => name,
        }
    }

    pub fn is_extractor(&self) -> bool {
        matches!(self.kind, StepKind::Extractor(_))
    }

    pub fn is_passive(&self) -> bool {
        matches!(self.kind, StepKind::Passive(_))
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            StepKind::Extractor(_) => "extractor",
            StepKind::Transformer(_) => "transformer",
            StepKind::Passive(_) => "passive",
        };
        f.debug_struct("Step")
            .field("name", &self.name())
            .field("kind", &kind)
            .field("priority", &self.priority)
            .finish()
    }
}
