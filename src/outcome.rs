//! Success-or-failure value used to collect per-item validation results.
//!
//! Unlike `Result`, an `Outcome` failure is just a message meant for a
//! report. Callers gather many of them and decide afterwards whether the
//! batch as a whole is acceptable.

use std::fmt::Display;

/// The result of validating one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The value, if this is a success.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, if this is a failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

/// Split outcomes into all values, or all failure messages if there was any.
///
/// Order is preserved on both sides.
pub fn partition<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Result<Vec<T>, Vec<String>> {
    let mut values = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(message) => failures.push(message),
        }
    }
    if failures.is_empty() {
        Ok(values)
    } else {
        Err(failures)
    }
}
