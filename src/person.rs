//! The parsed form of one personal name.

use std::fmt;

use crate::error::NameError;

/// Maximum number of given names a person may carry.
pub const MAX_GIVEN_NAMES: usize = 3;

/// A person with one last name and between one and three given names.
///
/// Both parts are trimmed on construction and cannot change afterwards.
/// `Display` renders the full name: given names then last name, separated
/// by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    given_names: Vec<String>,
    last_name: String,
}

impl Person {
    /// Build a person from already-split parts.
    pub fn new<I, S>(given_names: I, last_name: &str) -> Result<Self, NameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let last_name = last_name.trim();
        if last_name.is_empty() {
            return Err(NameError::BlankLastName);
        }

        let given_names: Vec<String> = given_names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .collect();
        if given_names.is_empty() {
            return Err(NameError::NoGivenNames);
        }
        if given_names.len() > MAX_GIVEN_NAMES {
            return Err(NameError::TooManyGivenNames {
                count: given_names.len(),
            });
        }
        if let Some(index) = given_names.iter().position(|name| name.is_empty()) {
            return Err(NameError::BlankGivenName { index });
        }

        Ok(Self {
            given_names,
            last_name: last_name.to_string(),
        })
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Given names joined with a single space. Used as the sort tie-break.
    pub fn joined_given_names(&self) -> String {
        self.given_names.join(" ")
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.joined_given_names(), self.last_name)
    }
}
