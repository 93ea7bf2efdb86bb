//! Turns one raw line of text into a [`Person`].
//!
//! Format: whitespace-separated tokens, the last token is the last name and
//! every token before it is a given name. Runs of whitespace count as one
//! separator, leading and trailing whitespace is ignored.
//!
//! ```text
//! "Adonis Julius Archer"  ->  given ["Adonis", "Julius"], last "Archer"
//! "   Vaughn    Lewis  "  ->  given ["Vaughn"],           last "Lewis"
//! ```

use crate::error::NameError;
use crate::outcome::Outcome;
use crate::person::{MAX_GIVEN_NAMES, Person};

/// Largest number of tokens a line may hold: three given names plus a last name.
pub const MAX_NAME_PARTS: usize = MAX_GIVEN_NAMES + 1;

/// Parse a raw line, reporting the precise reason for rejection.
pub fn parse_name(raw: &str) -> Result<Person, NameError> {
    let parts: Vec<&str> = raw.split_whitespace().collect();

    match parts.len() {
        0 => Err(NameError::Empty),
        1 => Err(NameError::TooFewParts { count: 1 }),
        n if n > MAX_NAME_PARTS => Err(NameError::TooManyParts { count: n }),
        n => Person::new(&parts[..n - 1], parts[n - 1]),
    }
}

/// Stateless name parser used by the read step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameParser;

impl NameParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a raw line into an [`Outcome`], so failures can be collected.
    pub fn parse(&self, raw: &str) -> Outcome<Person> {
        parse_name(raw).into()
    }
}
