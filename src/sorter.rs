//! Ordering of people: last name first, then the joined given names.
//!
//! Both keys compare ordinally (byte order of the UTF-8 text), so the
//! result is case-sensitive and independent of locale.

use std::cmp::Ordering;

use crate::error::Result;
use crate::person::Person;
use crate::step::Transform;

/// Compare two people by last name, then by given names joined with a space.
pub fn compare_people(a: &Person, b: &Person) -> Ordering {
    a.last_name()
        .cmp(b.last_name())
        .then_with(|| a.joined_given_names().cmp(&b.joined_given_names()))
}

/// Return a sorted copy of `people`.
///
/// The sort is stable: people equal on both keys keep their input order.
pub fn sort_people(people: &[Person]) -> Vec<Person> {
    let mut sorted = people.to_vec();
    sorted.sort_by(compare_people);
    sorted
}

/// SORT - orders the current people with [`compare_people`].
#[derive(Debug, Default)]
pub struct SortNamesStep;

impl SortNamesStep {
    pub fn new() -> Self {
        Self
    }
}

impl Transform for SortNamesStep {
    fn transform(&self, people: Vec<Person>) -> Result<Vec<Person>> {
        Ok(sort_people(&people))
    }

    fn name(&self) -> &str {
        "SORT"
    }
}
