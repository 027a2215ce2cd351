//! The `Person` record.

use serde::Deserialize;

/// A person on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
}

impl Person {
    /// Creates a person.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Returns `true` if this person has reached `minimum_age`.
    pub const fn can_drive(&self, minimum_age: u32) -> bool {
        self.age >= minimum_age
    }

    /// Consumes the person, keeping only the name.
    pub fn into_name(self) -> String {
        self.name
    }
}
