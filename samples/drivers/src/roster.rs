//! A roster of people and the age they may start driving at.

use crate::error::DriversError;
use crate::person::Person;
use crate::sink::LineSink;
use hofkit::sequence::{filter_seq, map_seq, try_for_each};
use hofkit::{bind_args, cycle_args, join_fns};
use std::io::Write;

/// The people to consider and the minimum driving age.
///
/// # Examples
///
/// ```
/// use drivers_sample::{Person, Roster};
///
/// let roster = Roster::new(vec![Person::new("John", 17), Person::new("Jane", 15)], 17);
/// assert_eq!(roster.driver_names(), vec!["John".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    people: Vec<Person>,
    minimum_age: u32,
}

impl Roster {
    /// Creates a roster.
    pub const fn new(people: Vec<Person>, minimum_age: u32) -> Self {
        Self {
            people,
            minimum_age,
        }
    }

    /// The people on the roster, in their original order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The minimum driving age.
    pub const fn minimum_age(&self) -> u32 {
        self.minimum_age
    }

    /// Names of the people allowed to drive, in roster order.
    pub fn driver_names(&self) -> Vec<String> {
        let minimum_age = self.minimum_age;
        let can_drive = move |person: &Person| person.can_drive(minimum_age);

        let select_driver_names = join_fns!(
            bind_args!(cycle_args!(filter_seq, __, __), can_drive, __),
            bind_args!(cycle_args!(map_seq, __, __), Person::into_name, __),
        );

        let names = select_driver_names(self.people.clone());
        tracing::debug!(
            candidates = self.people.len(),
            drivers = names.len(),
            minimum_age,
            "selected drivers"
        );
        names
    }

    /// Writes every driver's name to `sink`, one per line.
    ///
    /// Returns the number of names written.
    ///
    /// # Errors
    ///
    /// Returns [`DriversError::Sink`] on the first failed write. Names after the
    /// failing one are not written.
    pub fn print_drivers<W: Write>(&self, sink: &mut LineSink<W>) -> Result<usize, DriversError> {
        let names = self.driver_names();
        let written = names.len();
        try_for_each(names, |name: &String| sink.write_line(name))?;
        Ok(written)
    }
}
