//! Driving-age sample application.
//!
//! Reads a roster of people, keeps the ones old enough to drive, and writes
//! their names to a line sink. The selection is a hofkit pipeline; everything
//! around it (reading the source, writing the sink, logging) lives here, in
//! the caller, because hofkit performs no I/O of its own.
//!
//! # Modules
//!
//! - [`person`]: The `Person` record
//! - [`roster`]: A roster of people plus the minimum driving age
//! - [`source`]: Loading people from JSON
//! - [`sink`]: Writing one name per line
//! - [`error`]: Errors of the sample

pub mod error;
pub mod person;
pub mod roster;
pub mod sink;
pub mod source;

pub use error::DriversError;
pub use person::Person;
pub use roster::Roster;
