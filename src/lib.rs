//! # hofkit
//!
//! A small library of higher-order functions for Rust.
//!
//! ## Overview
//!
//! hofkit collects the handful of building blocks that most functional
//! pipelines are made of:
//!
//! - **Iteration primitives**: [`for_each`](sequence::for_each),
//!   [`filter_seq`](sequence::filter_seq), [`map_seq`](sequence::map_seq)
//!   and their fail-fast `try_*` forms
//! - **Typed composition**: `bind_args!`, `cycle_args!`, `join_fns!` and
//!   `try_join_fns!` macros whose arity is fixed at compile time
//! - **Variadic functions**: [`variadic::Function`], a dynamically checked
//!   function value that can be bound, cycled and joined at runtime
//!
//! The library performs no I/O. Sinks (functions that write a line, append to
//! a file, ...) and sources (sequences of records) are always supplied by the
//! caller.
//!
//! ## Feature Flags
//!
//! - `sequence`: Iteration primitives
//! - `compose`: Typed composition macros
//! - `variadic`: Runtime-checked variable-arity functions
//! - `arc`: Share variadic function bodies through `Arc` instead of `Rc`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use hofkit::prelude::*;
//! use hofkit::{bind_args, cycle_args, join_fns};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//! }
//!
//! let people = vec![
//!     Person { name: "John", age: 17 },
//!     Person { name: "Jane", age: 15 },
//! ];
//!
//! let can_drive = |person: &Person| person.age >= 17;
//! let get_name = |person: Person| person.name;
//!
//! let driver_names = join_fns!(
//!     bind_args!(cycle_args!(filter_seq, __, __), can_drive, __),
//!     bind_args!(cycle_args!(map_seq, __, __), get_name, __),
//! );
//!
//! assert_eq!(driver_names(people), vec!["John"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the iteration primitives, the typed composition helpers and the
/// variadic function types.
///
/// # Usage
///
/// ```rust
/// use hofkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "variadic")]
    pub use crate::variadic::{Arity, CallError, Function, Pipeline};
}

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "variadic")]
pub mod variadic;
