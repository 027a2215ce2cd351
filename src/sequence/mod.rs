//! Iteration primitives over ordered sequences.
//!
//! This module provides the three basic higher-order functions that every
//! pipeline is built from:
//!
//! - [`for_each`]: Invoke a side effect once per element
//! - [`filter_seq`]: Keep the elements that satisfy a predicate
//! - [`map_seq`]: Transform every element
//!
//! Each primitive has a fail-fast counterpart ([`try_for_each`],
//! [`try_filter_seq`], [`try_map_seq`]) for callbacks returning [`Result`].
//! The first error stops the iteration and is returned unchanged; no partial
//! result is ever produced.
//!
//! # Ownership
//!
//! Sequences are taken by value and a freshly built [`Vec`] is returned.
//! Callers that want to keep their input around clone it first. This lets the
//! primitives be chained through [`join_fns!`](crate::join_fns) without any
//! borrowing between stages.
//!
//! # Examples
//!
//! ```
//! use hofkit::sequence::{filter_seq, for_each, map_seq};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! let evens = filter_seq(numbers, |number: &i32| number % 2 == 0);
//! let squares = map_seq(evens, |number: i32| number * number);
//!
//! let mut lines = Vec::new();
//! for_each(squares, |square: &i32| lines.push(square.to_string()));
//!
//! assert_eq!(lines, vec!["4", "16", "36"]);
//! ```
//!
//! # Laws
//!
//! - **Filter identity**: `filter_seq(s, |_| true) == s`
//! - **Map identity**: `map_seq(s, identity) == s`
//! - **Map cardinality**: `map_seq(s, t).len() == s.len()`

mod filter;
mod iterate;
mod map;

pub use filter::{filter_seq, try_filter_seq};
pub use iterate::{for_each, try_for_each};
pub use map::{map_seq, try_map_seq};
