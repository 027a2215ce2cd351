//! Statically typed function composition.
//!
//! This module provides macros for building new functions out of existing
//! ones. Arity is fixed at each call site, so every mismatch is reported by
//! the compiler.
//!
//! # Overview
//!
//! - [`bind_args!`]: Partial application of the leading arguments
//! - [`cycle_args!`]: Move the first argument to the last position
//! - [`join_fns!`]: Left-to-right composition of unary functions
//! - [`try_join_fns!`]: Fail-fast composition of functions returning [`Result`]
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//!
//! # Examples
//!
//! ## Partial Application
//!
//! ```
//! use hofkit::bind_args;
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! // Each trailing __ is one parameter of the resulting closure.
//! // Note: Do NOT import __ - it is matched as a literal token by the macros.
//! let add_five = bind_args!(add, 5, __);
//! assert_eq!(add_five(3), 8);
//! ```
//!
//! ## Argument Cycling
//!
//! ```
//! use hofkit::cycle_args;
//!
//! fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
//!
//! let cycled = cycle_args!(subtract, __, __);
//! assert_eq!(cycled(3, 10), 7);
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use hofkit::join_fns;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let joined = join_fns!(add_one, double);
//! assert_eq!(joined(5), 12);
//! ```
//!
//! # Data Last
//!
//! The sequence primitives take the sequence first and the behaviour second.
//! Cycling moves the sequence last, binding fixes the behaviour, and what is
//! left is a unary function ready for [`join_fns!`]:
//!
//! ```text
//! filter_seq(sequence, predicate)
//!   cycle_args!  -> |predicate, sequence| filter_seq(sequence, predicate)
//!   bind_args!   -> |sequence| filter_seq(sequence, can_drive)
//! ```
//!
//! # Laws
//!
//! - **Bind**: `bind_args!(f, a, __)(b) == f(a, b)`
//! - **Cycle**: `cycle_args!(f, __, __, __)(a, b, c) == f(b, c, a)`
//! - **Join**: `join_fns!(f, g)(x) == g(f(x))` and `join_fns!(f)(x) == f(x)`

mod bind_macro;
mod cycle_macro;
mod join_macro;
mod utils;

pub use utils::identity;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::bind_args;
pub use crate::cycle_args;
pub use crate::join_fns;
pub use crate::try_join_fns;
