//! Runtime-checked variable-arity functions.
//!
//! The macros in [`compose`](crate::compose) fix every arity at compile time.
//! This module is the dynamic counterpart: a [`Function`] takes its arguments
//! as a `Vec<V>`, so it can be bound, cycled and joined with argument counts
//! that are only known at runtime, and arity errors surface as
//! [`CallError::ArityMismatch`] when the function is called.
//!
//! # Overview
//!
//! - [`Function`]: A shared, cloneable function value with a declared [`Arity`]
//! - [`Function::bind_args`]: Partial application of leading arguments
//! - [`Function::cycle_args`]: Move the first argument to the last position
//! - [`Pipeline`] and [`join_fns`]: Left-to-right composition
//! - [`CallError`]: Arity mismatch or failure of the lifted function
//!
//! # Examples
//!
//! ```
//! use hofkit::variadic::{Arity, CallError, Function, join_fns};
//!
//! let sum = Function::<i64, String>::variadic(0, |numbers| Ok(numbers.into_iter().sum()));
//! let add_ten = sum.bind_args([10]);
//! assert_eq!(add_ten.call(vec![1, 2]), Ok(13));
//!
//! let subtract = Function::<i64, String>::from_fn2(|minuend, subtrahend| Ok(minuend - subtrahend));
//! assert_eq!(subtract.cycle_args().call(vec![1, 10]), Ok(9));
//!
//! let halve = Function::<i64, String>::from_fn1(|number| {
//!     if number % 2 == 0 { Ok(number / 2) } else { Err(format!("{number} is odd")) }
//! });
//! let pipeline = join_fns(add_ten, [halve]);
//! assert_eq!(pipeline.call(vec![4]), Ok(7));
//! assert_eq!(pipeline.call(vec![3]), Err(CallError::Invocation("13 is odd".to_string())));
//!
//! assert_eq!(
//!     subtract.call(vec![1]),
//!     Err(CallError::ArityMismatch { expected: Arity::Exactly(2), actual: 1 })
//! );
//! ```
//!
//! # Sharing
//!
//! Function bodies are reference counted. With the `arc` feature the counter
//! is `Arc` and every body and bound value must be `Send + Sync`; otherwise it
//! is `Rc` and functions stay on the thread that built them.

mod arity;
mod error;
mod function;
mod pipeline;

pub use arity::Arity;
pub use error::CallError;
pub use function::Function;
pub use pipeline::{Pipeline, join_fns};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
pub(crate) type Body<V, E> = dyn Fn(Vec<V>) -> Result<V, CallError<E>> + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type Body<V, E> = dyn Fn(Vec<V>) -> Result<V, CallError<E>>;

/// Bound required of everything a [`Function`] captures.
///
/// `Send + Sync` with the `arc` feature, no requirement without it.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Bound required of everything a [`Function`] captures.
///
/// `Send + Sync` with the `arc` feature, no requirement without it.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}
