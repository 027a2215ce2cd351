//! The `cycle_args!` macro for argument reordering.
//!
//! This module provides the [`cycle_args!`] macro which moves the first
//! call-time argument of a function to the last position.

/// Moves the first argument of a function to the last position.
///
/// `cycle_args!(f, __, __, __)` produces `|a, b, c| f(b, c, a)`: the first
/// argument goes last and every other argument shifts one place to the left.
/// There is one `__` per parameter of `f`.
///
/// The point of cycling is to let the "data" argument (usually a sequence)
/// arrive last, so that the "behaviour" argument can be bound first with
/// [`bind_args!`](crate::bind_args).
///
/// # Syntax
///
/// - `cycle_args!(f)` - Returns `f` unchanged
/// - `cycle_args!(f, __)` - Returns `|a| f(a)` (nothing to reorder)
/// - `cycle_args!(f, __, __)` - Returns `|a, b| f(b, a)`
/// - `cycle_args!(f, __, __, __)` - Returns `|a, b, c| f(b, c, a)`
///
/// Functions of up to 6 parameters are supported.
///
/// # Examples
///
/// ## Cycling three arguments
///
/// ```
/// use hofkit::cycle_args;
///
/// fn describe(first: &str, second: &str, third: &str) -> String {
///     format!("{first}-{second}-{third}")
/// }
///
/// let cycled = cycle_args!(describe, __, __, __);
/// assert_eq!(cycled("a", "b", "c"), "b-c-a");
/// ```
///
/// ## Putting the sequence last
///
/// ```
/// use hofkit::{bind_args, cycle_args};
/// use hofkit::sequence::filter_seq;
///
/// let is_even = |number: &i32| number % 2 == 0;
/// let keep_even = bind_args!(cycle_args!(filter_seq, __, __), is_even, __);
///
/// assert_eq!(keep_even(vec![1, 2, 3, 4]), vec![2, 4]);
/// ```
#[macro_export]
macro_rules! cycle_args {
    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, __ $(,)?) => {{
        let function = $function;
        move |first| function(first)
    }};

    ($function:expr, __, __ $(,)?) => {{
        let function = $function;
        move |first, arg2| function(arg2, first)
    }};

    ($function:expr, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, arg2, arg3| function(arg2, arg3, first)
    }};

    ($function:expr, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, arg2, arg3, arg4| function(arg2, arg3, arg4, first)
    }};

    ($function:expr, __, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, arg2, arg3, arg4, arg5| function(arg2, arg3, arg4, arg5, first)
    }};

    ($function:expr, __, __, __, __, __, __ $(,)?) => {{
        let function = $function;
        move |first, arg2, arg3, arg4, arg5, arg6| function(arg2, arg3, arg4, arg5, arg6, first)
    }};
}
