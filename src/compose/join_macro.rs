//! The `join_fns!` and `try_join_fns!` macros for left-to-right composition.
//!
//! This module provides [`join_fns!`], which chains unary functions so that
//! each one's output feeds the next, and [`try_join_fns!`], its fail-fast
//! counterpart for stages returning [`Result`].

/// Joins unary functions into a single function, applied left to right.
///
/// `join_fns!(f, g, h)(x)` is equivalent to `h(g(f(x)))`.
///
/// The first stage may be any function reduced to one parameter, typically
/// with [`bind_args!`](crate::bind_args) and [`cycle_args!`](crate::cycle_args).
///
/// # Laws
///
/// - **Definition**: `join_fns!(f, g)(x) == g(f(x))`
/// - **Single stage**: `join_fns!(f)(x) == f(x)`
/// - **Associativity**: `join_fns!(f, join_fns!(g, h)) == join_fns!(join_fns!(f, g), h)`
/// - **Identity**: `join_fns!(identity, f) == f == join_fns!(f, identity)`
///
/// # Syntax
///
/// - `join_fns!(f)` - Returns `f` unchanged
/// - `join_fns!(f, g)` - Returns `|x| g(f(x))`
/// - `join_fns!(f, g, h, ...)` - Joins any number of functions
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use hofkit::join_fns;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // join_fns!(f, g)(x) = g(f(x)) = double(add_one(5)) = 12
/// let joined = join_fns!(add_one, double);
/// assert_eq!(joined(5), 12);
/// ```
///
/// ## Type conversion
///
/// ```
/// use hofkit::join_fns;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let joined = join_fns!(to_string, get_length);
/// assert_eq!(joined(12345), 5);
/// ```
///
/// ## Sequence pipeline
///
/// ```
/// use hofkit::{bind_args, cycle_args, join_fns};
/// use hofkit::sequence::{filter_seq, map_seq};
///
/// let keep_odd = bind_args!(cycle_args!(filter_seq, __, __), |n: &i32| n % 2 == 1, __);
/// let square = bind_args!(cycle_args!(map_seq, __, __), |n: i32| n * n, __);
///
/// let odd_squares = join_fns!(keep_odd, square);
/// assert_eq!(odd_squares(vec![1, 2, 3, 4, 5]), vec![1, 9, 25]);
/// ```
#[macro_export]
macro_rules! join_fns {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::join_fns!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}

/// Joins unary functions returning [`Result`], stopping at the first error.
///
/// `try_join_fns!(f, g)(x)` runs `f(x)`; on `Ok(value)` it returns `g(value)`,
/// on `Err(error)` it returns `Err(error)` without running `g`. Effects of
/// stages that already ran are not undone.
///
/// All stages must share the same error type.
///
/// # Examples
///
/// ```
/// use hofkit::try_join_fns;
///
/// fn parse(text: &str) -> Result<i32, String> {
///     text.parse().map_err(|_| format!("not a number: {text}"))
/// }
///
/// fn checked_double(number: i32) -> Result<i32, String> {
///     number.checked_mul(2).ok_or_else(|| "overflow".to_string())
/// }
///
/// let parse_and_double = try_join_fns!(parse, checked_double);
///
/// assert_eq!(parse_and_double("21"), Ok(42));
/// assert_eq!(parse_and_double("x"), Err("not a number: x".to_string()));
/// ```
#[macro_export]
macro_rules! try_join_fns {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::try_join_fns!($($remaining_functions),+);
        move |input| match first(input) {
            ::core::result::Result::Ok(value) => remaining(value),
            ::core::result::Result::Err(error) => ::core::result::Result::Err(error),
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_join_fns_single() {
        let double = |x: i32| x * 2;
        let joined = join_fns!(double);
        assert_eq!(joined(5), 10);
    }

    #[test]
    fn test_join_fns_left_to_right() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        // square(double(add_one(2))) = square(6) = 36
        let joined = join_fns!(add_one, double, square);
        assert_eq!(joined(2), 36);
    }

    #[test]
    fn test_try_join_fns_short_circuits() {
        let fail = |_: i32| -> Result<i32, &'static str> { Err("stage one") };
        let never_runs = |_: i32| -> Result<i32, &'static str> { panic!("second stage ran") };
        let joined = try_join_fns!(fail, never_runs);
        assert_eq!(joined(1), Err("stage one"));
    }
}
