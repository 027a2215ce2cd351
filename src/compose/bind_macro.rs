//! The `bind_args!` macro for partial application.
//!
//! This module provides the [`bind_args!`] macro which fixes the leading
//! arguments of a function and leaves the trailing ones as parameters.

/// Binds the leading arguments of a function.
///
/// `bind_args!(f, a, b, __)` produces `|c| f(a, b, c)`. Every value before the
/// first `__` is bound, in order, to the leftmost parameters of `f`; each `__`
/// stands for one parameter of the returned closure.
///
/// **Important**: `__` is matched as a literal token. It is not an item of
/// this crate and must not be imported.
///
/// # Syntax
///
/// - `bind_args!(f)` - Returns `f` unchanged (nothing bound)
/// - `bind_args!(f, a, __)` - Returns `|b| f(a, b)`
/// - `bind_args!(f, a, b)` - Returns `|| f(a, b)` (thunk)
/// - `bind_args!(f, __, __)` - Returns `|a, b| f(a, b)`
///
/// Up to 6 bound values and up to 6 remaining parameters are supported.
/// Placeholders must come after all bound values.
///
/// # Rebinding
///
/// The result is an ordinary closure, so it can be bound again. Values bound
/// by the inner call stay leftmost:
///
/// ```
/// use hofkit::bind_args;
///
/// fn volume(length: u32, width: u32, height: u32) -> u32 { length * width * height }
///
/// let with_length = bind_args!(volume, 2, __, __);
/// let with_length_and_width = bind_args!(with_length, 3, __);
/// assert_eq!(with_length_and_width(4), volume(2, 3, 4));
/// ```
///
/// # Type Requirements
///
/// - Bound values are evaluated once, when the closure is built, and cloned on
///   every call, so they must implement [`Clone`]
/// - The original function is never modified
///
/// Calling the result with the wrong number of arguments is a compile-time
/// error. For arity checked at call time see
/// [`Function::bind_args`](crate::variadic::Function::bind_args).
///
/// # Examples
///
/// ## Basic partial application
///
/// ```
/// use hofkit::bind_args;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = bind_args!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
///
/// ## Binding behaviour before data
///
/// ```
/// use hofkit::bind_args;
///
/// fn greet(greeting: &str, name: &str) -> String { format!("{greeting}, {name}!") }
///
/// let hello = bind_args!(greet, "Hello", __);
/// assert_eq!(hello("John"), "Hello, John!");
/// ```
///
/// ## Creating a thunk (all arguments bound)
///
/// ```
/// use hofkit::bind_args;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let thunk = bind_args!(add, 3, 5);
/// assert_eq!(thunk(), 8);
/// ```
#[macro_export]
macro_rules! bind_args {
    // =========================================================================
    // Scanning: collect bound values until the first placeholder
    // =========================================================================

    (@scan [$function:expr] [$($bound:tt)*] [$($pool:ident)*] __ $($rest:tt)*) => {
        $crate::bind_args!(@emit [$function] [$($bound)*] __ $($rest)*)
    };

    (@scan [$function:expr] [$($bound:tt)*] [$($pool:ident)*] $(,)?) => {
        $crate::bind_args!(@emit [$function] [$($bound)*])
    };

    (@scan [$function:expr] [$($bound:tt)*] [$name:ident $($pool:ident)*] $value:expr $(, $($rest:tt)*)?) => {
        $crate::bind_args!(@scan [$function] [$($bound)* $name = $value;] [$($pool)*] $($($rest)*)?)
    };

    (@scan [$function:expr] [$($bound:tt)*] [] $($rest:tt)*) => {
        ::core::compile_error!("bind_args! supports at most 6 bound arguments")
    };

    // =========================================================================
    // Emitting: one rule per number of remaining parameters
    // =========================================================================

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move || function($($name.clone()),*)
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1| function($($name.clone(),)* arg1)
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __, __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1, arg2| function($($name.clone(),)* arg1, arg2)
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __, __, __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1, arg2, arg3| function($($name.clone(),)* arg1, arg2, arg3)
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __, __, __, __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1, arg2, arg3, arg4| function($($name.clone(),)* arg1, arg2, arg3, arg4)
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __, __, __, __, __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1, arg2, arg3, arg4, arg5| {
            function($($name.clone(),)* arg1, arg2, arg3, arg4, arg5)
        }
    }};

    (@emit [$function:expr] [$($name:ident = $value:expr;)*] __, __, __, __, __, __ $(,)?) => {{
        let function = $function;
        $(let $name = $value;)*
        move |arg1, arg2, arg3, arg4, arg5, arg6| {
            function($($name.clone(),)* arg1, arg2, arg3, arg4, arg5, arg6)
        }
    }};

    (@emit [$function:expr] [$($bound:tt)*] $($rest:tt)*) => {
        ::core::compile_error!(
            "bind_args! expects bound values followed by at most 6 trailing `__` placeholders"
        )
    };

    // =========================================================================
    // Entry points
    // =========================================================================

    ($function:expr $(,)?) => {
        $function
    };

    ($function:expr, $($arguments:tt)+) => {
        $crate::bind_args!(
            @scan [$function] [] [bound1 bound2 bound3 bound4 bound5 bound6] $($arguments)+
        )
    };
}
