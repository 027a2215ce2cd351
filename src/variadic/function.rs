//! Runtime-checked function values.

use super::{Arity, Body, CallError, ReferenceCounter, Shareable};
use smallvec::SmallVec;
use std::fmt;

/// Bound prefixes up to this length are stored inline.
const INLINE_BOUND_ARGUMENTS: usize = 4;

/// A function value taking a runtime list of arguments.
///
/// Every argument and the result share the value type `V`; failures of the
/// lifted function are reported as `E`. The declared [`Arity`] is checked on
/// every call of a function built with [`Function::new`] or a
/// `Function::from_fnN` constructor. Derived functions ([`bind_args`],
/// [`cycle_args`], [`join_fns`](super::join_fns)) never check anything
/// themselves; they forward to the function they wrap, which does.
///
/// Cloning is cheap: the body is shared.
///
/// [`bind_args`]: Function::bind_args
/// [`cycle_args`]: Function::cycle_args
///
/// # Examples
///
/// ```
/// use hofkit::variadic::{Arity, CallError, Function};
///
/// let subtract = Function::<i64, String>::from_fn2(|minuend, subtrahend| Ok(minuend - subtrahend));
///
/// assert_eq!(subtract.call(vec![10, 3]), Ok(7));
/// assert_eq!(
///     subtract.call(vec![10]),
///     Err(CallError::ArityMismatch { expected: Arity::Exactly(2), actual: 1 })
/// );
/// ```
pub struct Function<V, E> {
    arity: Arity,
    body: ReferenceCounter<Body<V, E>>,
}

macro_rules! impl_from_fn {
    (@value $argument:ident) => {
        V
    };

    ($($count:literal => [$($argument:ident),*]);+ $(;)?) => {
        paste::paste! {
            $(
                #[doc = "Lifts a function of " $count " parameters into a `Function` of arity `Exactly(" $count ")`."]
                ///
                /// A call with any other number of arguments fails with
                /// [`CallError::ArityMismatch`] without running `function`.
                pub fn [<from_fn $count>]<F>(function: F) -> Self
                where
                    F: Fn($(impl_from_fn!(@value $argument)),*) -> Result<V, E> + Shareable + 'static,
                {
                    let expected = Arity::Exactly($count);
                    Self::from_body(expected, move |arguments: Vec<V>| {
                        let actual = arguments.len();
                        let [$($argument),*]: [V; $count] = arguments
                            .try_into()
                            .map_err(|_| CallError::ArityMismatch { expected, actual })?;
                        function($($argument),*).map_err(CallError::Invocation)
                    })
                }
            )+
        }
    };
}

impl<V: 'static, E: 'static> Function<V, E> {
    pub(super) fn from_body<F>(arity: Arity, body: F) -> Self
    where
        F: Fn(Vec<V>) -> Result<V, CallError<E>> + Shareable + 'static,
    {
        Self {
            arity,
            body: ReferenceCounter::new(body),
        }
    }

    /// Creates a function of the given arity from a body taking the whole
    /// argument list.
    ///
    /// `function` only runs when the call's argument count satisfies `arity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hofkit::variadic::{Arity, Function};
    ///
    /// let sum = Function::<i64, String>::new(Arity::AtLeast(1), |numbers| {
    ///     Ok(numbers.into_iter().sum())
    /// });
    ///
    /// assert_eq!(sum.call(vec![1, 2, 3]), Ok(6));
    /// assert!(sum.call(vec![]).is_err());
    /// ```
    pub fn new<F>(arity: Arity, function: F) -> Self
    where
        F: Fn(Vec<V>) -> Result<V, E> + Shareable + 'static,
    {
        Self::from_body(arity, move |arguments: Vec<V>| {
            if !arity.accepts(arguments.len()) {
                return Err(CallError::ArityMismatch {
                    expected: arity,
                    actual: arguments.len(),
                });
            }
            function(arguments).map_err(CallError::Invocation)
        })
    }

    /// Creates a function accepting `minimum` arguments or more.
    pub fn variadic<F>(minimum: usize, function: F) -> Self
    where
        F: Fn(Vec<V>) -> Result<V, E> + Shareable + 'static,
    {
        Self::new(Arity::AtLeast(minimum), function)
    }

    impl_from_fn! {
        0 => [];
        1 => [arg1];
        2 => [arg1, arg2];
        3 => [arg1, arg2, arg3];
        4 => [arg1, arg2, arg3, arg4];
    }

    /// The arity this function reports.
    ///
    /// For a bound function this is the wrapped arity minus the number of
    /// bound values, saturating at zero.
    #[inline]
    pub const fn arity(&self) -> Arity {
        self.arity
    }

    /// Calls the function with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`CallError::ArityMismatch`] if the argument count reaching the
    /// underlying function does not match its arity, and
    /// [`CallError::Invocation`] if the underlying function fails.
    #[inline]
    pub fn call(&self, arguments: Vec<V>) -> Result<V, CallError<E>> {
        (self.body)(arguments)
    }

    /// Binds leading arguments.
    ///
    /// Calling the result with `extra` calls `self` with `bound` followed by
    /// `extra`. Binding never validates arity, only the eventual call does.
    /// Binding a bound function again appends after the values it already
    /// holds, so the first bind's values stay leftmost.
    ///
    /// # Examples
    ///
    /// ```
    /// use hofkit::variadic::Function;
    ///
    /// let describe = Function::<String, String>::from_fn3(|a, b, c| Ok(format!("{a}{b}{c}")));
    ///
    /// let bound = describe.bind_args(["x".to_string()]).bind_args(["y".to_string()]);
    /// assert_eq!(bound.call(vec!["z".to_string()]), Ok("xyz".to_string()));
    /// ```
    #[must_use]
    pub fn bind_args<I>(&self, bound: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Clone + Shareable,
    {
        let bound: SmallVec<[V; INLINE_BOUND_ARGUMENTS]> = bound.into_iter().collect();
        let inner = self.clone();
        Self::from_body(self.arity.after_binding(bound.len()), move |extra: Vec<V>| {
            let mut arguments = Vec::with_capacity(bound.len() + extra.len());
            arguments.extend(bound.iter().cloned());
            arguments.extend(extra);
            inner.call(arguments)
        })
    }

    /// Moves the first call-time argument to the last position.
    ///
    /// Argument lists of length zero or one are passed through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use hofkit::variadic::Function;
    ///
    /// let describe = Function::<String, String>::from_fn3(|a, b, c| Ok(format!("{a}{b}{c}")));
    /// let arguments = ["a", "b", "c"].map(String::from).to_vec();
    ///
    /// assert_eq!(describe.cycle_args().call(arguments), Ok("bca".to_string()));
    /// ```
    #[must_use]
    pub fn cycle_args(&self) -> Self {
        let inner = self.clone();
        Self::from_body(self.arity, move |mut arguments: Vec<V>| {
            if arguments.len() > 1 {
                arguments.rotate_left(1);
            }
            inner.call(arguments)
        })
    }
}

impl<V, E> Clone for Function<V, E> {
    fn clone(&self) -> Self {
        Self {
            arity: self.arity,
            body: ReferenceCounter::clone(&self.body),
        }
    }
}

impl<V, E> fmt::Debug for Function<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Function<i64, String>: Clone, fmt::Debug);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Function<i64, String>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Function<i64, String>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn0_rejects_arguments() {
        let constant = Function::<i32, ()>::from_fn0(|| Ok(7));
        assert_eq!(constant.call(vec![]), Ok(7));
        assert_eq!(
            constant.call(vec![1]),
            Err(CallError::ArityMismatch {
                expected: Arity::Exactly(0),
                actual: 1,
            })
        );
    }

    #[test]
    fn test_bind_args_does_not_validate_at_bind_time() {
        let negate = Function::<i32, ()>::from_fn1(|number| Ok(-number));
        let over_bound = negate.bind_args([1, 2]);
        assert_eq!(over_bound.arity(), Arity::Exactly(0));
        assert_eq!(
            over_bound.call(vec![]),
            Err(CallError::ArityMismatch {
                expected: Arity::Exactly(1),
                actual: 2,
            })
        );
    }

    #[cfg(not(feature = "arc"))]
    #[test]
    fn test_arity_mismatch_skips_body() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let add = Function::<i32, ()>::from_fn2(move |first, second| {
            counter.set(counter.get() + 1);
            Ok(first + second)
        });
        assert!(add.call(vec![1, 2, 3]).is_err());
        assert_eq!(calls.get(), 0);
        assert_eq!(add.call(vec![1, 2]), Ok(3));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_cycle_args_passes_short_lists_through() {
        let count = Function::<usize, ()>::variadic(0, |arguments| Ok(arguments.len()));
        let cycled = count.cycle_args();
        assert_eq!(cycled.call(vec![]), Ok(0));
        assert_eq!(cycled.call(vec![9]), Ok(1));
    }

    #[test]
    fn test_debug_shows_arity() {
        let identity = Function::<i32, ()>::from_fn1(Ok);
        assert_eq!(format!("{identity:?}"), "Function { arity: Exactly(1), .. }");
    }
}
