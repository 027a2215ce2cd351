//! Helper functions for function composition.

/// Returns the value unchanged.
///
/// The identity function is the unit element of [`join_fns!`](crate::join_fns):
/// - `join_fns!(identity, f)` is equivalent to `f`
/// - `join_fns!(f, identity)` is equivalent to `f`
///
/// It is also the transformation for which [`map_seq`](crate::sequence::map_seq)
/// returns its input unchanged.
///
/// # Examples
///
/// ```
/// use hofkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use hofkit::compose::identity;
/// use hofkit::join_fns;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let joined = join_fns!(identity, double);
/// assert_eq!(joined(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
