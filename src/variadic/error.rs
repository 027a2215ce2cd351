//! Error type for calls through a variadic function.

use super::Arity;

/// Represents the ways a call to a [`Function`](super::Function) can fail.
///
/// `E` is the caller's own error type, returned by the functions it lifted
/// into [`Function`](super::Function)s.
///
/// # Examples
///
/// ```rust
/// use hofkit::variadic::{Arity, CallError};
///
/// let error: CallError<String> = CallError::ArityMismatch {
///     expected: Arity::Exactly(2),
///     actual: 3,
/// };
/// assert_eq!(
///     format!("{error}"),
///     "arity mismatch: expected exactly 2 arguments, got 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallError<E> {
    /// The function was called with a number of arguments it cannot accept.
    ArityMismatch {
        /// What the underlying function accepts.
        expected: Arity,
        /// How many arguments actually reached it.
        actual: usize,
    },
    /// The underlying function ran and failed.
    Invocation(E),
}

impl<E> CallError<E> {
    /// Returns `true` for [`CallError::ArityMismatch`].
    pub const fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }

    /// Returns the caller's error, if the function itself failed.
    pub fn into_invocation(self) -> Option<E> {
        match self {
            Self::Invocation(error) => Some(error),
            Self::ArityMismatch { .. } => None,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for CallError<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch { expected, actual } => {
                write!(formatter, "arity mismatch: expected {expected}, got {actual}")
            }
            Self::Invocation(error) => write!(formatter, "invocation failed: {error}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CallError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invocation(error) => Some(error),
            Self::ArityMismatch { .. } => None,
        }
    }
}
