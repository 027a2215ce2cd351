//! Declared arity of a variadic function.

use std::fmt;

/// The number of arguments a [`Function`](super::Function) accepts.
///
/// # Examples
///
/// ```
/// use hofkit::variadic::Arity;
///
/// assert!(Arity::Exactly(2).accepts(2));
/// assert!(!Arity::Exactly(2).accepts(3));
/// assert!(Arity::AtLeast(1).accepts(5));
/// assert_eq!(Arity::Exactly(3).after_binding(1), Arity::Exactly(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many arguments.
    Exactly(usize),
    /// This many arguments or more.
    AtLeast(usize),
}

impl Arity {
    /// Returns `true` if a call with `count` arguments is acceptable.
    #[inline]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(expected) => count == expected,
            Self::AtLeast(minimum) => count >= minimum,
        }
    }

    /// Returns `true` for [`Arity::AtLeast`].
    #[inline]
    pub const fn is_variadic(self) -> bool {
        matches!(self, Self::AtLeast(_))
    }

    /// The arity left once `bound` leading arguments have been supplied.
    ///
    /// Saturates at zero. Binding more values than a fixed arity allows is not
    /// rejected here; the call itself fails later.
    #[inline]
    #[must_use]
    pub const fn after_binding(self, bound: usize) -> Self {
        match self {
            Self::Exactly(expected) => Self::Exactly(expected.saturating_sub(bound)),
            Self::AtLeast(minimum) => Self::AtLeast(minimum.saturating_sub(bound)),
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(1) => write!(formatter, "exactly 1 argument"),
            Self::Exactly(expected) => write!(formatter, "exactly {expected} arguments"),
            Self::AtLeast(1) => write!(formatter, "at least 1 argument"),
            Self::AtLeast(minimum) => write!(formatter, "at least {minimum} arguments"),
        }
    }
}
