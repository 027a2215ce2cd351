//! Left-to-right pipelines of variadic functions.

use super::{CallError, Function};
use std::fmt;

/// An ordered, non-empty list of [`Function`]s applied left to right.
///
/// The first stage receives the call-time arguments; every later stage is
/// called with exactly one argument, the previous stage's output. The first
/// failure stops the pipeline.
///
/// # Examples
///
/// ```
/// use hofkit::variadic::{Function, Pipeline};
///
/// let add = Function::<i64, String>::from_fn2(|first, second| Ok(first + second));
/// let double = Function::<i64, String>::from_fn1(|number| Ok(number * 2));
///
/// let pipeline = Pipeline::new(add).then(double);
/// assert_eq!(pipeline.call(vec![3, 4]), Ok(14));
/// ```
pub struct Pipeline<V, E> {
    first: Function<V, E>,
    rest: Vec<Function<V, E>>,
}

impl<V: 'static, E: 'static> Pipeline<V, E> {
    /// Starts a pipeline with a single stage.
    pub const fn new(first: Function<V, E>) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Appends a stage.
    #[must_use]
    pub fn then(mut self, next: Function<V, E>) -> Self {
        self.rest.push(next);
        self
    }

    /// The number of stages, always at least one.
    pub fn stage_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Runs every stage in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing stage. Later stages are not
    /// called and earlier effects are not undone. A later stage that cannot
    /// take exactly one argument fails with [`CallError::ArityMismatch`].
    pub fn call(&self, arguments: Vec<V>) -> Result<V, CallError<E>> {
        let mut value = self.first.call(arguments)?;
        for stage in &self.rest {
            value = stage.call(vec![value])?;
        }
        Ok(value)
    }

    /// Collapses the pipeline into a single [`Function`] with the arity of its
    /// first stage.
    pub fn into_function(self) -> Function<V, E> {
        let arity = self.first.arity();
        Function::from_body(arity, move |arguments| self.call(arguments))
    }
}

impl<V, E> Clone for Pipeline<V, E> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            rest: self.rest.clone(),
        }
    }
}

impl<V, E> fmt::Debug for Pipeline<V, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pipeline")
            .field("first", &self.first)
            .field("rest", &self.rest)
            .finish()
    }
}

/// Joins functions left to right into one [`Function`].
///
/// `join_fns(f, [g, h]).call(args)` is `h(g(f(args)))`. Requiring `first`
/// separately keeps the pipeline non-empty.
///
/// # Examples
///
/// ```
/// use hofkit::variadic::{Function, join_fns};
///
/// let increment = Function::<i64, String>::from_fn1(|number| Ok(number + 1));
/// let square = Function::<i64, String>::from_fn1(|number| Ok(number * number));
///
/// let joined = join_fns(increment, [square]);
/// assert_eq!(joined.call(vec![4]), Ok(25));
/// ```
pub fn join_fns<V, E, I>(first: Function<V, E>, rest: I) -> Function<V, E>
where
    V: 'static,
    E: 'static,
    I: IntoIterator<Item = Function<V, E>>,
{
    rest.into_iter()
        .fold(Pipeline::new(first), Pipeline::then)
        .into_function()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variadic::Arity;

    #[test]
    fn test_single_stage_pipeline_is_the_stage() {
        let negate = Function::<i32, ()>::from_fn1(|number| Ok(-number));
        let pipeline = Pipeline::new(negate.clone());
        assert_eq!(pipeline.stage_count(), 1);
        assert_eq!(pipeline.call(vec![5]), negate.call(vec![5]));
    }

    #[test]
    fn test_binary_later_stage_is_arity_mismatch() {
        let negate = Function::<i32, ()>::from_fn1(|number| Ok(-number));
        let add = Function::<i32, ()>::from_fn2(|first, second| Ok(first + second));
        let joined = join_fns(negate, [add]);
        assert_eq!(
            joined.call(vec![1]),
            Err(CallError::ArityMismatch {
                expected: Arity::Exactly(2),
                actual: 1,
            })
        );
    }

    #[test]
    fn test_into_function_keeps_first_stage_arity() {
        let add = Function::<i32, ()>::from_fn2(|first, second| Ok(first + second));
        let negate = Function::<i32, ()>::from_fn1(|number| Ok(-number));
        let joined = Pipeline::new(add).then(negate).into_function();
        assert_eq!(joined.arity(), Arity::Exactly(2));
        assert_eq!(joined.call(vec![2, 3]), Ok(-5));
    }
}
