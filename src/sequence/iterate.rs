//! Side-effecting iteration.

/// Invokes `side_effect` once per element, in index order, and hands the
/// sequence back.
///
/// Returning the sequence lets `for_each` sit in the middle of a pipeline
/// (for example to log every element before the next stage).
///
/// # Examples
///
/// ```
/// use hofkit::sequence::for_each;
///
/// let mut seen = Vec::new();
/// let names = for_each(vec!["John", "Jane"], |name: &&str| seen.push(*name));
///
/// assert_eq!(seen, vec!["John", "Jane"]);
/// assert_eq!(names, vec!["John", "Jane"]);
/// ```
pub fn for_each<T, F>(sequence: Vec<T>, mut side_effect: F) -> Vec<T>
where
    F: FnMut(&T),
{
    for element in &sequence {
        side_effect(element);
    }
    sequence
}

/// Fallible version of [`for_each`].
///
/// Iteration stops at the first element whose side effect fails; that error
/// is returned and the remaining elements are never visited.
///
/// # Errors
///
/// Returns the first error produced by `side_effect`.
///
/// # Examples
///
/// ```
/// use hofkit::sequence::try_for_each;
///
/// let mut visited = Vec::new();
/// let result = try_for_each(vec![1, 2, 3], |number: &i32| {
///     visited.push(*number);
///     if *number == 2 { Err("two") } else { Ok(()) }
/// });
///
/// assert_eq!(result, Err("two"));
/// assert_eq!(visited, vec![1, 2]);
/// ```
pub fn try_for_each<T, E, F>(sequence: Vec<T>, mut side_effect: F) -> Result<Vec<T>, E>
where
    F: FnMut(&T) -> Result<(), E>,
{
    for element in &sequence {
        side_effect(element)?;
    }
    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_empty_sequence_never_invokes() {
        let mut calls = 0;
        let result = for_each(Vec::<i32>::new(), |_| calls += 1);
        assert_eq!(calls, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn test_try_for_each_returns_sequence_on_success() {
        let result: Result<Vec<i32>, ()> = try_for_each(vec![1, 2], |_| Ok(()));
        assert_eq!(result, Ok(vec![1, 2]));
    }
}
