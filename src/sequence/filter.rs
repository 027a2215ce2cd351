//! Predicate filtering.

/// Returns the elements of `sequence` for which `predicate` holds, in their
/// original relative order.
///
/// # Examples
///
/// ```
/// use hofkit::sequence::filter_seq;
///
/// let ages = vec![17, 15, 42, 9];
/// let adults = filter_seq(ages, |age: &u32| *age >= 17);
///
/// assert_eq!(adults, vec![17, 42]);
/// ```
pub fn filter_seq<T, P>(sequence: Vec<T>, mut predicate: P) -> Vec<T>
where
    P: FnMut(&T) -> bool,
{
    sequence
        .into_iter()
        .filter(|element| predicate(element))
        .collect()
}

/// Fallible version of [`filter_seq`].
///
/// # Errors
///
/// Returns the first error produced by `predicate`. Elements after the
/// failing one are not tested, and no partially filtered sequence is
/// returned.
///
/// # Examples
///
/// ```
/// use hofkit::sequence::try_filter_seq;
///
/// let parsed = try_filter_seq(vec!["1", "x", "3"], |text: &&str| {
///     text.parse::<i32>().map(|number| number > 1)
/// });
///
/// assert!(parsed.is_err());
/// ```
pub fn try_filter_seq<T, E, P>(sequence: Vec<T>, mut predicate: P) -> Result<Vec<T>, E>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut kept = Vec::with_capacity(sequence.len());
    for element in sequence {
        if predicate(&element)? {
            kept.push(element);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_seq_keeps_relative_order() {
        let result = filter_seq(vec![5, 1, 4, 2, 3], |number: &i32| *number > 2);
        assert_eq!(result, vec![5, 4, 3]);
    }

    #[test]
    fn test_try_filter_seq_stops_at_first_failure() {
        let mut tested = Vec::new();
        let result = try_filter_seq(vec![1, 2, 3], |number: &i32| {
            tested.push(*number);
            if *number == 2 { Err(*number) } else { Ok(true) }
        });
        assert_eq!(result, Err(2));
        assert_eq!(tested, vec![1, 2]);
    }
}
