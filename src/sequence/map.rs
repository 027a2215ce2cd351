//! Element-wise transformation.

/// Applies `transformation` to every element, producing a sequence of the same
/// length where `output[i] == transformation(input[i])`.
///
/// # Examples
///
/// ```
/// use hofkit::sequence::map_seq;
///
/// let lengths = map_seq(vec!["John", "Jane", "Al"], |name: &str| name.len());
///
/// assert_eq!(lengths, vec![4, 4, 2]);
/// ```
pub fn map_seq<T, U, F>(sequence: Vec<T>, transformation: F) -> Vec<U>
where
    F: FnMut(T) -> U,
{
    sequence.into_iter().map(transformation).collect()
}

/// Fallible version of [`map_seq`].
///
/// # Errors
///
/// Returns the first error produced by `transformation`. No partially mapped
/// sequence is returned.
///
/// # Examples
///
/// ```
/// use hofkit::sequence::try_map_seq;
///
/// let parsed = try_map_seq(vec!["1", "2", "3"], |text: &str| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2, 3]));
///
/// let failed = try_map_seq(vec!["1", "two", "3"], |text: &str| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map_seq<T, U, E, F>(sequence: Vec<T>, transformation: F) -> Result<Vec<U>, E>
where
    F: FnMut(T) -> Result<U, E>,
{
    // `collect` into `Result` stops pulling from the iterator at the first `Err`.
    sequence.into_iter().map(transformation).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_seq_changes_element_type() {
        let result = map_seq(vec![1, 22, 333], |number: i32| number.to_string());
        assert_eq!(result, vec!["1", "22", "333"]);
    }

    #[test]
    fn test_try_map_seq_does_not_transform_after_failure() {
        let mut transformed = Vec::new();
        let result = try_map_seq(vec![1, 2, 3], |number: i32| {
            transformed.push(number);
            if number == 2 { Err("two") } else { Ok(number * 10) }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(transformed, vec![1, 2]);
    }
}
