//! Loading the people source.

use crate::error::DriversError;
use crate::person::Person;
use std::path::Path;

/// The two people from the walkthrough: John (17) and Jane (15).
pub fn tutorial_people() -> Vec<Person> {
    vec![Person::new("John", 17), Person::new("Jane", 15)]
}

/// Parses a JSON array of `{ "name": string, "age": integer }` records.
///
/// # Errors
///
/// Returns [`DriversError::ParsePeople`] if `json` is not such an array.
pub fn parse_people(json: &str, origin: &Path) -> Result<Vec<Person>, DriversError> {
    serde_json::from_str(json).map_err(|source| DriversError::ParsePeople {
        path: origin.to_path_buf(),
        source,
    })
}

/// Reads and parses the people file at `path`.
///
/// # Errors
///
/// Returns [`DriversError::ReadPeople`] if the file cannot be read and
/// [`DriversError::ParsePeople`] if its content is not valid.
pub fn load_people(path: &Path) -> Result<Vec<Person>, DriversError> {
    let json = std::fs::read_to_string(path).map_err(|source| DriversError::ReadPeople {
        path: path.to_path_buf(),
        source,
    })?;
    let people = parse_people(&json, path)?;
    tracing::debug!(path = %path.display(), count = people.len(), "loaded people");
    Ok(people)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_people() {
        let people = parse_people(
            r#"[{"name": "John", "age": 17}, {"name": "Jane", "age": 15}]"#,
            Path::new("inline.json"),
        )
        .unwrap();
        assert_eq!(people, tutorial_people());
    }

    #[test]
    fn test_parse_people_rejects_negative_age() {
        let error = parse_people(r#"[{"name": "Kid", "age": -1}]"#, Path::new("bad.json"))
            .unwrap_err();
        assert!(matches!(error, DriversError::ParsePeople { .. }));
    }
}
