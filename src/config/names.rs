//! Output name table and name validation

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::errors::{SliceError, SliceResult};

lazy_static! {
    // Parse the built-in name table at startup
    static ref DEFAULT_NAMES: Vec<String> = {
        let content = include_str!("../../default_names.toml");
        parse_names_table(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in name table: {}", e);
            Vec::new()
        })
    };

    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$")
        .expect("name pattern is a valid regex");
}

/// The built-in ordered name list
pub fn default_names() -> Vec<String> {
    DEFAULT_NAMES.clone()
}

/// Check that a name is usable as a file stem inside the output directory
///
/// Names must start with an ASCII letter or digit and may otherwise only
/// contain letters, digits, `_`, `.` and `-`. This rules out path
/// separators and leading dots.
pub fn validate_name(name: &str) -> SliceResult<()> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(SliceError::ConfigError(format!("Invalid output name '{}'", name)))
    }
}

/// Read the `names` array from a TOML document
pub fn parse_names_table(content: &str) -> SliceResult<Vec<String>> {
    let toml_value: toml::Value = content.parse()
        .map_err(|e| SliceError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

    names_from_value(&toml_value)
        .unwrap_or_else(|| Err(SliceError::ConfigError("Missing 'names' array".to_string())))
}

/// Extract and validate a `names` array if the document has one
pub(crate) fn names_from_value(toml_value: &toml::Value) -> Option<SliceResult<Vec<String>>> {
    let array = toml_value.get("names")?.as_array()?;

    let mut names = Vec::with_capacity(array.len());
    for value in array {
        let Some(name) = value.as_str() else {
            return Some(Err(SliceError::ConfigError(format!("Name entries must be strings, got {}", value))));
        };
        if let Err(e) = validate_name(name) {
            return Some(Err(e));
        }
        names.push(name.to_string());
    }

    Some(Ok(names))
}

/// Split a comma-separated name list, as given on the command line
pub fn parse_name_list(list: &str) -> SliceResult<Vec<String>> {
    let names: Vec<String> = list
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    for name in &names {
        validate_name(name)?;
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_loaded() {
        let names = default_names();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "hero_xwing");
        assert_eq!(names[9], "vehicle_optimus");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("char_seiya_1").is_ok());
        assert!(validate_name("v2.final-cut").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("../escape").is_err());
        assert!(validate_name("sub/dir").is_err());
        assert!(validate_name(".hidden").is_err());
    }

    #[test]
    fn test_parse_name_list() {
        let names = parse_name_list("a, b ,,c").unwrap();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(parse_name_list("ok,bad name").is_err());
    }

    #[test]
    fn test_parse_names_table_rejects_non_strings() {
        assert!(parse_names_table("names = [1, 2]").is_err());
        assert!(parse_names_table("other = 3").is_err());
    }
}
