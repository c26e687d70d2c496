//! Project name validation
//!
//! The name becomes a directory and is spliced into Python string literals,
//! shell scripts and Markdown, so it is held to a narrow character set.

use std::path::{Component, Path};

use crate::error::{Result, ScaffoldError};

fn invalid(name: &str, reason: &str) -> ScaffoldError {
    ScaffoldError::InvalidName {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Validate a project name.
///
/// Blocks:
/// - Empty names and names with surrounding whitespace
/// - Absolute paths, drive prefixes, `.` and `..`
/// - Path separators (names must be a single directory name)
/// - Control characters, quotes, backslashes and braces
///
/// ```
/// # use mcp_scaffold::validate_name;
/// assert!(validate_name("my_mcp_server").is_ok());
/// assert!(validate_name("../escape").is_err());
/// assert!(validate_name("foo/bar").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(invalid(name, "name cannot be empty"));
    }

    if name.trim() != name {
        return Err(invalid(name, "name cannot start or end with whitespace"));
    }

    if let Some(c) = name
        .chars()
        .find(|c| c.is_control() || matches!(c, '"' | '\'' | '`' | '\\' | '{' | '}'))
    {
        return Err(invalid(name, &format!("character {:?} is not allowed", c)));
    }

    let mut normal_count = 0;
    for component in Path::new(name).components() {
        match component {
            Component::Normal(_) => normal_count += 1,
            Component::Prefix(_) => return Err(invalid(name, "name cannot contain a drive prefix")),
            Component::RootDir => return Err(invalid(name, "name cannot be an absolute path")),
            Component::CurDir => return Err(invalid(name, "name cannot be the current directory")),
            Component::ParentDir => {
                return Err(invalid(name, "name cannot contain a parent directory"))
            }
        }
    }

    if normal_count != 1 || name.contains(std::path::is_separator) {
        return Err(invalid(
            name,
            "name must be a single directory name without path separators",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["my_mcp_server", "weather-mcp", "calc2", "Server.v2"] {
            assert!(validate_name(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn test_path_like_names_rejected() {
        for name in ["", ".", "..", "a/b", "/abs", "../up", "a/../b", "a/."] {
            assert!(validate_name(name).is_err(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_unsafe_characters_rejected() {
        for name in ["a\"b", "a'b", "a\\b", "{{NAME}}", "tab\there", " padded"] {
            assert!(validate_name(name).is_err(), "{:?} should be rejected", name);
        }
    }

    #[test]
    fn test_error_names_the_input() {
        let err = validate_name("a/b").unwrap_err();
        assert!(err.to_string().contains("'a/b'"));
    }
}
