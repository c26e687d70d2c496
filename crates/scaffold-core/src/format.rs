//! Formatting utilities

/// Title-case a string the way Python's `str.title()` does.
///
/// A cased character is upper-cased when it follows an uncased one and
/// lower-cased otherwise, so digits and punctuation start a new word:
/// `"calc2go"` becomes `"Calc2Go"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased {
            if prev_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}

/// Human readable title for a project name (`my_server` -> `My Server`)
pub fn display_title(name: &str) -> String {
    title_case(&name.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("HELLO wORLD"), "Hello World");
    }

    #[test]
    fn test_title_case_after_digits_and_punctuation() {
        assert_eq!(title_case("calc2go"), "Calc2Go");
        assert_eq!(title_case("my-server"), "My-Server");
        assert_eq!(title_case("o'neil"), "O'Neil");
    }

    #[test]
    fn test_display_title() {
        assert_eq!(display_title("my_mcp_server"), "My Mcp Server");
        assert_eq!(display_title("weather"), "Weather");
        assert_eq!(display_title("__x"), "  X");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
