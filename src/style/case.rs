//! Property-name case conversion.

/// Converts a camel-case property name to its hyphenated CSS form.
///
/// Every ASCII uppercase letter is replaced by a hyphen followed by its
/// lowercase form. Names that are already hyphenated pass through unchanged.
///
/// # Example
///
/// ```rust
/// use tintlog::style::to_hyphen_case;
///
/// assert_eq!(to_hyphen_case("backgroundColor"), "background-color");
/// assert_eq!(to_hyphen_case("font-weight"), "font-weight");
/// ```
pub fn to_hyphen_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hyphen_case_camel() {
        assert_eq!(to_hyphen_case("backgroundColor"), "background-color");
        assert_eq!(to_hyphen_case("fontWeight"), "font-weight");
        assert_eq!(to_hyphen_case("borderTopLeftRadius"), "border-top-left-radius");
    }

    #[test]
    fn test_to_hyphen_case_plain() {
        assert_eq!(to_hyphen_case("color"), "color");
        assert_eq!(to_hyphen_case(""), "");
    }

    #[test]
    fn test_to_hyphen_case_idempotent() {
        let once = to_hyphen_case("textDecoration");
        assert_eq!(to_hyphen_case(&once), once);
    }

    #[test]
    fn test_to_hyphen_case_leading_uppercase() {
        assert_eq!(to_hyphen_case("WebkitTransition"), "-webkit-transition");
    }

    #[test]
    fn test_to_hyphen_case_non_ascii_untouched() {
        assert_eq!(to_hyphen_case("Ärger"), "Ärger");
    }
}
