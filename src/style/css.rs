//! Translation of serialized style strings into terminal styles.
//!
//! The console sink receives styles as CSS declaration lists
//! (`color:#fff;font-weight:bold`). A terminal can only honor a subset of
//! those properties:
//!
//! | Property | Terminal effect |
//! |----------|-----------------|
//! | `color` | foreground color |
//! | `background-color`, `background` | background color |
//! | `font-weight` | bold for `bold`, `bolder` or a weight of 600 and above |
//! | `font-style` | italic for `italic` or `oblique` |
//! | `text-decoration` | underline, strikethrough |
//!
//! Everything else (`padding`, `border-radius`, ...) is ignored.

use console::Style;

use super::error::StyleParseError;
use crate::util::parse_color;

/// Splits a declaration list into trimmed `(name, value)` pairs.
///
/// Names are lowercased. Empty declarations (such as a trailing `;`) are
/// skipped, and a trailing `!important` is dropped from values.
///
/// # Errors
///
/// Returns [`StyleParseError::MalformedDeclaration`] for the first
/// declaration that has no `:` or an empty name.
pub fn parse_declarations(style: &str) -> Result<Vec<(String, String)>, StyleParseError> {
    declarations(style).collect()
}

fn declarations(style: &str) -> impl Iterator<Item = Result<(String, String), StyleParseError>> + '_ {
    style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| {
            let malformed = || StyleParseError::MalformedDeclaration {
                declaration: decl.to_string(),
            };
            let (name, value) = decl.split_once(':').ok_or_else(malformed)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed());
            }
            let value = value.trim();
            let value = value.strip_suffix("!important").unwrap_or(value).trim_end();
            Ok((name.to_ascii_lowercase(), value.to_string()))
        })
}

/// Builds a terminal style from a serialized style string.
///
/// Unsupported properties and declarations that fail to parse are skipped,
/// so this never fails.
///
/// # Example
///
/// ```rust
/// use tintlog::style::to_term_style;
///
/// let style = to_term_style("color:red;font-weight:bold").force_styling(true);
/// assert_eq!(style.apply_to("hi").to_string(), "\x1b[31m\x1b[1mhi\x1b[0m");
/// ```
pub fn to_term_style(style: &str) -> Style {
    declarations(style).fold(Style::new(), |acc, decl| match decl {
        Ok((name, value)) => match apply_declaration(acc.clone(), &name, &value) {
            Ok(next) => next,
            Err(err) => {
                log::trace!("skipping style declaration '{}': {}", name, err);
                acc
            }
        },
        Err(err) => {
            log::trace!("skipping style declaration: {}", err);
            acc
        }
    })
}

fn apply_declaration(style: Style, name: &str, value: &str) -> Result<Style, StyleParseError> {
    let value = value.to_ascii_lowercase();
    let style = match name {
        "color" => style.fg(parse_color(&value)?),
        "background-color" => style.bg(parse_color(&value)?),
        // Shorthand: only a leading color component is honored.
        "background" => {
            let first = value.split_whitespace().next().unwrap_or_default();
            style.bg(parse_color(first)?)
        }
        "font-weight" if is_bold_weight(&value) => style.bold(),
        "font-style" if value == "italic" || value.starts_with("oblique") => style.italic(),
        "text-decoration" | "text-decoration-line" => {
            let mut style = style;
            for part in value.split_whitespace() {
                match part {
                    "underline" => style = style.underlined(),
                    "line-through" => style = style.strikethrough(),
                    _ => {}
                }
            }
            style
        }
        _ => style,
    };
    Ok(style)
}

fn is_bold_weight(value: &str) -> bool {
    match value {
        "bold" | "bolder" => true,
        other => other.parse::<u16>().map(|w| w >= 600).unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(style: &str) -> String {
        to_term_style(style).force_styling(true).apply_to("x").to_string()
    }

    #[test]
    fn test_parse_declarations_basic() {
        let decls = parse_declarations("color:#fff; Font-Weight : bold ;").unwrap();
        assert_eq!(
            decls,
            vec![
                ("color".to_string(), "#fff".to_string()),
                ("font-weight".to_string(), "bold".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_declarations_strips_important() {
        let decls = parse_declarations("color: red !important").unwrap();
        assert_eq!(decls, vec![("color".to_string(), "red".to_string())]);
    }

    #[test]
    fn test_parse_declarations_keeps_colons_in_value() {
        let decls = parse_declarations("background:url(http://x)").unwrap();
        assert_eq!(decls[0].1, "url(http://x)");
    }

    #[test]
    fn test_parse_declarations_malformed() {
        assert_eq!(
            parse_declarations("color:red;bold"),
            Err(StyleParseError::MalformedDeclaration {
                declaration: "bold".to_string()
            })
        );
        assert!(parse_declarations(":red").is_err());
    }

    #[test]
    fn test_parse_declarations_empty() {
        assert_eq!(parse_declarations(""), Ok(vec![]));
        assert_eq!(parse_declarations(" ; ;"), Ok(vec![]));
    }

    #[test]
    fn test_term_style_colors() {
        assert_eq!(render("color:red"), "\x1b[31mx\x1b[0m");
        assert_eq!(render("background-color:blue"), "\x1b[44mx\x1b[0m");
    }

    #[test]
    fn test_term_style_hex_foreground() {
        assert_eq!(render("color:#ff0000"), "\x1b[38;5;196mx\x1b[0m");
    }

    #[test]
    fn test_term_style_weights() {
        assert!(render("font-weight:bold").contains("\x1b[1m"));
        assert!(render("font-weight:700").contains("\x1b[1m"));
        assert_eq!(render("font-weight:400"), "x");
    }

    #[test]
    fn test_term_style_decorations() {
        assert!(render("text-decoration:underline").contains("\x1b[4m"));
        assert!(render("text-decoration:underline line-through").contains("\x1b[9m"));
        assert!(render("font-style:italic").contains("\x1b[3m"));
    }

    #[test]
    fn test_term_style_ignores_unsupported() {
        assert_eq!(render("padding:2px 8px;border-radius:4px"), "x");
    }

    #[test]
    fn test_term_style_skips_bad_declarations() {
        assert_eq!(render("color:nope;garbage;color:green"), "\x1b[32mx\x1b[0m");
    }
}
