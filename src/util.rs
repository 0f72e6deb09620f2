//! Color parsing and conversion helpers.

use console::Color;

use crate::style::StyleParseError;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use tintlog::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
///
/// // Pure green maps to ANSI 46
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Parses a CSS color value into a terminal color.
///
/// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)`, `rgba(r, g, b, a)` (alpha is
/// ignored) and the basic named colors. RGB values map to the nearest ANSI
/// 256-color entry.
///
/// # Example
///
/// ```rust
/// use console::Color;
/// use tintlog::parse_color;
///
/// assert_eq!(parse_color("#ff0000"), Ok(Color::Color256(196)));
/// assert_eq!(parse_color("red"), Ok(Color::Red));
/// assert!(parse_color("not-a-color").is_err());
/// ```
pub fn parse_color(value: &str) -> Result<Color, StyleParseError> {
    let value = value.trim();
    let invalid = || StyleParseError::InvalidColor {
        value: value.to_string(),
    };

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).map(|rgb| Color::Color256(rgb_to_ansi256(rgb))).ok_or_else(invalid);
    }

    let lower = value.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_args(args).map(|rgb| Color::Color256(rgb_to_ansi256(rgb))).ok_or_else(invalid);
    }

    let color = match lower.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "fuchsia" => Color::Magenta,
        "cyan" | "aqua" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Color256(244),
        "orange" => Color::Color256(214),
        _ => return Err(invalid()),
    };
    Ok(color)
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some((pair(0)?, pair(2)?, pair(4)?))
        }
        _ => None,
    }
}

fn parse_rgb_args(args: &str) -> Option<(u8, u8, u8)> {
    let channels: Vec<u8> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .take(3)
        .map(|part| part.parse::<f32>().ok().map(|v| v.clamp(0.0, 255.0).round() as u8))
        .collect::<Option<_>>()?;
    match channels[..] {
        [r, g, b] => Some((r, g, b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_parse_color_long_hex() {
        // #67C23A -> (103, 194, 58) -> cube (2, 3, 1)
        assert_eq!(parse_color("#67C23A"), Ok(Color::Color256(16 + 72 + 18 + 1)));
    }

    #[test]
    fn test_parse_color_short_hex() {
        assert_eq!(parse_color("#f00"), parse_color("#ff0000"));
        assert_eq!(parse_color("#fff"), Ok(Color::Color256(231)));
    }

    #[test]
    fn test_parse_color_rgb_function() {
        assert_eq!(parse_color("rgb(255, 0, 0)"), Ok(Color::Color256(196)));
        assert_eq!(parse_color("RGBA(0, 0, 255, 0.5)"), Ok(Color::Color256(21)));
        assert_eq!(parse_color("rgb(0 255 0)"), Ok(Color::Color256(46)));
    }

    #[test]
    fn test_parse_color_named() {
        assert_eq!(parse_color("Red"), Ok(Color::Red));
        assert_eq!(parse_color(" cyan "), Ok(Color::Cyan));
    }

    #[test]
    fn test_parse_color_invalid() {
        for value in ["#12", "#gggggg", "rgb(1, 2)", "rgb(a, b, c)", "chartreuse-ish", ""] {
            assert_eq!(
                parse_color(value),
                Err(StyleParseError::InvalidColor {
                    value: value.trim().to_string()
                }),
                "{}",
                value
            );
        }
    }
}
