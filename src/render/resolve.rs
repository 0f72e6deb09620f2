//! Marker substitution for terminal output.

use super::line::StyledLine;
use super::MARKER;
use crate::output::OutputMode;
use crate::style::to_term_style;

/// Substitutes the markers of a line according to an output mode.
///
/// Segment `i + 1` of the format line is rendered with style `i`. A marker
/// with no style left is printed literally, and surplus styles are appended
/// to the line separated by spaces.
///
/// # Example
///
/// ```rust
/// use tintlog::{resolve, OutputMode, StyledLine};
///
/// let line = StyledLine {
///     format: "%cready %c3".to_string(),
///     styles: vec!["color:green".to_string(), "color:red".to_string()],
/// };
/// assert_eq!(resolve(&line, OutputMode::Text), "ready 3");
/// assert_eq!(
///     resolve(&line, OutputMode::Debug),
///     "[color:green]ready [/][color:red]3[/]"
/// );
/// ```
pub fn resolve(line: &StyledLine, mode: OutputMode) -> String {
    if mode.is_debug() {
        resolve_with(line, |style, segment| format!("[{}]{}[/]", style, segment))
    } else if mode.should_use_color() {
        resolve_with(line, |style, segment| {
            to_term_style(style)
                .force_styling(true)
                .apply_to(segment)
                .to_string()
        })
    } else {
        resolve_with(line, |_, segment| segment.to_string())
    }
}

fn resolve_with<F>(line: &StyledLine, apply: F) -> String
where
    F: Fn(&str, &str) -> String,
{
    let mut segments = line.format.split(MARKER);
    let mut out = segments.next().unwrap_or_default().to_string();
    let mut styles = line.styles.iter();

    for segment in segments {
        match styles.next() {
            Some(style) if !segment.is_empty() => out.push_str(&apply(style, segment)),
            Some(_) => {}
            None => {
                out.push_str(MARKER);
                out.push_str(segment);
            }
        }
    }
    for extra in styles {
        out.push(' ');
        out.push_str(extra);
    }

    out
}
