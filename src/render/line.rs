//! Assembly of the marker line handed to the console.

use super::MARKER;
use crate::message::{format_message, MessageValue};
use crate::style::StyleDescriptor;

/// The payload of a single console write.
///
/// `format` carries placeholder markers; `styles` holds one style string per
/// marker, in the order the markers appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub format: String,
    pub styles: Vec<String>,
}

impl StyledLine {
    /// Returns true when the line carries no text and no styles.
    pub fn is_empty(&self) -> bool {
        self.format.is_empty() && self.styles.is_empty()
    }

    /// Splits the format line at its markers.
    ///
    /// The first segment precedes any marker; segment `i + 1` follows the
    /// `i`-th marker.
    pub fn segments(&self) -> Vec<&str> {
        self.format.split(MARKER).collect()
    }
}

/// Runs the rendering path over a list of values.
///
/// Values that embed styles contribute their own text and styles; all other
/// values are prefixed with a marker and contribute the serialized base
/// style. Values are separated by a single space.
///
/// # Example
///
/// ```rust
/// use tintlog::{render_line, LogCategory, MessageValue};
///
/// let base = LogCategory::Success.style();
/// let line = render_line(
///     [MessageValue::from("x"), MessageValue::from(5), MessageValue::Null],
///     base,
/// );
/// assert_eq!(line.format, "%cx %c5 %cnull");
/// assert_eq!(line.styles.len(), 3);
/// ```
pub fn render_line<I>(values: I, base: &StyleDescriptor) -> StyledLine
where
    I: IntoIterator,
    I::Item: Into<MessageValue>,
{
    let mut line = StyledLine::default();
    // Serialized lazily: a call made only of numbers or records never needs it.
    let mut base_serialized: Option<String> = None;

    for (i, value) in values.into_iter().enumerate() {
        let formatted = format_message(&value.into(), base);
        if i > 0 {
            line.format.push(' ');
        }
        if formatted.has_styles() {
            line.format.push_str(&formatted.text);
            line.styles.extend(formatted.styles);
        } else {
            line.format.push_str(MARKER);
            line.format.push_str(&formatted.text);
            line.styles
                .push(base_serialized.get_or_insert_with(|| base.serialize()).clone());
        }
    }

    line
}
