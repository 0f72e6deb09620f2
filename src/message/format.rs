//! Per-value formatting.

use std::io;

use once_cell::sync::Lazy;
use regex::bytes::Regex;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};

use super::value::{format_float, MessageValue};
use crate::render::MARKER;
use crate::style::StyleDescriptor;

/// Standalone runs of ASCII digits, with ASCII word boundaries on both sides.
static DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)[0-9]+(?-u:\b)").expect("digit-run pattern is valid"));

/// The text of one value together with the styles it embeds.
///
/// When `styles` is non-empty, `text` already carries one marker per style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage {
    pub text: String,
    pub styles: Vec<String>,
}

impl FormattedMessage {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            styles: Vec::new(),
        }
    }

    /// Returns true when the value embeds its own styles.
    pub fn has_styles(&self) -> bool {
        !self.styles.is_empty()
    }
}

/// Formats a single value against a base style.
///
/// - `Null` and `Absent` print as `null` and `undefined`, unstyled.
/// - Numbers carry one marker and the base style with an underline.
/// - Structured values are pretty-printed with 2-space indentation; each
///   digit run is wrapped in a pair of markers that switch to the underlined
///   style and back to the base style.
/// - Everything else prints as-is, unstyled.
///
/// # Example
///
/// ```rust
/// use tintlog::{format_message, LogCategory, MessageValue};
///
/// let formatted = format_message(&MessageValue::from(7), LogCategory::Info.style());
/// assert_eq!(formatted.text, "%c7");
/// assert_eq!(formatted.styles.len(), 1);
/// ```
pub fn format_message(value: &MessageValue, base: &StyleDescriptor) -> FormattedMessage {
    match value {
        MessageValue::Null => FormattedMessage::plain("null"),
        MessageValue::Absent => FormattedMessage::plain("undefined"),
        MessageValue::Number(n) => FormattedMessage {
            text: format!("{}{}", MARKER, n),
            styles: vec![base.underlined().serialize()],
        },
        MessageValue::Structured(json) => {
            highlight_digit_runs(&to_console_json(json), base)
        }
        MessageValue::Other(text) => FormattedMessage::plain(text.as_str()),
    }
}

/// Pretty JSON with 2-space indentation and console-style floats.
fn to_console_json(json: &serde_json::Value) -> String {
    let mut out = Vec::with_capacity(128);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, ConsoleFormatter::default());
    if let Err(err) = json.serialize(&mut ser) {
        log::debug!("pretty-printing failed, using compact form: {}", err);
        return json.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// [`PrettyFormatter`] layout, with floats printed as the console prints
/// numbers (`2` rather than `2.0`).
#[derive(Default)]
struct ConsoleFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for ConsoleFormatter<'_> {
    fn write_f64<W: ?Sized + io::Write>(&mut self, writer: &mut W, value: f64) -> io::Result<()> {
        writer.write_all(format_float(value).as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }
}

/// Wraps every standalone digit run of `text` in a pair of markers.
///
/// Each run contributes two styles: the underlined base for the digits, then
/// the plain base for the text that follows.
pub(crate) fn highlight_digit_runs(text: &str, base: &StyleDescriptor) -> FormattedMessage {
    let mut runs = DIGIT_RUN.find_iter(text.as_bytes()).peekable();
    if runs.peek().is_none() {
        return FormattedMessage::plain(text);
    }

    let underline = base.underlined().serialize();
    let plain = base.serialize();
    let mut out = String::with_capacity(text.len() + 16);
    let mut styles = Vec::new();
    let mut last = 0;

    // Runs are ASCII, so their byte offsets are char boundaries.
    for run in runs {
        out.push_str(&text[last..run.start()]);
        out.push_str(MARKER);
        out.push_str(&text[run.start()..run.end()]);
        out.push_str(MARKER);
        styles.push(underline.clone());
        styles.push(plain.clone());
        last = run.end();
    }
    out.push_str(&text[last..]);

    FormattedMessage { text: out, styles }
}
