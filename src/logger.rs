//! The styled logger.

use once_cell::sync::Lazy;

use crate::message::MessageValue;
use crate::render::{render_line, StyledLine};
use crate::sink::{ConsoleSink, TermSink};
use crate::style::{LogCategory, StyleDescriptor};

/// Prints values to a console sink with category or custom styles.
///
/// Every call performs exactly one write to the sink and returns the logger,
/// so calls can be chained.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tintlog::testing::CaptureSink;
/// use tintlog::{msgs, StyleDescriptor, StyledLogger};
///
/// let logger = StyledLogger::with_sink(CaptureSink::new());
/// logger
///     .success(msgs!["saved", 3, "files"])
///     .error(msgs!["failed:", json!({"code": 404})])
///     .custom("color: hotpink", msgs!["custom"])
///     .custom(StyleDescriptor::new().color("#fff"), msgs!["structured"]);
///
/// assert_eq!(logger.sink().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct StyledLogger<S = TermSink> {
    sink: S,
}

impl StyledLogger<TermSink> {
    /// Creates a logger printing to stdout, configured from the environment.
    pub fn new() -> Self {
        Self::with_sink(TermSink::from_env())
    }
}

impl Default for StyledLogger<TermSink> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ConsoleSink> StyledLogger<S> {
    /// Creates a logger writing to the given sink.
    pub fn with_sink(sink: S) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn success<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.log(LogCategory::Success, values)
    }

    pub fn error<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.log(LogCategory::Error, values)
    }

    pub fn warning<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.log(LogCategory::Warning, values)
    }

    pub fn info<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.log(LogCategory::Info, values)
    }

    pub fn debug<I>(&self, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.log(LogCategory::Debug, values)
    }

    /// Prints values with the style bound to `category`.
    pub fn log<I>(&self, category: LogCategory, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        self.print(category.style(), values)
    }

    /// Prints values with a caller-supplied style.
    ///
    /// A plain string is used verbatim as the style of every segment; a
    /// [`StyleDescriptor`] is serialized like the category styles.
    pub fn custom<D, I>(&self, style: D, values: I) -> &Self
    where
        D: Into<StyleDescriptor>,
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        let style = style.into();
        self.print(&style, values)
    }

    /// Builds the line a call would write, without writing it.
    pub fn render<D, I>(&self, style: D, values: I) -> StyledLine
    where
        D: Into<StyleDescriptor>,
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        render_line(values, &style.into())
    }

    fn print<I>(&self, style: &StyleDescriptor, values: I) -> &Self
    where
        I: IntoIterator,
        I::Item: Into<MessageValue>,
    {
        let line = render_line(values, style);
        log::trace!(
            "console write: {} byte(s), {} style(s)",
            line.format.len(),
            line.styles.len()
        );
        self.sink.write(&line);
        self
    }
}

static LOGGER: Lazy<StyledLogger<TermSink>> = Lazy::new(StyledLogger::new);

/// Returns the process-wide logger used by the logging macros.
///
/// It prints to stdout; its output mode is read once from `TINTLOG_OUTPUT`.
pub fn logger() -> &'static StyledLogger<TermSink> {
    &LOGGER
}

/// Builds a list of [`MessageValue`]s from heterogeneous values.
///
/// ```rust
/// use tintlog::{msgs, MessageValue};
///
/// let values = msgs!["x", 5, MessageValue::Null, None::<u8>];
/// assert_eq!(values.len(), 4);
/// assert!(msgs![].is_empty());
/// ```
#[macro_export]
macro_rules! msgs {
    () => {
        ::std::vec::Vec::<$crate::MessageValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::MessageValue::from($value)),+]
    };
}

/// Prints values with the success style through the process-wide logger.
#[macro_export]
macro_rules! success {
    ($($value:expr),* $(,)?) => {
        $crate::logger().success($crate::msgs![$($value),*])
    };
}

/// Prints values with the error style through the process-wide logger.
#[macro_export]
macro_rules! error {
    ($($value:expr),* $(,)?) => {
        $crate::logger().error($crate::msgs![$($value),*])
    };
}

/// Prints values with the warning style through the process-wide logger.
#[macro_export]
macro_rules! warning {
    ($($value:expr),* $(,)?) => {
        $crate::logger().warning($crate::msgs![$($value),*])
    };
}

/// Prints values with the info style through the process-wide logger.
#[macro_export]
macro_rules! info {
    ($($value:expr),* $(,)?) => {
        $crate::logger().info($crate::msgs![$($value),*])
    };
}

/// Prints values with the debug style through the process-wide logger.
#[macro_export]
macro_rules! debug {
    ($($value:expr),* $(,)?) => {
        $crate::logger().debug($crate::msgs![$($value),*])
    };
}

/// Prints values with a custom style through the process-wide logger.
///
/// ```rust,no_run
/// tintlog::custom!("color: purple; font-style: italic", "hello", 42);
/// ```
#[macro_export]
macro_rules! custom {
    ($style:expr $(, $value:expr)* $(,)?) => {
        $crate::logger().custom($style, $crate::msgs![$($value),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputMode;
    use crate::sink::OUTPUT_ENV;
    use crate::testing::CaptureSink;
    use serde_json::json;
    use serial_test::serial;

    fn capture() -> StyledLogger<CaptureSink> {
        StyledLogger::with_sink(CaptureSink::new())
    }

    #[test]
    fn test_each_category_uses_its_style() {
        let logger = capture();
        logger
            .success(["a"])
            .error(["a"])
            .warning(["a"])
            .info(["a"])
            .debug(["a"]);

        let lines = logger.sink().lines();
        assert_eq!(lines.len(), 5);
        for (line, category) in lines.iter().zip(LogCategory::ALL) {
            assert_eq!(line.format, "%ca");
            assert_eq!(line.styles, vec![category.style().serialize()]);
        }
    }

    #[test]
    fn test_zero_values_still_write() {
        let logger = capture();
        logger.success(msgs![]);
        assert_eq!(logger.sink().len(), 1);
        assert!(logger.sink().lines()[0].is_empty());
    }

    #[test]
    fn test_custom_raw_string() {
        let logger = capture();
        logger.custom("color:pink", msgs!["x", 5, json!({"n": 1})]);
        let line = logger.sink().last().unwrap();
        assert_eq!(line.styles.len(), 4);
        assert!(line.styles.iter().all(|s| s == "color:pink"));
    }

    #[test]
    fn test_custom_structured() {
        let logger = capture();
        let style = StyleDescriptor::new().color("#000").font_weight("normal");
        logger.custom(&style, msgs![1]);
        let line = logger.sink().last().unwrap();
        assert_eq!(
            line.styles,
            vec!["color:#000;font-weight:normal;text-decoration:underline"]
        );
    }

    #[test]
    fn test_custom_pairs() {
        let logger = capture();
        logger.custom([("backgroundColor", "#111")], msgs!["x"]);
        assert_eq!(
            logger.sink().last().unwrap().styles,
            vec!["background-color:#111"]
        );
    }

    #[test]
    fn test_render_does_not_write() {
        let logger = capture();
        let line = logger.render(LogCategory::Info.style(), msgs!["x"]);
        assert_eq!(line.format, "%cx");
        assert!(logger.sink().is_empty());
    }

    #[test]
    fn test_log_by_category() {
        let logger = capture();
        logger.log(LogCategory::Warning, msgs![None::<i32>]);
        let line = logger.sink().last().unwrap();
        assert_eq!(line.format, "%cundefined");
        assert_eq!(line.styles, vec![LogCategory::Warning.style().serialize()]);
    }

    #[test]
    fn test_msgs_macro_trailing_comma() {
        let values = msgs!["a", 1,];
        assert_eq!(values, vec![MessageValue::from("a"), MessageValue::from(1)]);
    }

    #[test]
    #[serial]
    fn test_default_reads_output_env() {
        std::env::set_var(OUTPUT_ENV, "debug");
        let logger = StyledLogger::default();
        let explicit = StyledLogger::new();
        std::env::remove_var(OUTPUT_ENV);
        assert_eq!(logger.sink().mode(), OutputMode::Debug);
        assert_eq!(logger.sink(), explicit.sink());
    }

    #[test]
    fn test_global_logger_is_shared() {
        assert!(std::ptr::eq(logger(), logger()));
    }
}
