//! Console output sinks.
//!
//! A sink receives one [`StyledLine`] per logging call and is responsible for
//! substituting its markers. Two sinks ship with the crate:
//!
//! - [`TermSink`]: writes to stdout or stderr through [`console::Term`]
//! - [`WriterSink`]: writes to any [`std::io::Write`]
//!
//! Closures become sinks through [`sink_fn`]; tests usually reach for
//! [`CaptureSink`](crate::testing::CaptureSink).

use std::io::Write;
use std::sync::{Arc, Mutex};

use console::Term;

use crate::output::OutputMode;
use crate::render::{resolve, StyledLine};

/// Environment variable read by [`TermSink::from_env`].
pub const OUTPUT_ENV: &str = "TINTLOG_OUTPUT";

/// Destination of a single logging call.
pub trait ConsoleSink {
    /// Writes one line. Called exactly once per logging call.
    fn write(&self, line: &StyledLine);
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for &S {
    fn write(&self, line: &StyledLine) {
        (**self).write(line)
    }
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for Box<S> {
    fn write(&self, line: &StyledLine) {
        (**self).write(line)
    }
}

impl<S: ConsoleSink + ?Sized> ConsoleSink for Arc<S> {
    fn write(&self, line: &StyledLine) {
        (**self).write(line)
    }
}

/// A sink backed by a closure. Built with [`sink_fn`].
pub struct FnSink<F>(F);

/// Wraps a closure as a sink.
///
/// # Example
///
/// ```rust
/// use tintlog::{sink_fn, StyledLogger, msgs};
///
/// let logger = StyledLogger::with_sink(sink_fn(|line| {
///     assert_eq!(line.format, "%chi");
/// }));
/// logger.info(msgs!["hi"]);
/// ```
pub fn sink_fn<F: Fn(&StyledLine)>(f: F) -> FnSink<F> {
    FnSink(f)
}

impl<F: Fn(&StyledLine)> ConsoleSink for FnSink<F> {
    fn write(&self, line: &StyledLine) {
        (self.0)(line)
    }
}

/// Terminal stream a [`TermSink`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// Writes resolved lines to the terminal.
///
/// Each call produces exactly one line on the target stream. Write errors
/// are swallowed and reported through the `log` facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermSink {
    mode: OutputMode,
    target: Target,
}

impl TermSink {
    /// Creates a stdout sink with automatic color detection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stdout sink with an explicit output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            target: Target::Stdout,
        }
    }

    /// Creates a stdout sink whose mode comes from `TINTLOG_OUTPUT`.
    ///
    /// Falls back to [`OutputMode::Auto`] when the variable is unset or holds
    /// an unknown mode.
    pub fn from_env() -> Self {
        let mode = match std::env::var(OUTPUT_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err| {
                log::debug!("ignoring {}: {}", OUTPUT_ENV, err);
                OutputMode::Auto
            }),
            Err(_) => OutputMode::Auto,
        };
        Self::with_mode(mode)
    }

    /// Returns the sink redirected to a different stream.
    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Resolves `Auto` against the target stream's color support.
    pub fn effective_mode(&self) -> OutputMode {
        match self.mode {
            OutputMode::Auto => {
                let colors = match self.target {
                    Target::Stdout => console::colors_enabled(),
                    Target::Stderr => console::colors_enabled_stderr(),
                };
                if colors {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            explicit => explicit,
        }
    }

    fn term(&self) -> Term {
        match self.target {
            Target::Stdout => Term::stdout(),
            Target::Stderr => Term::stderr(),
        }
    }
}

impl ConsoleSink for TermSink {
    fn write(&self, line: &StyledLine) {
        let text = resolve(line, self.effective_mode());
        if let Err(err) = self.term().write_line(&text) {
            log::debug!("console write failed: {}", err);
        }
    }
}

/// Writes resolved lines to an arbitrary writer, one line per call.
///
/// `Auto` is treated as `Text`: a writer is not assumed to be a terminal.
///
/// # Example
///
/// ```rust
/// use tintlog::{msgs, OutputMode, StyledLogger, WriterSink};
///
/// let logger = StyledLogger::with_sink(WriterSink::new(Vec::new(), OutputMode::Text));
/// logger.success(msgs!["done", 3]);
/// let bytes = logger.into_sink().into_inner();
/// assert_eq!(String::from_utf8(bytes).unwrap(), "done 3\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
    mode: OutputMode,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, mode: OutputMode) -> Self {
        Self {
            writer: Mutex::new(writer),
            mode,
        }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write> ConsoleSink for WriterSink<W> {
    fn write(&self, line: &StyledLine) {
        let mode = match self.mode {
            OutputMode::Auto => OutputMode::Text,
            explicit => explicit,
        };
        let text = resolve(line, mode);
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(err) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            log::debug!("console write failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::cell::RefCell;

    fn sample() -> StyledLine {
        StyledLine {
            format: "%cok %c1".to_string(),
            styles: vec!["color:green".to_string(), "color:red".to_string()],
        }
    }

    #[test]
    fn test_writer_sink_text() {
        let sink = WriterSink::new(Vec::new(), OutputMode::Text);
        sink.write(&sample());
        sink.write(&StyledLine::default());
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "ok 1\n\n");
    }

    #[test]
    fn test_writer_sink_term() {
        let sink = WriterSink::new(Vec::new(), OutputMode::Term);
        sink.write(&sample());
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "\x1b[32mok \x1b[0m\x1b[31m1\x1b[0m\n");
    }

    #[test]
    fn test_writer_sink_auto_is_plain() {
        let sink = WriterSink::new(Vec::new(), OutputMode::Auto);
        sink.write(&sample());
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "ok 1\n");
    }

    #[test]
    fn test_fn_sink_receives_line() {
        let seen = RefCell::new(Vec::new());
        let sink = sink_fn(|line: &StyledLine| seen.borrow_mut().push(line.clone()));
        sink.write(&sample());
        assert_eq!(seen.into_inner(), vec![sample()]);
    }

    #[test]
    fn test_reference_and_box_forward() {
        let sink = WriterSink::new(Vec::new(), OutputMode::Text);
        (&sink).write(&sample());
        {
            let boxed: Box<dyn ConsoleSink + '_> = Box::new(&sink);
            boxed.write(&sample());
        }
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "ok 1\nok 1\n");
    }

    #[test]
    fn test_term_sink_builder() {
        let sink = TermSink::with_mode(OutputMode::Debug).target(Target::Stderr);
        assert_eq!(sink.mode(), OutputMode::Debug);
        assert_eq!(sink.effective_mode(), OutputMode::Debug);
    }

    #[test]
    #[serial]
    fn test_term_sink_auto_resolution() {
        console::set_colors_enabled(true);
        assert_eq!(TermSink::new().effective_mode(), OutputMode::Term);
        console::set_colors_enabled(false);
        assert_eq!(TermSink::new().effective_mode(), OutputMode::Text);
    }

    #[test]
    #[serial]
    fn test_term_sink_from_env() {
        std::env::set_var(OUTPUT_ENV, "debug");
        assert_eq!(TermSink::from_env().mode(), OutputMode::Debug);
        std::env::set_var(OUTPUT_ENV, "sparkly");
        assert_eq!(TermSink::from_env().mode(), OutputMode::Auto);
        std::env::remove_var(OUTPUT_ENV);
        assert_eq!(TermSink::from_env().mode(), OutputMode::Auto);
    }
}
