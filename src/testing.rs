//! Testing utilities for logging output.
//!
//! [`CaptureSink`] records every line it receives so tests can assert on the
//! exact format line and style list of each call.
//!
//! ```rust
//! use tintlog::testing::CaptureSink;
//! use tintlog::{msgs, StyledLogger};
//!
//! let logger = StyledLogger::with_sink(CaptureSink::new());
//! logger.warning(msgs!["disk", 91]).info(msgs![]);
//!
//! let lines = logger.sink().lines();
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[0].format, "%cdisk %c91");
//! assert!(lines[1].is_empty());
//! ```

use std::sync::Mutex;

use crate::output::OutputMode;
use crate::render::{resolve, StyledLine};
use crate::sink::ConsoleSink;

/// A sink that records lines instead of printing them.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<StyledLine>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every line written so far.
    pub fn lines(&self) -> Vec<StyledLine> {
        self.guard().clone()
    }

    /// Returns the most recent line, if any.
    pub fn last(&self) -> Option<StyledLine> {
        self.guard().last().cloned()
    }

    /// Number of writes received.
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Returns every line resolved as plain text.
    pub fn plain_text(&self) -> Vec<String> {
        self.guard()
            .iter()
            .map(|line| resolve(line, OutputMode::Text))
            .collect()
    }

    /// Discards recorded lines.
    pub fn clear(&self) {
        self.guard().clear();
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, Vec<StyledLine>> {
        match self.lines.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ConsoleSink for CaptureSink {
    fn write(&self, line: &StyledLine) {
        self.guard().push(line.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_in_order() {
        let sink = CaptureSink::new();
        assert!(sink.is_empty());

        let first = StyledLine {
            format: "%ca".into(),
            styles: vec!["s".into()],
        };
        sink.write(&first);
        sink.write(&StyledLine::default());

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines()[0], first);
        assert_eq!(sink.last(), Some(StyledLine::default()));
        assert_eq!(sink.plain_text(), vec!["a".to_string(), String::new()]);
    }

    #[test]
    fn test_capture_clear() {
        let sink = CaptureSink::new();
        sink.write(&StyledLine::default());
        sink.clear();
        assert!(sink.is_empty());
        assert_eq!(sink.last(), None);
    }
}
