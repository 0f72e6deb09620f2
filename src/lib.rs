//! # Tintlog - Styled Console Logging
//!
//! `tintlog` prints debugging output as styled badges: each call takes any
//! number of values, turns them into text, and pairs the text with CSS-like
//! styles. Numbers are underlined, and so is every number inside a
//! pretty-printed record.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//!
//! tintlog::success!("saved", 3, "files");
//! tintlog::error!("request failed:", json!({"status": 500}));
//! tintlog::custom!("color: white; background-color: #222", "custom badge");
//!
//! // Or through the logger itself, with chaining
//! tintlog::logger()
//!     .info(tintlog::msgs!["step", 1])
//!     .info(tintlog::msgs!["step", 2]);
//! ```
//!
//! ## How a call is printed
//!
//! A call produces a single [`StyledLine`]: a format string carrying `%c`
//! placeholder markers plus one style string per marker, in order.
//!
//! - Plain values (strings, booleans, `null`, `undefined`) get a marker and
//!   the call's base style.
//! - Numbers get a marker and the base style with `text-decoration:underline`.
//! - Records and collections are pretty-printed; every standalone digit run is
//!   wrapped in a marker pair that switches to the underlined style and back.
//!
//! The line is handed to a [`ConsoleSink`], which resolves markers. The
//! default [`TermSink`] translates styles into ANSI sequences according to
//! its [`OutputMode`]:
//!
//! - [`OutputMode::Auto`] (default): styled when the terminal supports colors
//! - [`OutputMode::Term`]: always styled
//! - [`OutputMode::Text`]: markers dropped, no styling
//! - [`OutputMode::Debug`]: styled segments shown as `[style]text[/]`
//!
//! The process-wide logger reads its mode from the `TINTLOG_OUTPUT`
//! environment variable.
//!
//! ## Styles
//!
//! The five categories (`success`, `error`, `warning`, `info`, `debug`) have
//! fixed badge styles, see [`LogCategory`]. Custom calls accept either a raw
//! style string, used verbatim for every segment, or a [`StyleDescriptor`]:
//!
//! ```rust
//! use tintlog::testing::CaptureSink;
//! use tintlog::{msgs, StyleDescriptor, StyledLogger};
//!
//! let logger = StyledLogger::with_sink(CaptureSink::new());
//! let style = StyleDescriptor::new().color("#fff").background_color("#000");
//! logger.custom(style, msgs!["n =", 4]);
//!
//! let line = logger.sink().last().unwrap();
//! assert_eq!(line.format, "%cn = %c4");
//! assert_eq!(line.styles[0], "color:#fff;background-color:#000");
//! assert_eq!(
//!     line.styles[1],
//!     "color:#fff;background-color:#000;text-decoration:underline"
//! );
//! ```

// Internal modules
mod logger;
mod output;
mod sink;
mod util;

// Public submodules
pub mod message;
pub mod render;
pub mod style;
pub mod testing;

pub use logger::{logger, StyledLogger};
pub use message::{format_message, FormattedMessage, MessageValue, Number};
pub use output::OutputMode;
pub use render::{render_line, resolve, StyledLine, MARKER};
pub use sink::{sink_fn, ConsoleSink, FnSink, Target, TermSink, WriterSink, OUTPUT_ENV};
pub use style::{LogCategory, StyleDescriptor, StyleParseError};
pub use util::{parse_color, rgb_to_ansi256};

/// Explicit null value, printed as `null`.
pub use message::MessageValue::Null;
/// Absent value, printed as `undefined`.
pub use message::MessageValue::Absent;
