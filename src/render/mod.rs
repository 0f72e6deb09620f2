//! The rendering path.
//!
//! [`render_line`] turns a call's values and base style into a
//! [`StyledLine`]: one format line with placeholder markers and the ordered
//! styles that go with them. Marker substitution belongs to the console;
//! [`resolve`] implements it for terminals.

mod line;
mod resolve;

pub use line::{render_line, StyledLine};
pub use resolve::resolve;

/// Placeholder marker: "apply the next style from here on".
pub const MARKER: &str = "%c";
