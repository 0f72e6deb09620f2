//! Caller values and their formatting.
//!
//! - [`MessageValue`]: The closed set of value kinds a call can carry
//! - [`Number`]: Numeric values, printed the way a browser console does
//! - [`format_message`]: Turns one value into text plus embedded styles

mod format;
mod value;

pub use format::{format_message, FormattedMessage};
pub use value::{MessageValue, Number};
