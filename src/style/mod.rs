//! Style descriptors and their terminal translation.
//!
//! This module provides the styling primitives:
//!
//! - [`StyleDescriptor`]: A structured property list or a raw style string
//! - [`LogCategory`]: The predefined categories and their fixed styles
//! - [`to_hyphen_case`]: Property-name conversion used during serialization
//! - [`to_term_style`]: Translation of serialized styles for terminals
//! - [`StyleParseError`]: Errors from style-string parsing

mod case;
mod category;
mod css;
mod descriptor;
mod error;

pub use case::to_hyphen_case;
pub use category::LogCategory;
pub use css::{parse_declarations, to_term_style};
pub use descriptor::{StyleDescriptor, TEXT_DECORATION};
pub use error::StyleParseError;
