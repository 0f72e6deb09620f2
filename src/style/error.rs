//! Style parsing errors.

/// Error returned when a style string cannot be translated for the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    /// A color value that is neither hex, `rgb()`/`rgba()`, nor a known name
    InvalidColor { value: String },
    /// A declaration without a `name:value` shape
    MalformedDeclaration { declaration: String },
}

impl std::fmt::Display for StyleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleParseError::InvalidColor { value } => {
                write!(f, "unrecognized color value '{}'", value)
            }
            StyleParseError::MalformedDeclaration { declaration } => {
                write!(f, "malformed style declaration '{}'", declaration)
            }
        }
    }
}

impl std::error::Error for StyleParseError {}
