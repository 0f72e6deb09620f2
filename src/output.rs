//! Output mode selection.

use std::str::FromStr;

/// Controls how the terminal sink resolves style markers.
///
/// # Example
///
/// ```rust
/// use tintlog::OutputMode;
///
/// let mode: OutputMode = "text".parse().unwrap();
/// assert_eq!(mode, OutputMode::Text);
/// assert!(!mode.should_use_color());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Styled when the terminal supports colors, plain otherwise.
    #[default]
    Auto,
    /// Always emit ANSI styling.
    Term,
    /// Never emit styling; markers are dropped.
    Text,
    /// Render each styled segment as `[style]text[/]`.
    Debug,
}

impl OutputMode {
    /// All modes, in declaration order.
    pub const ALL: [OutputMode; 4] = [
        OutputMode::Auto,
        OutputMode::Term,
        OutputMode::Text,
        OutputMode::Debug,
    ];

    /// Whether ANSI styling should be emitted on stdout.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text | OutputMode::Debug => false,
        }
    }

    pub fn is_debug(&self) -> bool {
        matches!(self, OutputMode::Debug)
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Auto => "auto",
            OutputMode::Term => "term",
            OutputMode::Text => "text",
            OutputMode::Debug => "debug",
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        OutputMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "invalid output mode '{}', expected one of: auto, term, text, debug",
                    s
                )
            })
    }
}
