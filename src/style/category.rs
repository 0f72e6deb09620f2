//! Log categories and their fixed styles.

use once_cell::sync::Lazy;

use super::descriptor::StyleDescriptor;

/// One of the predefined logging categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogCategory {
    Success,
    Error,
    Warning,
    Info,
    Debug,
}

impl LogCategory {
    /// All categories, in declaration order.
    pub const ALL: [LogCategory; 5] = [
        LogCategory::Success,
        LogCategory::Error,
        LogCategory::Warning,
        LogCategory::Info,
        LogCategory::Debug,
    ];

    /// Returns the lowercase name of the category.
    pub fn name(self) -> &'static str {
        match self {
            LogCategory::Success => "success",
            LogCategory::Error => "error",
            LogCategory::Warning => "warning",
            LogCategory::Info => "info",
            LogCategory::Debug => "debug",
        }
    }

    /// Returns the style bound to this category.
    pub fn style(self) -> &'static StyleDescriptor {
        &CATEGORY_STYLES[self as usize]
    }
}

impl std::fmt::Display for LogCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LogCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown log category '{}'", s))
    }
}

fn badge(color: &str, background: &str) -> StyleDescriptor {
    StyleDescriptor::new()
        .color(color)
        .background_color(background)
        .padding("2px 8px")
        .border_radius("4px")
        .font_weight("bold")
}

// Indexed by `LogCategory as usize`.
static CATEGORY_STYLES: Lazy<[StyleDescriptor; 5]> = Lazy::new(|| {
    [
        badge("#67C23A", "#F0F9EB"),
        badge("#F56C6C", "#FEF0F0"),
        badge("#E6A23C", "#FDF6EC"),
        badge("#909399", "#F4F4F5"),
        badge("#409EFF", "#ECF5FF"),
    ]
});
