//! Style descriptors and their serialization.

use super::case::to_hyphen_case;

/// Property name that carries the text decoration.
pub const TEXT_DECORATION: &str = "textDecoration";

/// A set of visual attributes applied to printed text.
///
/// A descriptor is either a list of properties serialized key by key, or a
/// pre-formatted style string emitted verbatim.
///
/// # Example
///
/// ```rust
/// use tintlog::StyleDescriptor;
///
/// let style = StyleDescriptor::new()
///     .color("#fff")
///     .background_color("#333")
///     .font_weight("bold");
/// assert_eq!(
///     style.serialize(),
///     "color:#fff;background-color:#333;font-weight:bold"
/// );
///
/// let raw = StyleDescriptor::from("color: red; font-size: 14px");
/// assert_eq!(raw.serialize(), "color: red; font-size: 14px");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleDescriptor {
    /// Properties in insertion order, names in camel or hyphen case.
    Structured(Vec<(String, String)>),
    /// A pre-formatted style string.
    Raw(String),
}

impl StyleDescriptor {
    /// Creates an empty structured descriptor.
    pub fn new() -> Self {
        StyleDescriptor::Structured(Vec::new())
    }

    /// Creates a raw descriptor from a pre-formatted style string.
    pub fn raw(style: impl Into<String>) -> Self {
        StyleDescriptor::Raw(style.into())
    }

    /// Sets a property, returning the updated descriptor for chaining.
    ///
    /// An existing property keeps its position and takes the new value; a new
    /// one is appended. Raw descriptors are returned unchanged.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_in_place(name.into(), value.into());
        self
    }

    pub fn color(self, value: impl Into<String>) -> Self {
        self.set("color", value)
    }

    pub fn background_color(self, value: impl Into<String>) -> Self {
        self.set("backgroundColor", value)
    }

    pub fn padding(self, value: impl Into<String>) -> Self {
        self.set("padding", value)
    }

    pub fn border_radius(self, value: impl Into<String>) -> Self {
        self.set("borderRadius", value)
    }

    pub fn font_weight(self, value: impl Into<String>) -> Self {
        self.set("fontWeight", value)
    }

    pub fn text_decoration(self, value: impl Into<String>) -> Self {
        self.set(TEXT_DECORATION, value)
    }

    /// Returns a copy with one property overridden.
    pub fn with_property(&self, name: &str, value: &str) -> Self {
        self.clone().set(name, value)
    }

    /// Returns a copy whose text decoration is `underline`.
    pub fn underlined(&self) -> Self {
        self.with_property(TEXT_DECORATION, "underline")
    }

    /// Returns the value of a property, if this is a structured descriptor
    /// that has it.
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            StyleDescriptor::Structured(props) => props
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            StyleDescriptor::Raw(_) => None,
        }
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, StyleDescriptor::Raw(_))
    }

    /// Serializes the descriptor into the string handed to the console.
    ///
    /// Raw descriptors yield their string verbatim. Structured descriptors
    /// yield `name:value` pairs joined by `;`, with names hyphenated.
    pub fn serialize(&self) -> String {
        match self {
            StyleDescriptor::Raw(style) => style.clone(),
            StyleDescriptor::Structured(props) => props
                .iter()
                .map(|(name, value)| format!("{}:{}", to_hyphen_case(name), value))
                .collect::<Vec<_>>()
                .join(";"),
        }
    }

    fn set_in_place(&mut self, name: String, value: String) {
        if let StyleDescriptor::Structured(props) = self {
            match props.iter_mut().find(|(key, _)| *key == name) {
                Some((_, existing)) => *existing = value,
                None => props.push((name, value)),
            }
        }
    }
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for StyleDescriptor {
    fn from(style: &str) -> Self {
        StyleDescriptor::Raw(style.to_string())
    }
}

impl From<String> for StyleDescriptor {
    fn from(style: String) -> Self {
        StyleDescriptor::Raw(style)
    }
}

impl From<&StyleDescriptor> for StyleDescriptor {
    fn from(style: &StyleDescriptor) -> Self {
        style.clone()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleDescriptor::new(), |style, (k, v)| style.set(k, v))
    }
}

impl<K: Into<String>, V: Into<String>> From<Vec<(K, V)>> for StyleDescriptor {
    fn from(props: Vec<(K, V)>) -> Self {
        props.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for StyleDescriptor {
    fn from(props: [(K, V); N]) -> Self {
        props.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_serialize_in_order() {
        let style = StyleDescriptor::new()
            .color("#67C23A")
            .background_color("#F0F9EB")
            .padding("2px 8px");
        assert_eq!(
            style.serialize(),
            "color:#67C23A;background-color:#F0F9EB;padding:2px 8px"
        );
    }

    #[test]
    fn test_empty_structured_serializes_empty() {
        assert_eq!(StyleDescriptor::new().serialize(), "");
    }

    #[test]
    fn test_raw_serializes_verbatim() {
        let style = StyleDescriptor::raw("color:red; fontWeight: bold");
        assert_eq!(style.serialize(), "color:red; fontWeight: bold");
    }

    #[test]
    fn test_from_str_is_raw() {
        assert!(StyleDescriptor::from("color:red").is_raw());
        assert!(StyleDescriptor::from(String::from("color:red")).is_raw());
    }

    #[test]
    fn test_from_pairs_is_structured() {
        let style = StyleDescriptor::from([("color", "red"), ("fontSize", "12px")]);
        assert!(!style.is_raw());
        assert_eq!(style.serialize(), "color:red;font-size:12px");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let style = StyleDescriptor::new()
            .text_decoration("none")
            .color("red")
            .text_decoration("underline");
        assert_eq!(
            style.serialize(),
            "text-decoration:underline;color:red"
        );
    }

    #[test]
    fn test_underlined_appends_when_missing() {
        let base = StyleDescriptor::new().color("red");
        let underlined = base.underlined();
        assert_eq!(underlined.serialize(), "color:red;text-decoration:underline");
        // Base is left untouched
        assert_eq!(base.serialize(), "color:red");
    }

    #[test]
    fn test_raw_ignores_overrides() {
        let raw = StyleDescriptor::raw("color:blue");
        assert_eq!(raw.underlined(), raw);
        assert_eq!(raw.clone().set("color", "red").serialize(), "color:blue");
    }

    #[test]
    fn test_get_property() {
        let style = StyleDescriptor::new().font_weight("bold");
        assert_eq!(style.get("fontWeight"), Some("bold"));
        assert_eq!(style.get("color"), None);
        assert_eq!(StyleDescriptor::raw("color:red").get("color"), None);
    }

    #[test]
    fn test_display_matches_serialize() {
        let style = StyleDescriptor::new().border_radius("4px");
        assert_eq!(style.to_string(), "border-radius:4px");
    }
}
